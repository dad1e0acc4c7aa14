use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub tesseract_cmd: String,
    pub ocr_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            tesseract_cmd: std::env::var("TESSERACT_CMD")
                .unwrap_or_else(|_| "tesseract".to_string()),
            ocr_timeout_secs: parse_env("OCR_TIMEOUT_SECS", 60)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            tesseract_cmd: "tesseract".to_string(),
            ocr_timeout_secs: 60,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keys are unique to these tests so they cannot race other env readers.
    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u64 = parse_env("PATHUP_TEST_UNSET_VALUE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("PATHUP_TEST_SET_VALUE", " 8081 ");
        let value: u16 = parse_env("PATHUP_TEST_SET_VALUE", 5000).unwrap();
        assert_eq!(value, 8081);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PATHUP_TEST_BAD_VALUE", "eighty");
        let err = parse_env::<u16>("PATHUP_TEST_BAD_VALUE", 5000).unwrap_err();
        assert!(err.to_string().contains("PATHUP_TEST_BAD_VALUE"));
    }
}
