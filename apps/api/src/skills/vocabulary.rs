//! Skill vocabulary — the ordered, validated list of recognised skill names.
//!
//! Built once at startup and shared read-only. Construction rejects duplicates
//! and malformed entries so a bad list stops the process instead of silently
//! degrading matching.

use std::collections::HashSet;

use thiserror::Error;

/// Skills recognised by default, in display order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "C#",
    "JavaScript",
    "TypeScript",
    "HTML",
    "CSS",
    "SQL",
    "NoSQL",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Express.js",
    "Django",
    "Flask",
    "Spring Boot",
    "Ruby on Rails",
    "ASP.NET",
    "PHP",
    "Laravel",
    "Git",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "CI/CD",
    "Agile",
    "Scrum",
    "AWS",
    "Azure",
    "Google Cloud Platform (GCP)",
    "TensorFlow",
    "PyTorch",
    "scikit-learn",
    "Pandas",
    "NumPy",
    "Machine Learning",
    "Deep Learning",
    "Data Analysis",
    "Data Visualization",
    "Natural Language Processing (NLP)",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "SQLite",
    "Linux",
    "Unix",
    "Windows Server",
    "Cybersecurity",
    "Network Security",
];

#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    #[error("Skill vocabulary is empty")]
    Empty,

    #[error("Skill at position {index} is blank")]
    BlankEntry { index: usize },

    #[error("Skill '{skill}' has leading or trailing whitespace")]
    UntrimmedEntry { skill: String },

    #[error("Skill '{skill}' is listed more than once (case-insensitive)")]
    Duplicate { skill: String },

    #[error("Skill '{skill}' could not be compiled into a matcher: {reason}")]
    Pattern { skill: String, reason: String },
}

/// Immutable, ordered skill list. Order is kept for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    skills: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let skills: Vec<String> = entries.into_iter().map(Into::into).collect();
        if skills.is_empty() {
            return Err(VocabularyError::Empty);
        }

        // Matching ignores case, so "git" and "Git" would be indistinguishable.
        let mut seen = HashSet::with_capacity(skills.len());
        for (index, skill) in skills.iter().enumerate() {
            if skill.trim().is_empty() {
                return Err(VocabularyError::BlankEntry { index });
            }
            if skill.trim() != skill {
                return Err(VocabularyError::UntrimmedEntry {
                    skill: skill.clone(),
                });
            }
            if !seen.insert(skill.to_lowercase()) {
                return Err(VocabularyError::Duplicate {
                    skill: skill.clone(),
                });
            }
        }

        Ok(Self { skills })
    }

    pub fn default_skills() -> Result<Self, VocabularyError> {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_valid() {
        let vocabulary = Vocabulary::default_skills().unwrap();
        assert_eq!(vocabulary.len(), DEFAULT_SKILLS.len());
        assert_eq!(vocabulary.skills()[0], "Python");
        assert!(vocabulary
            .skills()
            .iter()
            .any(|s| s == "Google Cloud Platform (GCP)"));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let vocabulary = Vocabulary::new(["Rust", "Go", "C"]).unwrap();
        assert_eq!(vocabulary.skills(), &["Rust", "Go", "C"]);
    }

    #[test]
    fn test_rejects_empty_vocabulary() {
        let err = Vocabulary::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, VocabularyError::Empty);
    }

    #[test]
    fn test_rejects_duplicates_ignoring_case() {
        let err = Vocabulary::new(["Git", "Docker", "git"]).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::Duplicate {
                skill: "git".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_blank_entry() {
        let err = Vocabulary::new(["Rust", "   "]).unwrap_err();
        assert_eq!(err, VocabularyError::BlankEntry { index: 1 });
    }

    #[test]
    fn test_rejects_untrimmed_entry() {
        let err = Vocabulary::new([" Rust"]).unwrap_err();
        assert!(matches!(err, VocabularyError::UntrimmedEntry { .. }));
    }
}
