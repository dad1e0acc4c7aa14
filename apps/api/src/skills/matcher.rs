//! Skill Matcher — finds which vocabulary skills occur in a piece of text.
//!
//! A skill matches when it appears as a whole word, ignoring case. "Whole word"
//! means the occurrence is not directly preceded or followed by an alphanumeric
//! character or underscore, so "Java" never matches inside "JavaScript" and
//! "SQL" never matches inside "NoSQL". Skill names are literals: `C++`, `C#` and
//! `Vue.js` are escaped before they reach the regex engine. Words of a
//! multi-word skill may be separated by any run of whitespace, so a name split
//! across a line break in extracted PDF text still matches.
//!
//! `\b` is not used for the boundaries because it needs a word character on the
//! inside of the match, which makes names ending in punctuation (`C++`, `C#`)
//! unmatchable. The boundary is written out as "start/end of text or a
//! non-word character" instead.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

use crate::skills::vocabulary::{Vocabulary, VocabularyError};

#[derive(Debug)]
struct SkillPattern {
    skill: String,
    regex: Regex,
}

/// Precompiled matcher for a whole vocabulary. Build once, share via `Arc`.
#[derive(Debug)]
pub struct SkillMatcher {
    vocabulary: Vocabulary,
    patterns: Vec<SkillPattern>,
}

impl SkillMatcher {
    pub fn new(vocabulary: Vocabulary) -> Result<Self, VocabularyError> {
        let patterns = vocabulary
            .skills()
            .iter()
            .map(|skill| {
                compile_pattern(skill).map(|regex| SkillPattern {
                    skill: skill.clone(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vocabulary,
            patterns,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the canonical spelling of every vocabulary skill found in `text`.
    /// Empty text yields an empty set.
    pub fn find_skills(&self, text: &str) -> BTreeSet<String> {
        if text.is_empty() {
            return BTreeSet::new();
        }

        self.patterns
            .iter()
            .filter(|p| p.regex.is_match(text))
            .map(|p| p.skill.clone())
            .collect()
    }
}

fn compile_pattern(skill: &str) -> Result<Regex, VocabularyError> {
    // The boundary groups consume a neighbouring character; that is harmless
    // because only the existence of a match is checked.
    let body = skill
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let pattern = format!(r"(?:^|[^\w])(?:{body})(?:[^\w]|$)");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| VocabularyError::Pattern {
            skill: skill.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(skills: &[&str]) -> SkillMatcher {
        SkillMatcher::new(Vocabulary::new(skills.iter().copied()).unwrap()).unwrap()
    }

    fn found(skills: &[&str], text: &str) -> Vec<String> {
        matcher(skills).find_skills(text).into_iter().collect()
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        assert!(found(&["Java"], "JavaScript developer").is_empty());
    }

    #[test]
    fn test_java_matches_standalone_with_punctuation() {
        assert_eq!(found(&["Java"], "java"), vec!["Java"]);
        assert_eq!(found(&["Java"], "Skills: Java, Go"), vec!["Java"]);
        assert_eq!(found(&["Java"], "backend (Java)"), vec!["Java"]);
    }

    #[test]
    fn test_special_characters_are_literal() {
        assert_eq!(
            found(&["C++", "C#"], "Built with C++ and C#"),
            vec!["C#", "C++"]
        );
    }

    #[test]
    fn test_special_characters_are_not_regex_syntax() {
        // Unescaped, "C++" would be a pattern error and "Vue.js" would match "Vuexjs".
        assert!(found(&["Vue.js"], "we use Vuexjs").is_empty());
        assert!(found(&["C++"], "C and CC").is_empty());
        assert_eq!(found(&["Vue.js"], "Frontend in vue.js."), vec!["Vue.js"]);
    }

    #[test]
    fn test_sql_does_not_match_inside_nosql() {
        assert_eq!(
            found(&["SQL", "NoSQL"], "experience with NoSQL databases"),
            vec!["NoSQL"]
        );
    }

    #[test]
    fn test_sql_and_nosql_match_independently() {
        assert_eq!(
            found(&["SQL", "NoSQL"], "SQL and NoSQL stores"),
            vec!["NoSQL", "SQL"]
        );
    }

    #[test]
    fn test_underscore_counts_as_word_character() {
        assert!(found(&["Git"], "my_git_repo").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive_and_returns_canonical_form() {
        assert_eq!(found(&["Node.js"], "NODE.JS services"), vec!["Node.js"]);
        assert_eq!(
            found(&["Machine Learning"], "applied machine learning"),
            vec!["Machine Learning"]
        );
    }

    #[test]
    fn test_multi_word_skill_spans_line_breaks() {
        assert_eq!(
            found(&["Machine Learning"], "Machine\nLearning engineer"),
            vec!["Machine Learning"]
        );
        assert_eq!(
            found(&["Ruby on Rails"], "Ruby  on\r\n Rails"),
            vec!["Ruby on Rails"]
        );
        assert!(found(&["Machine Learning"], "MachineLearning").is_empty());
    }

    #[test]
    fn test_parenthesised_skill_matches() {
        assert_eq!(
            found(
                &["Google Cloud Platform (GCP)"],
                "Deployed to Google Cloud Platform (GCP)."
            ),
            vec!["Google Cloud Platform (GCP)"]
        );
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(found(&["Python", "Java"], "").is_empty());
    }

    #[test]
    fn test_result_is_subset_of_vocabulary() {
        let m = matcher(&["Python", "Rust", "Go"]);
        let text = "Python, Rust, Haskell, Elixir and Go";
        for skill in m.find_skills(text) {
            assert!(m.vocabulary().skills().contains(&skill));
        }
        assert_eq!(m.find_skills(text).len(), 3);
    }

    #[test]
    fn test_matching_is_deterministic() {
        let m = matcher(&["Docker", "Kubernetes", "Linux"]);
        let text = "Linux admin with Docker and Kubernetes";
        assert_eq!(m.find_skills(text), m.find_skills(text));
    }

    #[test]
    fn test_default_vocabulary_compiles() {
        let m = SkillMatcher::new(Vocabulary::default_skills().unwrap()).unwrap();
        let skills = m.find_skills("CI/CD pipelines on AWS with scikit-learn and ASP.NET");
        let skills: Vec<&str> = skills.iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["ASP.NET", "AWS", "CI/CD", "scikit-learn"]);
    }
}
