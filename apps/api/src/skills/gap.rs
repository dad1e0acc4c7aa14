//! Gap Analyzer — skills a job description asks for that the resume lacks,
//! each paired with a course search link.

use std::collections::BTreeSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Search query every recommendation link starts with. The skill name is appended.
pub const COURSE_SEARCH_URL: &str = "https://www.google.com/search?q=online+course+for+";

/// Everything except unreserved URL characters gets percent-encoded, so names
/// like `C++` or `C#` survive as literal query text.
const QUERY_WORD: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapAnalysis {
    /// Sorted by display string.
    pub missing: Vec<String>,
    /// One per entry of `missing`, same order.
    pub recommendations: Vec<Recommendation>,
}

/// Computes `jd_skills − resume_skills` and a recommendation per missing skill.
pub fn analyze(resume_skills: &BTreeSet<String>, jd_skills: &BTreeSet<String>) -> GapAnalysis {
    // BTreeSet iterates in lexicographic order, so `missing` comes out sorted.
    let missing: Vec<String> = jd_skills.difference(resume_skills).cloned().collect();
    let recommendations = missing.iter().map(|s| recommend(s)).collect();

    GapAnalysis {
        missing,
        recommendations,
    }
}

pub fn recommend(skill: &str) -> Recommendation {
    Recommendation {
        title: format!("Course for {skill}"),
        url: format!("{COURSE_SEARCH_URL}{}", search_query(skill)),
    }
}

/// Spaces become `+`; each word is percent-encoded.
fn search_query(skill: &str) -> String {
    skill
        .split(' ')
        .map(|word| utf8_percent_encode(word, QUERY_WORD).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
