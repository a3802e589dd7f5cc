//! Keyword-based intent classification for advisor queries
//!
//! The keyword tables are plain data, one set per language; classification
//! is substring containment over the lowercased query, checked in a fixed
//! priority order.

use super::lang::Lang;

/// Canonical topic of an advisor query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Education,
    Advice,
    PostHorizon,
    Risk,
    Fallback,
}

const AZ_EDUCATION: &[&str] = &["təhsil", "universit", "oxu"];
const AZ_ADVICE: &[&str] = &["məsləhət", "artır", "investisiya"];
const AZ_POST_HORIZON: &[&str] = &["18", "sonra", "plan"];

const EN_EDUCATION: &[&str] = &["education", "universit", "tuition", "study", "school"];
const EN_ADVICE: &[&str] = &["advice", "recommend", "invest", "increase"];
const EN_POST_HORIZON: &[&str] = &["18", "after", "plan"];

// "risk" reads the same in both languages
const RISK: &[&str] = &["risk"];

fn keyword_sets(lang: Lang) -> [(Intent, &'static [&'static str]); 4] {
    match lang {
        Lang::Az => [
            (Intent::Education, AZ_EDUCATION),
            (Intent::Advice, AZ_ADVICE),
            (Intent::PostHorizon, AZ_POST_HORIZON),
            (Intent::Risk, RISK),
        ],
        Lang::En => [
            (Intent::Education, EN_EDUCATION),
            (Intent::Advice, EN_ADVICE),
            (Intent::PostHorizon, EN_POST_HORIZON),
            (Intent::Risk, RISK),
        ],
    }
}

/// Map a free-text query to its canonical intent
pub fn classify_intent(query: &str, lang: Lang) -> Intent {
    let lowered = query.to_lowercase();

    for (intent, keywords) in keyword_sets(lang) {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return intent;
        }
    }

    Intent::Fallback
}
