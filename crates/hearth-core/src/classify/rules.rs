//! Ordered keyword tables used by the classifier.
//!
//! Each table is a list of `(keywords, value)` rules evaluated top to bottom;
//! the first rule with any keyword contained in the lowered text wins. Matching
//! is plain substring containment, so `heat` matches "heating" and `low`
//! matches "below".

use crate::enums::{Category, Urgency};

/// One row of a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<T: 'static> {
    pub value: T,
    pub keywords: &'static [&'static str],
}

impl<T: Copy> KeywordRule<T> {
    /// Whether any keyword occurs in `lowered`.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, self.keywords)
    }
}

/// First-match-wins table with a fallback for text no rule matches.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<T: 'static> {
    pub rules: &'static [KeywordRule<T>],
    pub fallback: T,
}

impl<T: Copy> RuleTable<T> {
    /// Value of the first matching rule, if any.
    #[must_use]
    pub fn first_match(&self, lowered: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|rule| rule.matches(lowered))
            .map(|rule| rule.value)
    }

    /// Value of the first matching rule, or the fallback.
    #[must_use]
    pub fn resolve(&self, lowered: &str) -> T {
        self.first_match(lowered).unwrap_or(self.fallback)
    }
}

/// Text must contain one of these to be treated as a maintenance request.
pub static REQUEST_KEYWORDS: &[&str] = &[
    "leak",
    "broken",
    "not working",
    "repair",
    "fix",
    "issue",
    "problem",
    "maintenance",
    "heating",
    "plumbing",
    "electrical",
];

pub static URGENCY_RULES: RuleTable<Urgency> = RuleTable {
    rules: &[
        KeywordRule {
            value: Urgency::Urgent,
            keywords: &["urgent", "emergency", "immediately"],
        },
        KeywordRule {
            value: Urgency::High,
            keywords: &["high", "asap", "quickly"],
        },
        KeywordRule {
            value: Urgency::Low,
            keywords: &["low", "when possible", "eventually"],
        },
    ],
    fallback: Urgency::Medium,
};

pub static CATEGORY_RULES: RuleTable<Category> = RuleTable {
    rules: &[
        KeywordRule {
            value: Category::Plumbing,
            keywords: &["leak", "plumb", "water", "sink", "toilet"],
        },
        KeywordRule {
            value: Category::Hvac,
            keywords: &["heat", "hvac", "air", "temperature"],
        },
        KeywordRule {
            value: Category::Electrical,
            keywords: &["light", "electrical", "power", "outlet"],
        },
        KeywordRule {
            value: Category::Appliances,
            keywords: &["appliance", "refrigerator", "stove", "washer"],
        },
        KeywordRule {
            value: Category::Structural,
            keywords: &["wall", "ceiling", "floor", "door", "window"],
        },
    ],
    fallback: Category::Other,
};

/// Whether `lowered` passes the request-detection gate.
#[must_use]
pub fn is_request(lowered: &str) -> bool {
    contains_any(lowered, REQUEST_KEYWORDS)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
