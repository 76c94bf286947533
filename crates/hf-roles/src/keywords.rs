//! Keyword fragment tables driving column classification.

use serde::{Deserialize, Serialize};

use crate::role::Role;

pub const DEFAULT_MATCH_SCORE: u32 = 10;

/// Fragments that identify one role. Matching is a case-insensitive substring test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub role: Role,
    pub fragments: Vec<String>,
}

impl KeywordRule {
    pub fn new(role: Role, fragments: &[&str]) -> Self {
        Self {
            role,
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Whether any fragment occurs in an already lower-cased header.
    pub fn matches_folded(&self, folded_header: &str) -> bool {
        self.fragments
            .iter()
            .filter(|f| !f.is_empty())
            .any(|f| folded_header.contains(&f.to_lowercase()))
    }
}

/// Ordered rule list; rule order is role priority when two roles want one header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    pub rules: Vec<KeywordRule>,
    #[serde(default = "default_match_score")]
    pub match_score: u32,
}

fn default_match_score() -> u32 {
    DEFAULT_MATCH_SCORE
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            rules: vec![
                KeywordRule::new(Role::Time, &["time", "timestamp", "sec", "s"]),
                KeywordRule::new(
                    Role::FeedPressureA,
                    &["ox_p1", "ox_inlet", "ox_upstream"],
                ),
                KeywordRule::new(
                    Role::FeedPressureB,
                    &["ox_p2", "ox_throat", "ox_downstream"],
                ),
                KeywordRule::new(
                    Role::FeedPressureC,
                    &["fuel_p1", "fuel_inlet", "fuel_upstream"],
                ),
                KeywordRule::new(
                    Role::FeedPressureD,
                    &["fuel_p2", "fuel_throat", "fuel_downstream"],
                ),
                KeywordRule::new(Role::Pressure, &["press", "psi", "bar", "kpa"]),
                KeywordRule::new(Role::Thrust, &["thrust", "force", "n", "lbf"]),
                KeywordRule::new(Role::Weight, &["weight", "load", "mass", "kg", "lb"]),
            ],
            match_score: DEFAULT_MATCH_SCORE,
        }
    }
}

impl KeywordTable {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self {
            rules,
            match_score: DEFAULT_MATCH_SCORE,
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn rule(&self, role: Role) -> Option<&KeywordRule> {
        self.rules.iter().find(|r| r.role == role)
    }

    /// Replace (or append) the fragments for one role, keeping its priority slot.
    pub fn set_fragments(&mut self, role: Role, fragments: &[&str]) {
        let rule = KeywordRule::new(role, fragments);
        match self.rules.iter_mut().find(|r| r.role == role) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Score of a header for a rule: `match_score` on any fragment hit, else 0.
    pub fn score(&self, rule: &KeywordRule, header: &str) -> u32 {
        self.score_folded(rule, &header.to_lowercase())
    }

    pub(crate) fn score_folded(&self, rule: &KeywordRule, folded_header: &str) -> u32 {
        if rule.matches_folded(folded_header) {
            self.match_score
        } else {
            0
        }
    }
}
