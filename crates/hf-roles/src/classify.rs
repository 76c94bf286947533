//! Table-driven header → role classification.

use std::collections::BTreeSet;

use hf_data::Dataset;
use tracing::{debug, trace};

use crate::keywords::KeywordTable;
use crate::mapping::RoleMapping;

/// Assign roles to headers.
///
/// Rules are visited in table order. Each rule takes the unclaimed header with
/// the strictly highest score (ties go to the leftmost header) and only if that
/// score is positive. Claimed headers leave the candidate pool, so no header
/// ends up under two roles. Headers that repeat after case folding only take
/// part through their first occurrence.
pub fn classify<S: AsRef<str>>(headers: &[S], table: &KeywordTable) -> RoleMapping {
    let mut folded_seen = BTreeSet::new();
    let mut pool: Vec<(&str, String)> = headers
        .iter()
        .map(|h| h.as_ref())
        .filter_map(|header| {
            let folded = header.to_lowercase();
            folded_seen
                .insert(folded.clone())
                .then_some((header, folded))
        })
        .collect();

    let mut mapping = RoleMapping::new();

    for rule in table.rules() {
        if mapping.get(rule.role).is_some() {
            trace!(role = %rule.role, "duplicate rule ignored");
            continue;
        }

        let mut best: Option<(usize, u32)> = None;
        for (idx, (_, folded)) in pool.iter().enumerate() {
            let score = table.score_folded(rule, folded);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((idx, score));
            }
        }

        match best {
            Some((idx, score)) => {
                let (header, _) = pool.remove(idx);
                debug!(role = %rule.role, header, score, "role assigned");
                let assigned = mapping.assign(rule.role, header);
                debug_assert!(assigned.is_ok(), "pooled header already owned: {assigned:?}");
            }
            None => trace!(role = %rule.role, "role left unassigned"),
        }
    }

    mapping
}

/// Classify the headers of a loaded dataset.
pub fn classify_dataset(dataset: &Dataset, table: &KeywordTable) -> RoleMapping {
    classify(dataset.headers(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordRule;
    use crate::role::Role;

    #[test]
    fn empty_headers_give_empty_mapping() {
        let headers: [&str; 0] = [];
        let mapping = classify(&headers, &KeywordTable::default());
        assert!(mapping.is_empty());
    }

    #[test]
    fn ties_go_to_leftmost_header() {
        let table = KeywordTable::new(vec![KeywordRule::new(Role::Pressure, &["psi"])]);
        let mapping = classify(&["PT1_psi", "PT2_psi"], &table);
        assert_eq!(mapping.get(Role::Pressure), Some("PT1_psi"));
    }

    #[test]
    fn case_folded_duplicates_keep_first() {
        let table = KeywordTable::new(vec![
            KeywordRule::new(Role::Time, &["time"]),
            KeywordRule::new(Role::Pressure, &["time"]),
        ]);
        let mapping = classify(&["Time", "TIME"], &table);
        assert_eq!(mapping.get(Role::Time), Some("Time"));
        assert_eq!(mapping.get(Role::Pressure), None);
    }

    #[test]
    fn repeated_rule_does_not_take_a_second_header() {
        let table = KeywordTable::new(vec![
            KeywordRule::new(Role::Thrust, &["thrust"]),
            KeywordRule::new(Role::Thrust, &["force"]),
            KeywordRule::new(Role::Weight, &["force"]),
        ]);
        let mapping = classify(&["Thrust_N", "Force_kg"], &table);
        assert_eq!(mapping.get(Role::Thrust), Some("Thrust_N"));
        assert_eq!(mapping.get(Role::Weight), Some("Force_kg"));
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn unmatched_role_stays_unassigned() {
        let mapping = classify(&["Time_s", "Chamber_PSI"], &KeywordTable::default());
        assert_eq!(mapping.get(Role::Weight), None);
        assert_eq!(mapping.get(Role::Time), Some("Time_s"));
    }
}
