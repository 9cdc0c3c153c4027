// ABOUTME: Deduplication of leads sharing the same name and phone number.
// ABOUTME: Keeps the highest scoring duplicate in the slot of the first sighting.

use std::collections::HashMap;

use crate::models::Lead;

/// Collapses leads with the same [`Lead::identity_key`].
///
/// Single pass, no sorting. On a collision the later lead replaces the kept one only
/// if its growth score is strictly higher (missing scores count as 0), so ties keep
/// the first sighting. Output order follows the first occurrence of each key.
pub fn deduplicate<I>(leads: I) -> Vec<Lead>
where
    I: IntoIterator<Item = Lead>,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Lead> = Vec::new();

    for lead in leads {
        let key = lead.identity_key();
        match slots.get(&key) {
            Some(&idx) => {
                let existing = unique[idx].growth_score.unwrap_or(0.0);
                let candidate = lead.growth_score.unwrap_or(0.0);
                if candidate > existing {
                    unique[idx] = lead;
                }
            }
            None => {
                slots.insert(key, unique.len());
                unique.push(lead);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_higher_scoring_duplicate() {
        let leads = vec![
            Lead::new("Acme").with_phone("555").with_growth_score(0.3),
            Lead::new("acme").with_phone("555").with_growth_score(0.7),
        ];
        let unique = deduplicate(leads);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].growth_score, Some(0.7));
        assert_eq!(unique[0].name, "acme");
    }

    #[test]
    fn first_seen_wins_ties() {
        let leads = vec![
            Lead::new("Acme").with_phone("555").with_source("first"),
            Lead::new("ACME").with_phone(" 555 ").with_source("second"),
        ];
        let unique = deduplicate(leads);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].source, "first");
    }

    #[test]
    fn preserves_first_sighting_order() {
        let leads = vec![
            Lead::new("One").with_phone("1").with_growth_score(0.2),
            Lead::new("Two").with_phone("2"),
            Lead::new("one").with_phone("1").with_growth_score(0.9),
        ];
        let unique = deduplicate(leads);
        let summary: Vec<(&str, Option<f64>)> = unique
            .iter()
            .map(|l| (l.name.as_str(), l.growth_score))
            .collect();
        assert_eq!(summary, vec![("one", Some(0.9)), ("Two", None)]);
    }

    #[test]
    fn different_or_missing_phone_keeps_both() {
        let leads = vec![
            Lead::new("Acme").with_phone("555"),
            Lead::new("Acme").with_phone("556"),
            Lead::new("Acme"),
        ];
        assert_eq!(deduplicate(leads).len(), 3);
    }

    #[test]
    fn missing_score_counts_as_zero() {
        let leads = vec![
            Lead::new("Acme").with_source("unscored"),
            Lead::new("Acme").with_growth_score(0.0).with_source("zero"),
            Lead::new("Acme").with_growth_score(0.01).with_source("scored"),
        ];
        let unique = deduplicate(leads);
        assert_eq!(unique[0].source, "scored");
    }
}
