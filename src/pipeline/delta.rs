// src/pipeline/delta.rs

//! New-filing detection.
//!
//! This is the only correctness-critical logic in the watcher: a key wrongly
//! considered present means a missed notification, a key wrongly considered
//! absent means a duplicate archive/notification cycle on the next run.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::warn;

use crate::models::Filing;

/// Compute the set of filings that are new relative to the archive inventory
/// and the reference date.
///
/// A filing is new iff its stamped date is on or after `reference_date`
/// (calendar-date semantics, time-of-day ignored) and its derived key is not
/// in `archive_keys`. The filter is stable: source-API ordering is preserved
/// so notification ordering matches it. Filings whose date stamp cannot be
/// parsed are excluded with a warning; they cannot be shown to be recent.
///
/// Duplicate derived keys within `filings` are deliberately not collapsed;
/// an amended filing reusing a filename is announced again.
pub fn compute_new(
    filings: &[Filing],
    archive_keys: &HashSet<String>,
    reference_date: NaiveDate,
) -> Vec<Filing> {
    filings
        .iter()
        .filter(|filing| {
            let date = match filing.stamped_date() {
                Some(date) => date,
                None => {
                    warn!(
                        "Skipping filing with unparseable date stamp {:?} ({})",
                        filing.date_stamped, filing.url
                    );
                    return false;
                }
            };

            date >= reference_date && !archive_keys.contains(&filing.derived_key())
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filing(date: &str, url: &str) -> Filing {
        Filing {
            registrant_name: "MSLGROUP Americas".to_string(),
            registration_number: "5483".to_string(),
            document_type: "Supplemental Statement".to_string(),
            date_stamped: date.to_string(),
            url: url.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 4, 30).unwrap()
    }

    #[test]
    fn archived_keys_are_never_included() {
        let filings = vec![
            filing("04/30/2021", "https://x/docs/A.pdf"),
            filing("04/30/2021", "https://x/docs/B.pdf"),
        ];
        let keys: HashSet<String> = ["A.pdf".to_string(), "B.pdf".to_string()].into();

        assert!(compute_new(&filings, &keys, today()).is_empty());
    }

    #[test]
    fn empty_archive_and_recent_dates_is_identity_in_order() {
        let filings = vec![
            filing("04/30/2021", "https://x/docs/C.pdf"),
            filing("05/01/2021", "https://x/docs/A.pdf"),
            filing("04/30/2021", "https://x/docs/B.pdf"),
        ];

        let new = compute_new(&filings, &HashSet::new(), today());
        assert_eq!(new, filings);
    }

    #[test]
    fn old_filings_are_excluded_regardless_of_archive() {
        let filings = vec![filing("04/29/2021", "https://x/docs/A.pdf")];

        assert!(compute_new(&filings, &HashSet::new(), today()).is_empty());
        let keys: HashSet<String> = ["A.pdf".to_string()].into();
        assert!(compute_new(&filings, &keys, today()).is_empty());
    }

    #[test]
    fn date_split_scenario() {
        // A filed today, B filed yesterday: only A is new.
        let filings = vec![
            filing("04/30/2021", "https://x/docs/A.pdf"),
            filing("04/29/2021", "https://x/docs/B.pdf"),
        ];

        let new = compute_new(&filings, &HashSet::new(), today());
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].derived_key(), "A.pdf");
    }

    #[test]
    fn already_archived_today_scenario() {
        let filings = vec![filing("04/30/2021", "https://x/docs/A.pdf")];
        let keys: HashSet<String> = ["A.pdf".to_string()].into();

        assert!(compute_new(&filings, &keys, today()).is_empty());
    }

    #[test]
    fn duplicate_derived_keys_are_both_kept() {
        let filings = vec![
            filing("04/30/2021", "https://x/docs/2021/A.pdf"),
            filing("04/30/2021", "https://x/docs/amended/A.pdf"),
        ];

        let new = compute_new(&filings, &HashSet::new(), today());
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].derived_key(), new[1].derived_key());
    }

    #[test]
    fn unparseable_dates_are_excluded() {
        let filings = vec![
            filing("pending", "https://x/docs/A.pdf"),
            filing("04/30/2021", "https://x/docs/B.pdf"),
        ];

        let new = compute_new(&filings, &HashSet::new(), today());
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].derived_key(), "B.pdf");
    }

    #[test]
    fn inputs_are_not_mutated() {
        let filings = vec![filing("04/30/2021", "https://x/docs/A.pdf")];
        let keys: HashSet<String> = ["Z.pdf".to_string()].into();

        let _ = compute_new(&filings, &keys, today());
        assert_eq!(filings.len(), 1);
        assert_eq!(keys.len(), 1);
    }
}
