//! Summary statistics shown above the item grid.
//!
//! Always derived from the cached collection, never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Item, ItemType};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Counts over the current collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total: usize,
    pub lost: usize,
    pub found: usize,
    /// Items reported within the trailing window (inclusive)
    pub recent: usize,
}

impl BoardStats {
    /// Compute stats as of `now`. An item counts as recent when the number of
    /// whole days since it was reported is at most `window_days`.
    pub fn compute(items: &[Item], now: DateTime<Utc>, window_days: i64) -> Self {
        let count_type = |t: ItemType| items.iter().filter(|item| item.item_type == t).count();
        Self {
            total: items.len(),
            lost: count_type(ItemType::Lost),
            found: count_type(ItemType::Found),
            recent: items
                .iter()
                .filter(|item| whole_days_between(item.date_reported, now) <= window_days)
                .count(),
        }
    }
}

/// Floor of the elapsed days; negative for timestamps in the future
fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn item(id: i64, item_type: ItemType, reported: DateTime<Utc>) -> Item {
        Item::new(id, format!("item {}", id), item_type, reported)
    }

    #[test]
    fn test_two_item_scenario() {
        let items = vec![
            item(1, ItemType::Lost, now()),
            item(2, ItemType::Found, now() - Duration::days(8)),
        ];
        let stats = BoardStats::compute(&items, now(), 7);
        assert_eq!(stats, BoardStats { total: 2, lost: 1, found: 1, recent: 1 });
    }

    #[test]
    fn test_recent_window_boundary() {
        let items = vec![
            item(1, ItemType::Lost, now() - Duration::days(7)),
            item(2, ItemType::Lost, now() - Duration::days(7) - Duration::hours(23)),
            item(3, ItemType::Lost, now() - Duration::days(8)),
        ];
        assert_eq!(BoardStats::compute(&items, now(), 7).recent, 2);
    }

    #[test]
    fn test_future_reports_count_as_recent() {
        let items = vec![item(1, ItemType::Found, now() + Duration::hours(3))];
        assert_eq!(BoardStats::compute(&items, now(), 7).recent, 1);
    }

    #[test]
    fn test_lost_and_found_partition_total() {
        let items: Vec<Item> = (0..9)
            .map(|i| item(i, if i % 3 == 0 { ItemType::Found } else { ItemType::Lost }, now()))
            .collect();
        let stats = BoardStats::compute(&items, now(), 7);
        assert_eq!(stats.lost + stats.found, stats.total);
        assert_eq!(stats.found, 3);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(BoardStats::compute(&[], now(), 7), BoardStats::default());
    }
}
