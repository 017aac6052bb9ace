//! Snapshot window selector.
//!
//! Resolves requested series offsets to concrete snapshot ids before any
//! detail data is loaded. The series is supplied newest-first by the store.

use std::collections::BTreeMap;

use crate::errors::CensusError;
use crate::models::SnapshotSummary;

/// Resolution of requested offsets: offset → snapshot id, or `None` where
/// the series is too short to cover the offset.
pub type WindowSelection = BTreeMap<usize, Option<String>>;

/// Resolve each requested offset against a newest-first snapshot series.
///
/// Offset `k` resolves to `series[k]` when the series is long enough and to
/// absent otherwise — a short series degrades each deep historical point to
/// absent rather than reusing the oldest snapshot for all of them.
///
/// The only error is requesting offset 0 (the current snapshot) from an
/// empty series; every other shortfall is a recoverable absence.
pub fn select_window(
    series: &[SnapshotSummary],
    offsets: &[usize],
) -> Result<WindowSelection, CensusError> {
    if series.is_empty() && offsets.contains(&0) {
        return Err(CensusError::UnresolvedIndex(
            "Offset 0 requested against an empty snapshot series".to_string(),
        ));
    }

    let mut selection = WindowSelection::new();
    for &offset in offsets {
        let resolved = series.get(offset).map(|s| s.id.clone());
        if resolved.is_none() {
            tracing::debug!(
                "Offset {} beyond series length {}; resolving as absent",
                offset,
                series.len()
            );
        }
        selection.insert(offset, resolved);
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn series(len: usize) -> Vec<SnapshotSummary> {
        let newest = Utc.with_ymd_and_hms(2025, 3, 11, 12, 0, 0).unwrap();
        (0..len)
            .map(|i| SnapshotSummary {
                id: format!("snap-{}", i),
                name: format!("census #{}", len - i),
                created_at: newest - Duration::hours(4 * i as i64),
                record_count: 100,
            })
            .collect()
    }

    #[test]
    fn test_short_series_resolves_all_absent() {
        let selection = select_window(&series(3), &[6, 12, 18, 24, 30, 36]).unwrap();

        assert_eq!(selection.len(), 6);
        assert!(selection.values().all(Option::is_none));
    }

    #[test]
    fn test_long_series_resolves_by_position() {
        let selection = select_window(&series(50), &[6, 42]).unwrap();

        assert_eq!(selection[&6].as_deref(), Some("snap-6"));
        assert_eq!(selection[&42].as_deref(), Some("snap-42"));
    }

    #[test]
    fn test_offset_equal_to_length_is_absent() {
        // A series of length 7 covers offsets 0..=6 only.
        let selection = select_window(&series(7), &[6, 7]).unwrap();

        assert_eq!(selection[&6].as_deref(), Some("snap-6"));
        assert!(selection[&7].is_none());
    }

    #[test]
    fn test_empty_series_current_offset_errors() {
        let err = select_window(&[], &[0, 6]).unwrap_err();
        assert_eq!(err.error_code(), "UNRESOLVED_INDEX");
    }

    #[test]
    fn test_empty_series_deep_offsets_degrade() {
        let selection = select_window(&[], &[6, 12]).unwrap();
        assert!(selection.values().all(Option::is_none));
    }
}
