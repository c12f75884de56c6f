//! # Band & Category Lookup Tables
//!
//! The resolution machinery shared by every table-backed calculator: a
//! numeric measurement resolved against ordered bands, or a categorical
//! key resolved against an ordered key-to-payload table. Tables are
//! immutable reference data built once at startup; resolution never
//! mutates them, so repeated calls with the same input are bit-identical.
//!
//! Two boundary policies exist because the source clinical charts are
//! inconsistent between calculators, and unifying them could change
//! dosing at boundary weights (see DESIGN.md):
//!
//! - [`BandBounds::RightOpen`]: `[min, max)` bands. A value equal to a
//!   cutoff belongs to the higher band; the final band may be unbounded
//!   above.
//! - [`BandBounds::Closed`]: `[min, max]` bands, inclusive on both ends.
//!   Values between bands or outside the table fail with `OutOfRange`.
//!
//! ## Example
//!
//! ```rust
//! use ent_core::bands::{Band, BandBounds, BandTable};
//!
//! let table = BandTable::new(
//!     "weight_kg",
//!     BandBounds::RightOpen,
//!     vec![
//!         Band { label: "small", min: None, max: Some(10.0), payload: "S" },
//!         Band { label: "large", min: Some(10.0), max: None, payload: "L" },
//!     ],
//! );
//!
//! // A boundary value belongs to the higher band.
//! assert_eq!(table.resolve(10.0).unwrap().band, "large");
//! ```

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// A numeric interval with an associated payload.
///
/// `None` bounds are unbounded in that direction. Whether `max` is
/// inclusive is decided by the owning table's [`BandBounds`].
#[derive(Debug, Clone)]
pub struct Band<P> {
    /// Stable identity of this band, for audit/display
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub payload: P,
}

/// Boundary policy applied to every band of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandBounds {
    /// `[min, max)`: upper bounds exclusive, boundary values belong to
    /// the next band up
    RightOpen,
    /// `[min, max]`: both bounds inclusive; gaps between bands resolve
    /// to nothing
    Closed,
}

/// A successful resolution: the matched band's identity plus a shared,
/// read-only payload reference.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resolved<'a, P> {
    /// Label of the matched band or category key
    pub band: &'static str,
    /// Reference into the table's immutable payload
    pub payload: &'a P,
}

/// Ordered list of disjoint numeric bands, resolved by scanning in
/// ascending order and returning the first band containing the value.
#[derive(Debug, Clone)]
pub struct BandTable<P> {
    name: &'static str,
    bounds: BandBounds,
    bands: Vec<Band<P>>,
}

impl<P> BandTable<P> {
    /// Build a table. Bands must be sorted ascending and pairwise
    /// disjoint under the declared boundary policy.
    pub fn new(name: &'static str, bounds: BandBounds, bands: Vec<Band<P>>) -> Self {
        debug_assert!(!bands.is_empty(), "band table '{name}' is empty");
        for pair in bands.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            let disjoint = match (lo.max, hi.min) {
                (Some(lo_max), Some(hi_min)) => match bounds {
                    BandBounds::RightOpen => lo_max <= hi_min,
                    BandBounds::Closed => lo_max < hi_min,
                },
                // Only the first band may be open below and only the last
                // open above, so interior bounds must be present.
                _ => false,
            };
            debug_assert!(
                disjoint,
                "bands '{}' and '{}' in table '{name}' overlap or are unordered",
                lo.label, hi.label
            );
        }
        Self {
            name,
            bounds,
            bands,
        }
    }

    /// Table name, used as the error field for failed resolutions
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All bands in ascending order
    pub fn bands(&self) -> &[Band<P>] {
        &self.bands
    }

    /// Resolve a measurement to the band containing it.
    ///
    /// Returns `OutOfRange` (with the nearest valid bounds on either
    /// side) when the value is outside every band, and `InvalidInput`
    /// for non-finite values.
    pub fn resolve(&self, value: f64) -> CalcResult<Resolved<'_, P>> {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                self.name,
                value.to_string(),
                "must be a finite number",
            ));
        }
        for band in &self.bands {
            let above_min = band.min.map_or(true, |min| value >= min);
            let below_max = match (self.bounds, band.max) {
                (_, None) => true,
                (BandBounds::RightOpen, Some(max)) => value < max,
                (BandBounds::Closed, Some(max)) => value <= max,
            };
            if above_min && below_max {
                return Ok(Resolved {
                    band: band.label,
                    payload: &band.payload,
                });
            }
        }
        Err(self.out_of_range(value))
    }

    fn out_of_range(&self, value: f64) -> CalcError {
        let mut nearest_below = None;
        let mut nearest_above = None;
        for band in &self.bands {
            if let Some(max) = band.max {
                if max < value {
                    nearest_below = Some(max);
                }
            }
            if let Some(min) = band.min {
                if min > value && nearest_above.is_none() {
                    nearest_above = Some(min);
                }
            }
        }
        CalcError::out_of_range(self.name, value, nearest_below, nearest_above)
    }
}

/// Ordered key-to-payload table for categorical lookups.
///
/// Insertion order is the enumeration order callers use to populate a
/// selector; lookup itself is order-independent. Tables are small enough
/// that a linear scan beats hashing.
#[derive(Debug, Clone)]
pub struct CategoryTable<P> {
    name: &'static str,
    entries: Vec<(&'static str, P)>,
}

impl<P> CategoryTable<P> {
    /// Build a table. Keys must be unique.
    pub fn new(name: &'static str, entries: Vec<(&'static str, P)>) -> Self {
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(i, (key, _))| entries[..i].iter().all(|(prior, _)| prior != key)),
            "duplicate key in table '{name}'"
        );
        Self { name, entries }
    }

    /// Table name, used as the error field for failed resolutions
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Keys in declared order, for selector population
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct lookup without the selection-state handling of
    /// [`CategoryTable::resolve`]
    pub fn get(&self, key: &str) -> Option<&P> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, payload)| payload)
    }

    /// Resolve a selector value.
    ///
    /// `None` or an empty string means the user has not selected yet
    /// (`NoSelection`); an unrecognized key is a selector/table mismatch
    /// (`UnknownKey`), logged before being reported. Both outcomes are
    /// suppressed by the presentation layer, not surfaced as faults.
    pub fn resolve(&self, key: Option<&str>) -> CalcResult<Resolved<'_, P>> {
        let key = match key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(CalcError::no_selection(self.name)),
        };
        match self
            .entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
        {
            Some((matched, payload)) => Ok(Resolved {
                band: *matched,
                payload,
            }),
            None => {
                tracing::warn!(
                    table = self.name,
                    key,
                    "lookup key not present in reference table"
                );
                Err(CalcError::unknown_key(self.name, key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_open() -> BandTable<u8> {
        BandTable::new(
            "cutoffs",
            BandBounds::RightOpen,
            vec![
                Band {
                    label: "low",
                    min: None,
                    max: Some(10.0),
                    payload: 1,
                },
                Band {
                    label: "mid",
                    min: Some(10.0),
                    max: Some(20.0),
                    payload: 2,
                },
                Band {
                    label: "high",
                    min: Some(20.0),
                    max: None,
                    payload: 3,
                },
            ],
        )
    }

    fn closed() -> BandTable<u8> {
        BandTable::new(
            "dosing",
            BandBounds::Closed,
            vec![
                Band {
                    label: "a",
                    min: Some(4.5),
                    max: Some(4.9),
                    payload: 1,
                },
                Band {
                    label: "b",
                    min: Some(5.0),
                    max: Some(5.9),
                    payload: 2,
                },
            ],
        )
    }

    #[test]
    fn test_right_open_boundary_goes_up() {
        let table = right_open();
        assert_eq!(*table.resolve(9.99).unwrap().payload, 1);
        assert_eq!(table.resolve(10.0).unwrap().band, "mid");
        assert_eq!(table.resolve(20.0).unwrap().band, "high");
        assert_eq!(*table.resolve(1e6).unwrap().payload, 3);
    }

    #[test]
    fn test_right_open_below_declared_min() {
        let table = BandTable::new(
            "floored",
            BandBounds::RightOpen,
            vec![Band {
                label: "only",
                min: Some(12.0),
                max: None,
                payload: (),
            }],
        );
        match table.resolve(11.9).unwrap_err() {
            CalcError::OutOfRange {
                nearest_above,
                nearest_below,
                ..
            } => {
                assert_eq!(nearest_above, Some(12.0));
                assert_eq!(nearest_below, None);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_closed_bounds_inclusive() {
        let table = closed();
        assert_eq!(table.resolve(4.5).unwrap().band, "a");
        assert_eq!(table.resolve(4.9).unwrap().band, "a");
        assert_eq!(table.resolve(5.0).unwrap().band, "b");
    }

    #[test]
    fn test_closed_gap_reports_nearest_bounds() {
        let table = closed();
        match table.resolve(4.95).unwrap_err() {
            CalcError::OutOfRange {
                value,
                nearest_below,
                nearest_above,
                ..
            } => {
                assert_eq!(value, 4.95);
                assert_eq!(nearest_below, Some(4.9));
                assert_eq!(nearest_above, Some(5.0));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_closed_above_table() {
        let table = closed();
        match table.resolve(100.0).unwrap_err() {
            CalcError::OutOfRange {
                nearest_below,
                nearest_above,
                ..
            } => {
                assert_eq!(nearest_below, Some(5.9));
                assert_eq!(nearest_above, None);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let table = right_open();
        assert!(matches!(
            table.resolve(f64::NAN),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = closed();
        let first = table.resolve(5.5).unwrap();
        let second = table.resolve(5.5).unwrap();
        assert_eq!(first.band, second.band);
        assert_eq!(*first.payload, *second.payload);
    }

    #[test]
    fn test_category_enumeration_order() {
        let table = CategoryTable::new("ages", vec![("c", 3), ("a", 1), ("b", 2)]);
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_category_resolution() {
        crate::logging::init_test();
        let table = CategoryTable::new("ages", vec![("newborn", 1), ("infant", 2)]);
        assert_eq!(*table.resolve(Some("infant")).unwrap().payload, 2);
        assert!(matches!(
            table.resolve(None),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            table.resolve(Some("")),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            table.resolve(Some("toddler")),
            Err(CalcError::UnknownKey { .. })
        ));
        assert_eq!(table.get("newborn"), Some(&1));
        assert_eq!(table.get("toddler"), None);
    }
}
