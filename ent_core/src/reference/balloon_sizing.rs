//! # Balloon Dilation Sizing
//!
//! Airway balloon dilation sizing guidance by age station, from
//! age-appropriate ETT size through larynx and trachea target diameters.
//! Unlike the bronchoscopy chart this table keys on finer-grained age
//! stations (single years, adult by sex) and is purely categorical.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::bands::{CategoryTable, Resolved};
use crate::errors::CalcResult;

/// Sizing guidance for one age station. A `"-"` value means the chart
/// has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalloonSizing {
    pub age_label: &'static str,
    pub ett_size: &'static str,
    pub od_ett: &'static str,
    pub larynx_diameter: &'static str,
    pub trachea_diameter: &'static str,
}

static SIZING: Lazy<CategoryTable<BalloonSizing>> = Lazy::new(|| {
    CategoryTable::new(
        "balloon_age",
        vec![
            (
                "premature-30",
                BalloonSizing {
                    age_label: "Premature < 30 weeks",
                    ett_size: "2.5mm",
                    od_ett: "3.6 mm",
                    larynx_diameter: "-",
                    trachea_diameter: "5 mm",
                },
            ),
            (
                "premature-30-plus",
                BalloonSizing {
                    age_label: "Premature > 30 weeks",
                    ett_size: "3.0mm",
                    od_ett: "4.3 mm",
                    larynx_diameter: "5 mm",
                    trachea_diameter: "6 mm",
                },
            ),
            (
                "newborn",
                BalloonSizing {
                    age_label: "Newborn",
                    ett_size: "3.5mm",
                    od_ett: "4.9 mm",
                    larynx_diameter: "6 mm",
                    trachea_diameter: "7 mm",
                },
            ),
            (
                "1-year",
                BalloonSizing {
                    age_label: "1 year",
                    ett_size: "4.0mm",
                    od_ett: "5.6 mm",
                    larynx_diameter: "6 mm",
                    trachea_diameter: "7 mm",
                },
            ),
            (
                "2-years",
                BalloonSizing {
                    age_label: "2 years",
                    ett_size: "4.5mm",
                    od_ett: "6.2 mm",
                    larynx_diameter: "7 mm",
                    trachea_diameter: "8-8.5 mm",
                },
            ),
            (
                "4-years",
                BalloonSizing {
                    age_label: "4 years",
                    ett_size: "5.0mm",
                    od_ett: "6.9 mm",
                    larynx_diameter: "8-8.5 mm",
                    trachea_diameter: "8.5-9 mm",
                },
            ),
            (
                "6-years",
                BalloonSizing {
                    age_label: "6 years",
                    ett_size: "5.5mm",
                    od_ett: "7.5 mm",
                    larynx_diameter: "8-9 mm",
                    trachea_diameter: "8.5-10 mm",
                },
            ),
            (
                "8-years",
                BalloonSizing {
                    age_label: "8 years",
                    ett_size: "6.0mm",
                    od_ett: "8.2 mm",
                    larynx_diameter: "8-9 mm",
                    trachea_diameter: "10 mm",
                },
            ),
            (
                "10-years",
                BalloonSizing {
                    age_label: "10 years",
                    ett_size: "6.5mm",
                    od_ett: "8.9 mm",
                    larynx_diameter: "10 mm",
                    trachea_diameter: "10-12 mm",
                },
            ),
            (
                "12-years",
                BalloonSizing {
                    age_label: "12 years",
                    ett_size: "7.0mm",
                    od_ett: "9.5 mm",
                    larynx_diameter: "10-12 mm",
                    trachea_diameter: "12-14 mm",
                },
            ),
            (
                "14-years",
                BalloonSizing {
                    age_label: "14 years",
                    ett_size: "7.5mm",
                    od_ett: "10.2 mm",
                    larynx_diameter: "12 mm",
                    trachea_diameter: "12-14 mm",
                },
            ),
            (
                "16-years",
                BalloonSizing {
                    age_label: "16 years",
                    ett_size: "8.0mm",
                    od_ett: "11.0 mm",
                    larynx_diameter: "12 mm",
                    trachea_diameter: "14-16 mm",
                },
            ),
            (
                "adult-female",
                BalloonSizing {
                    age_label: "Adult Female",
                    ett_size: "7.0-8.0mm",
                    od_ett: "-",
                    larynx_diameter: "12-14 mm",
                    trachea_diameter: "14-16 mm",
                },
            ),
            (
                "adult-male",
                BalloonSizing {
                    age_label: "Adult Male",
                    ett_size: "7.5-8.5mm",
                    od_ett: "-",
                    larynx_diameter: "14-16 mm",
                    trachea_diameter: "16-18 mm",
                },
            ),
        ],
    )
});

/// Age stations in selector order
pub fn keys() -> impl Iterator<Item = &'static str> {
    SIZING.keys()
}

/// Resolve sizing guidance for an age-station selector value
pub fn resolve(age_key: Option<&str>) -> CalcResult<Resolved<'static, BalloonSizing>> {
    SIZING.resolve(age_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_station_count_and_order() {
        let keys: Vec<_> = keys().collect();
        assert_eq!(keys.len(), 14);
        assert_eq!(keys.first(), Some(&"premature-30"));
        assert_eq!(keys.last(), Some(&"adult-male"));
    }

    #[test]
    fn test_lookup() {
        let resolved = resolve(Some("2-years")).unwrap();
        assert_eq!(resolved.payload.ett_size, "4.5mm");
        assert_eq!(resolved.payload.trachea_diameter, "8-8.5 mm");
    }

    #[test]
    fn test_missing_chart_entries_kept_as_dash() {
        let resolved = resolve(Some("adult-female")).unwrap();
        assert_eq!(resolved.payload.od_ett, "-");
    }

    #[test]
    fn test_selection_state() {
        assert!(matches!(
            resolve(None),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            resolve(Some("3-years")),
            Err(CalcError::UnknownKey { .. })
        ));
    }
}
