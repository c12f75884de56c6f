//! # Airway & Bronchoscopy Equipment Sizing
//!
//! GOSH (Great Ormond Street Hospital) chart data for pediatric airway
//! equipment, stationed by [`AgeGroup`]. Supports both entry paths the
//! chart is used with: selection by age group, or by patient weight via
//! the weight bands in [`age_group`](crate::reference::age_group).
//!
//! When a weight accompanies an age-based selection it is cross-checked
//! against the group's documented weight range. A mismatch produces a
//! non-fatal [`WeightAdvisory`]; the age-based selection itself is never
//! overridden.
//!
//! All sizes are strings because the chart frequently specifies ranges
//! ("4.0-4.5") or annotated values ("OOO (2.5 ID / 4.0 OD)") rather than
//! single numbers. Payloads are opaque to the resolver.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::ranges::ValueRange;
use crate::reference::age_group::AgeGroup;

/// Bryan Medical Aeros airway balloon specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BryanBalloon {
    pub id: &'static str,
    pub od: &'static str,
    pub length: &'static str,
    pub size: &'static str,
    pub od_mm: &'static str,
    pub length_cm: &'static str,
    pub max_pressure: &'static str,
}

/// Boston Scientific Mustang/CRE airway balloon specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BostonBalloon {
    pub od: &'static str,
    pub length: &'static str,
    pub max_pressure: &'static str,
}

/// An ETT make/size a flexible scope fits through (ID / OD in mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TubeFit {
    pub id: &'static str,
    pub od: &'static str,
}

/// A Karl Storz scope model and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeFit {
    pub scope: &'static str,
    pub size: &'static str,
}

/// Which ETT makes a scope fits through, by manufacturer.
/// Empty slices mean no chart entry for that make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeEttFits {
    pub portex: &'static [TubeFit],
    pub mallinckrodt: &'static [TubeFit],
    pub halyard_microcuff: &'static [TubeFit],
    pub karl_storz: &'static [ScopeFit],
}

/// A combination of instruments known to fit together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrumentSet {
    pub bronchoscope_id: &'static str,
    pub bronchoscope_od: &'static str,
    pub telescope: &'static str,
    pub flexible_suction: &'static str,
    pub forceps: &'static str,
}

/// Per-topic clinical notes accompanying a group's equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizingNotes {
    pub bronchoscope: &'static str,
    pub telescope: &'static str,
    pub forceps: &'static str,
    pub ventilating: &'static str,
    pub tracheostomy: &'static str,
    pub laryngoscope: &'static str,
}

/// Complete equipment sizing record for one age group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirwaySizing {
    // Basic equipment
    pub bronchoscope: &'static str,
    pub telescope: &'static str,
    pub ett: &'static str,
    pub ett_od: &'static str,
    pub forceps: &'static str,
    pub suction: &'static str,
    pub ventilating: &'static str,

    // Anatomical measurements
    pub cricoid_diameter: &'static str,
    pub trachea_diameter: &'static str,

    // GOSH equipment
    pub shiley_tube: &'static str,
    pub portex_cuffed: &'static str,
    pub portex_uncuffed: &'static str,
    pub bronchoscope_storz: &'static str,
    pub alder_hey_suction: &'static str,
    pub npa: &'static str,

    // Tracheostomy tubes
    pub tracheostomy_jackson: &'static str,
    pub tracheostomy_iso: &'static str,

    // Laryngoscope blades
    pub miller_blade: &'static str,
    pub macintosh_blade: &'static str,

    // Balloon dilation targets
    pub balloon_larynx: &'static str,
    pub balloon_trachea: &'static str,

    // Airway balloons; absent where the chart has no entry
    pub bryan_balloon: Option<BryanBalloon>,
    pub boston_balloon: Option<BostonBalloon>,

    /// Scope-in-ETT fits; `None` for adults (sizing varies too widely)
    pub scope_fits_ett: Option<ScopeEttFits>,

    /// Instrument combinations known to fit together; may be empty
    pub instruments_fit: &'static [InstrumentSet],

    /// Documented weight range for this group, e.g. "6-10 kg"
    pub weight_range: &'static str,
    /// Documented age range for this group, e.g. "6-18 months"
    pub age_range: &'static str,

    pub notes: SizingNotes,
}

static PREMATURE: AirwaySizing = AirwaySizing {
    bronchoscope: "2.5 mm (ID) / 3.5 mm (OD)",
    telescope: "2.5 mm (0\u{b0}) / 3.6 mm (OD)",
    ett: "2.5",
    ett_od: "3.5-3.6",
    forceps: "None",
    suction: "None",
    ventilating: "Not recommended",
    cricoid_diameter: "3.6-4.8 mm",
    trachea_diameter: "5 mm",
    shiley_tube: "3.0 ID / 4.5 OD",
    portex_cuffed: "3.0 ID / 4.2 OD",
    portex_uncuffed: "2.5 ID / 3.4 OD",
    bronchoscope_storz: "Size 2.5 / ID 3.5 / OD 4.2",
    alder_hey_suction: "12-14 FG",
    npa: "2.5 mm ID",
    tracheostomy_jackson: "OOO (2.5 ID / 4.0 OD)",
    tracheostomy_iso: "2.0-3.0",
    miller_blade: "0",
    macintosh_blade: "-",
    balloon_larynx: "-",
    balloon_trachea: "5 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "1",
        od: "3.0",
        length: "5.5",
        size: "44",
        od_mm: "5.0",
        length_cm: "30",
        max_pressure: "17 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "4.0",
        length: "40",
        max_pressure: "24 atm",
    }),
    scope_fits_ett: Some(ScopeEttFits {
        portex: &[TubeFit { id: "2.5", od: "3.5" }],
        mallinckrodt: &[TubeFit { id: "2.5", od: "3.6" }],
        halyard_microcuff: &[],
        karl_storz: &[ScopeFit {
            scope: "27017",
            size: "1.9 - 2.1",
        }],
    }),
    instruments_fit: &[
        InstrumentSet {
            bronchoscope_id: "2.5",
            bronchoscope_od: "4.2",
            telescope: "1.9 - 2.1 (27017AA)",
            flexible_suction: "4F",
            forceps: "None",
        },
        InstrumentSet {
            bronchoscope_id: "2.5",
            bronchoscope_od: "4.2",
            telescope: "2.7",
            flexible_suction: "None",
            forceps: "None",
        },
    ],
    weight_range: "<1 kg",
    age_range: "Preterm-1 month",
    notes: SizingNotes {
        bronchoscope: "Smallest available size - Preterm < 1kg",
        telescope: "Limited optical quality",
        forceps: "None available for this size",
        ventilating: "Use standard scope with careful ventilation",
        tracheostomy: "Rarely required, consult neonatology",
        laryngoscope: "Miller blade preferred for visualization",
    },
};

static ZERO_TO_SIX_MONTHS: AirwaySizing = AirwaySizing {
    bronchoscope: "3.0 mm (ID) / 4.3 mm (OD)",
    telescope: "2.7-3.0 mm (0\u{b0} or 30\u{b0})",
    ett: "3.0-3.5",
    ett_od: "4.1-5.0",
    forceps: "Optical peanut/alligator/coin",
    suction: "4F, 5F, 6F",
    ventilating: "2.5-3.0 mm",
    cricoid_diameter: "4.8-5.8 mm",
    trachea_diameter: "5-6 mm",
    shiley_tube: "3.5 ID / 5.2 OD",
    portex_cuffed: "3.5 ID / 4.9 OD",
    portex_uncuffed: "3.0-3.5 ID / 4.2-4.8 OD",
    bronchoscope_storz: "Size 3.0 / ID 4.3 / OD 5.0",
    alder_hey_suction: "16 FG",
    npa: "3.0 mm ID",
    tracheostomy_jackson: "O (3.5 ID / 4.3 OD)",
    tracheostomy_iso: "3.0",
    miller_blade: "0-1",
    macintosh_blade: "-",
    balloon_larynx: "5-6 mm",
    balloon_trachea: "6-7 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "1-2",
        od: "3.4",
        length: "6.0",
        size: "51",
        od_mm: "6.0-7.0",
        length_cm: "30",
        max_pressure: "17 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "6.0",
        length: "40",
        max_pressure: "24 atm",
    }),
    scope_fits_ett: Some(ScopeEttFits {
        portex: &[
            TubeFit { id: "3.0", od: "4.1" },
            TubeFit { id: "3.5", od: "4.8" },
        ],
        mallinckrodt: &[
            TubeFit { id: "3.0", od: "4.3" },
            TubeFit { id: "3.5", od: "4.9" },
        ],
        halyard_microcuff: &[],
        karl_storz: &[
            ScopeFit {
                scope: "27018",
                size: "2.7",
            },
            ScopeFit {
                scope: "27020",
                size: "2.9",
            },
        ],
    }),
    instruments_fit: &[
        InstrumentSet {
            bronchoscope_id: "3.0",
            bronchoscope_od: "5.0",
            telescope: "2.7",
            flexible_suction: "4F",
            forceps: "Fetal (10374)",
        },
        InstrumentSet {
            bronchoscope_id: "3.5",
            bronchoscope_od: "5.7",
            telescope: "2.9",
            flexible_suction: "4F, 5F, 6F (tight)",
            forceps: "Optical peanut/alligator/coin (without flexible suction)",
        },
        InstrumentSet {
            bronchoscope_id: "3.5",
            bronchoscope_od: "5.7",
            telescope: "4.0",
            flexible_suction: "None",
            forceps: "Optical peanut/alligator/coin (without flexible suction)",
        },
    ],
    weight_range: "1-6 kg",
    age_range: "1-6 months",
    notes: SizingNotes {
        bronchoscope: "Choose based on airway size",
        telescope: "30\u{b0} provides better visualization",
        forceps: "Optical grasping forceps available",
        ventilating: "Allows continuous oxygenation",
        tracheostomy: "Jackson O most common",
        laryngoscope: "Miller 0-1 depending on size",
    },
};

static SIX_TO_EIGHTEEN_MONTHS: AirwaySizing = AirwaySizing {
    bronchoscope: "3.5 mm (ID) / 5.0 mm (OD)",
    telescope: "2.7-3.5 mm (0\u{b0}, 30\u{b0}, or 70\u{b0})",
    ett: "4.0",
    ett_od: "5.4-5.6",
    forceps: "Optical forceps (all types)",
    suction: "6F, 8F",
    ventilating: "3.0-3.5 mm",
    cricoid_diameter: "5.8-6.5 mm",
    trachea_diameter: "6-7 mm",
    shiley_tube: "4.0 ID / 5.9 OD",
    portex_cuffed: "4.0 ID / 5.5 OD",
    portex_uncuffed: "4.0 ID / 5.4 OD",
    bronchoscope_storz: "Size 3.5 / ID 5.0 / OD 5.7",
    alder_hey_suction: "18 FG",
    npa: "3.5 mm ID",
    tracheostomy_jackson: "1 (4.0 ID / 5.0 OD)",
    tracheostomy_iso: "3.5-4.0",
    miller_blade: "1",
    macintosh_blade: "-",
    balloon_larynx: "6 mm",
    balloon_trachea: "7 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "3",
        od: "4.3",
        length: "7.0",
        size: "58",
        od_mm: "8.0",
        length_cm: "30",
        max_pressure: "17 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "8.0",
        length: "40",
        max_pressure: "20 atm",
    }),
    scope_fits_ett: Some(ScopeEttFits {
        portex: &[
            TubeFit { id: "4.0", od: "5.4" },
            TubeFit { id: "4.5", od: "6.1" },
        ],
        mallinckrodt: &[
            TubeFit { id: "4.0", od: "5.6" },
            TubeFit { id: "4.5", od: "6.2" },
        ],
        halyard_microcuff: &[
            TubeFit { id: "3.0", od: "4.3" },
            TubeFit { id: "3.5", od: "5.0" },
        ],
        karl_storz: &[ScopeFit {
            scope: "27005",
            size: "4.0",
        }],
    }),
    instruments_fit: &[
        InstrumentSet {
            bronchoscope_id: "4.0",
            bronchoscope_od: "6.7",
            telescope: "2.9",
            flexible_suction: "4F, 5F, 6F",
            forceps: "Optical peanut/alligator/coin (with flexible suction 4F, 5F, 6F)",
        },
        InstrumentSet {
            bronchoscope_id: "4.0",
            bronchoscope_od: "6.7",
            telescope: "4.0",
            flexible_suction: "4F, 5F",
            forceps: "Optical peanut/alligator/coin (with flexible suction 4F, 5F, 6F)",
        },
    ],
    weight_range: "6-10 kg",
    age_range: "6-18 months",
    notes: SizingNotes {
        bronchoscope: "3.5mm scope provides good visualization",
        telescope: "70\u{b0} useful for difficult anatomy",
        forceps: "Full range of optical forceps available",
        ventilating: "Recommended for longer procedures",
        tracheostomy: "Jackson 1 or ISO 3.5-4.0",
        laryngoscope: "Miller 1 standard",
    },
};

static EIGHTEEN_MONTHS_TO_THREE_YEARS: AirwaySizing = AirwaySizing {
    bronchoscope: "4.0 mm (ID) / 6.0 mm (OD)",
    telescope: "2.7-4.0 mm (0\u{b0}, 30\u{b0}, 70\u{b0})",
    ett: "4.5",
    ett_od: "6.2",
    forceps: "All optical forceps",
    suction: "8F, 10F",
    ventilating: "3.5-4.0 mm",
    cricoid_diameter: "6.5-7.4 mm",
    trachea_diameter: "7-8 mm",
    shiley_tube: "4.5 ID / 6.5 OD",
    portex_cuffed: "4.5 ID / 6.2 OD",
    portex_uncuffed: "4.5 ID / 6.2 OD",
    bronchoscope_storz: "Size 4.0 / ID 6.0 / OD 6.7",
    alder_hey_suction: "18-20 FG",
    npa: "4.0 mm ID",
    tracheostomy_jackson: "2 (5.0 ID / 6.0 OD)",
    tracheostomy_iso: "4.0",
    miller_blade: "1",
    macintosh_blade: "2",
    balloon_larynx: "7 mm",
    balloon_trachea: "8-8.5 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "3-4",
        od: "4.3-5.5",
        length: "7.0-8.0",
        size: "58-62",
        od_mm: "8.0-9.0",
        length_cm: "30",
        max_pressure: "17 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "8.0-9.0",
        length: "40",
        max_pressure: "18-20 atm",
    }),
    scope_fits_ett: Some(ScopeEttFits {
        portex: &[
            TubeFit { id: "5.0", od: "6.8" },
            TubeFit { id: "5.5", od: "7.5" },
        ],
        mallinckrodt: &[
            TubeFit { id: "5.0", od: "6.9" },
            TubeFit { id: "5.5", od: "7.5" },
        ],
        halyard_microcuff: &[
            TubeFit { id: "4.0", od: "5.6" },
            TubeFit { id: "4.5", od: "6.3" },
        ],
        karl_storz: &[],
    }),
    instruments_fit: &[InstrumentSet {
        bronchoscope_id: "4.0",
        bronchoscope_od: "6.7",
        telescope: "4.0",
        flexible_suction: "4F, 5F",
        forceps: "Optical peanut/alligator/coin (with flexible suction 4F, 5F, 6F)",
    }],
    weight_range: "10-15 kg",
    age_range: "18 months - 3 years",
    notes: SizingNotes {
        bronchoscope: "4.0mm scope standard for this age",
        telescope: "Multiple angles available",
        forceps: "Full instrumentation possible",
        ventilating: "Standard for procedures",
        tracheostomy: "Jackson 2 or ISO 4.0",
        laryngoscope: "Miller 1 or Macintosh 2",
    },
};

static THREE_TO_FIVE_YEARS: AirwaySizing = AirwaySizing {
    bronchoscope: "4.5 mm (ID) / 6.6 mm (OD)",
    telescope: "2.7-4.0 mm (all angles)",
    ett: "5.0",
    ett_od: "6.8",
    forceps: "All optical forceps + larger instruments",
    suction: "10F, 12F",
    ventilating: "4.0-4.5 mm",
    cricoid_diameter: "7.4-8.2 mm",
    trachea_diameter: "8-9 mm",
    shiley_tube: "5.0 ID / 7.1 OD",
    portex_cuffed: "5.0 ID / 6.9 OD",
    portex_uncuffed: "5.0 ID / 6.8 OD",
    bronchoscope_storz: "Size 4.5 / ID 6.6 / OD 7.3",
    alder_hey_suction: "20-22 FG",
    npa: "4.5 mm ID / 5.0-5.5 mm ID",
    tracheostomy_jackson: "2 (5.0 ID / 6.0 OD)",
    tracheostomy_iso: "4.5-5.0",
    miller_blade: "2",
    macintosh_blade: "2",
    balloon_larynx: "8-8.5 mm",
    balloon_trachea: "8.5-9 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "5",
        od: "6.2",
        length: "9.0",
        size: "68",
        od_mm: "10.0",
        length_cm: "30",
        max_pressure: "17 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "10.0",
        length: "30-40",
        max_pressure: "9-14 atm",
    }),
    scope_fits_ett: Some(ScopeEttFits {
        portex: &[TubeFit { id: "6.0", od: "8.2" }],
        mallinckrodt: &[TubeFit { id: "6.0", od: "8.2" }],
        halyard_microcuff: &[
            TubeFit { id: "5.0", od: "6.7" },
            TubeFit { id: "5.5", od: "7.3" },
            TubeFit { id: "6.0", od: "8.0" },
        ],
        karl_storz: &[ScopeFit {
            scope: "8712",
            size: "5.0",
        }],
    }),
    instruments_fit: &[InstrumentSet {
        bronchoscope_id: "4.5",
        bronchoscope_od: "7.3",
        telescope: "4.0",
        flexible_suction: "4F, 5F, 6F",
        forceps: "Optical peanut/alligator/coin (with flexible suction 4F, 5F, 6F)",
    }],
    weight_range: "15-20 kg",
    age_range: "3-6 years",
    notes: SizingNotes {
        bronchoscope: "4.5mm allows better working channel",
        telescope: "All angles readily available",
        forceps: "Adult-sized instruments can be used",
        ventilating: "Excellent ventilation possible",
        tracheostomy: "Jackson 2 or ISO 4.5-5.0",
        laryngoscope: "Miller 2 or Macintosh 2",
    },
};

static FIVE_TO_EIGHT_YEARS: AirwaySizing = AirwaySizing {
    bronchoscope: "5.0 mm (ID) / 7.1 mm (OD)",
    telescope: "2.7-4.0 mm (all angles)",
    ett: "5.5-6.0",
    ett_od: "7.5-8.2",
    forceps: "All instruments",
    suction: "12F, 14F",
    ventilating: "4.5-5.0 mm",
    cricoid_diameter: "8.2-9.0 mm",
    trachea_diameter: "9-10 mm",
    shiley_tube: "5.5 ID / 7.7 OD",
    portex_cuffed: "5.0-6.0 ID / 6.9-8.3 OD",
    portex_uncuffed: "6.0 ID / 8.2 OD",
    bronchoscope_storz: "Size 5.0-6.0 / ID 7.1-7.5 / OD 7.8-8.2",
    alder_hey_suction: "22-24 FG",
    npa: "5.0-5.5 mm ID",
    tracheostomy_jackson: "2-3 (5.0-6.0 ID)",
    tracheostomy_iso: "5.0-5.5",
    miller_blade: "2",
    macintosh_blade: "2",
    balloon_larynx: "8-9 mm",
    balloon_trachea: "8.5-10 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "5",
        od: "6.2",
        length: "9.0",
        size: "68",
        od_mm: "10.0",
        length_cm: "30",
        max_pressure: "17 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "10.0",
        length: "30",
        max_pressure: "9 atm",
    }),
    scope_fits_ett: Some(ScopeEttFits {
        portex: &[TubeFit { id: "6.0", od: "8.2" }],
        mallinckrodt: &[TubeFit { id: "6.0", od: "8.2" }],
        halyard_microcuff: &[
            TubeFit { id: "5.0", od: "6.7" },
            TubeFit { id: "5.5", od: "7.3" },
            TubeFit { id: "6.0", od: "8.0" },
        ],
        karl_storz: &[ScopeFit {
            scope: "8712",
            size: "5.0",
        }],
    }),
    instruments_fit: &[InstrumentSet {
        bronchoscope_id: "4.5",
        bronchoscope_od: "7.3",
        telescope: "4.0",
        flexible_suction: "4F, 5F, 6F",
        forceps: "Optical peanut/alligator/coin (with flexible suction 4F, 5F, 6F)",
    }],
    weight_range: "20-30 kg",
    age_range: "6-9 years",
    notes: SizingNotes {
        bronchoscope: "Approaching adult sizes",
        telescope: "Full adult instrumentation",
        forceps: "All adult instruments compatible",
        ventilating: "Excellent working space",
        tracheostomy: "Jackson 2-3 or ISO 5.0-5.5",
        laryngoscope: "Miller 2 or Macintosh 2",
    },
};

static EIGHT_TO_TWELVE_YEARS: AirwaySizing = AirwaySizing {
    bronchoscope: "6.0 mm (ID) / 7.5 mm (OD)",
    telescope: "2.7-4.0 mm (all angles)",
    ett: "6.5-7.0",
    ett_od: "8.9-9.6",
    forceps: "All adult instruments",
    suction: "14F, 16F",
    ventilating: "5.0-6.0 mm",
    cricoid_diameter: "9.0-10.7 mm",
    trachea_diameter: "10-13 mm",
    shiley_tube: "6.0 ID / 8.3 OD",
    portex_cuffed: "6.0-7.0 ID / 8.3-9.7 OD",
    portex_uncuffed: "7.0 ID / 9.6 OD",
    bronchoscope_storz: "Size 6.0 / ID 7.5 / OD 8.2",
    alder_hey_suction: "24-28 FG",
    npa: "6.0-6.5 mm ID",
    tracheostomy_jackson: "3 (6.0 ID / 7.0 OD)",
    tracheostomy_iso: "6.0-7.0",
    miller_blade: "2-3",
    macintosh_blade: "2-3",
    balloon_larynx: "10 mm",
    balloon_trachea: "10-12 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "6-9",
        od: "7.2-9.8",
        length: "10.0-13.0",
        size: "69",
        od_mm: "12.0-16.0",
        length_cm: "40",
        max_pressure: "10 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "12.0-15.0",
        length: "30-55",
        max_pressure: "8-14 atm",
    }),
    scope_fits_ett: Some(ScopeEttFits {
        portex: &[
            TubeFit { id: "6.5", od: "8.9" },
            TubeFit { id: "7.0", od: "9.6" },
        ],
        mallinckrodt: &[
            TubeFit { id: "6.5", od: "8.9" },
            TubeFit { id: "7.0", od: "9.5" },
        ],
        halyard_microcuff: &[
            TubeFit { id: "6.5", od: "8.7" },
            TubeFit { id: "7.0", od: "9.3" },
        ],
        karl_storz: &[],
    }),
    instruments_fit: &[InstrumentSet {
        bronchoscope_id: "5.0",
        bronchoscope_od: "7.8",
        telescope: "4.0",
        flexible_suction: "4F, 5F, 6F",
        forceps: "Optical peanut/alligator/coin (with flexible suction 4F, 5F, 6F)",
    }],
    weight_range: "30-45 kg",
    age_range: "9-12 years",
    notes: SizingNotes {
        bronchoscope: "Adult-sized equipment",
        telescope: "Full adult range",
        forceps: "All adult instruments",
        ventilating: "Adult ventilation techniques",
        tracheostomy: "Jackson 3 or ISO 6.0-7.0",
        laryngoscope: "Miller 2-3 or Macintosh 2-3",
    },
};

static ADULT: AirwaySizing = AirwaySizing {
    bronchoscope: "7.0-8.0 mm (ID) / 9.0-10.0 mm (OD)",
    telescope: "4.0 mm (all angles)",
    ett: "7.5-8.5",
    ett_od: "10.2-11.6",
    forceps: "All adult instruments",
    suction: "16F, 18F",
    ventilating: "6.0-7.0 mm",
    cricoid_diameter: ">10.8 mm",
    trachea_diameter: "13+ mm",
    shiley_tube: "6.5 ID / 9.0 OD",
    portex_cuffed: "7.0-8.0 ID / 9.6-10.8 OD",
    portex_uncuffed: "8.0 ID / 10.8 OD",
    bronchoscope_storz: "Size 6.0+ / ID 7.5+ / OD 8.2+",
    alder_hey_suction: "28 FG",
    npa: "7.0-9.0 mm ID",
    tracheostomy_jackson: "4-5 (7.0-8.0 ID)",
    tracheostomy_iso: "7.0-9.0",
    miller_blade: "3",
    macintosh_blade: "3-4",
    balloon_larynx: "12-14 mm",
    balloon_trachea: "12-16 mm",
    bryan_balloon: Some(BryanBalloon {
        id: "6-9",
        od: "7.2-9.8",
        length: "10.0-13.0",
        size: "69",
        od_mm: "12.0-16.0",
        length_cm: "40",
        max_pressure: "10 atm",
    }),
    boston_balloon: Some(BostonBalloon {
        od: "12.0-20.0",
        length: "30-55",
        max_pressure: "6-14 atm",
    }),
    // Adult scope/ETT sizing varies too widely for chart entries.
    scope_fits_ett: None,
    instruments_fit: &[],
    weight_range: ">45 kg",
    age_range: "12-14+ years",
    notes: SizingNotes {
        bronchoscope: "Full adult equipment",
        telescope: "Standard adult scopes",
        forceps: "Full adult instrumentation",
        ventilating: "Adult techniques",
        tracheostomy: "Adult sizing",
        laryngoscope: "Adult blades",
    },
};

/// Documented weight ranges, parsed once. A group whose range string
/// fails to parse simply produces no advisory; a test asserts the chart
/// as shipped parses completely.
static EXPECTED_WEIGHTS: Lazy<Vec<(AgeGroup, ValueRange)>> = Lazy::new(|| {
    AgeGroup::ALL
        .iter()
        .filter_map(|group| {
            ValueRange::parse(for_group(*group).weight_range).map(|range| (*group, range))
        })
        .collect()
});

/// Equipment sizing for an age group
pub fn for_group(group: AgeGroup) -> &'static AirwaySizing {
    match group {
        AgeGroup::Premature => &PREMATURE,
        AgeGroup::ZeroToSixMonths => &ZERO_TO_SIX_MONTHS,
        AgeGroup::SixToEighteenMonths => &SIX_TO_EIGHTEEN_MONTHS,
        AgeGroup::EighteenMonthsToThreeYears => &EIGHTEEN_MONTHS_TO_THREE_YEARS,
        AgeGroup::ThreeToFiveYears => &THREE_TO_FIVE_YEARS,
        AgeGroup::FiveToEightYears => &FIVE_TO_EIGHT_YEARS,
        AgeGroup::EightToTwelveYears => &EIGHT_TO_TWELVE_YEARS,
        AgeGroup::Adult => &ADULT,
    }
}

/// A supplied weight that falls outside the documented range for the
/// age-selected group. Advisory only - the selection stands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightAdvisory {
    pub supplied_kg: f64,
    pub expected: ValueRange,
    /// Documented range string, e.g. "6-10 kg"
    pub expected_label: &'static str,
}

/// A resolved sizing recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub group: AgeGroup,
    pub sizing: &'static AirwaySizing,
    /// Present when a supplied weight contradicts the age selection
    pub weight_advisory: Option<WeightAdvisory>,
}

/// Cross-check a supplied weight against a group's documented range.
///
/// Returns `Ok(None)` when the weight is plausible for the group and
/// `Ok(Some(_))` when it is not. The check never re-classifies.
pub fn weight_advisory(group: AgeGroup, weight_kg: f64) -> CalcResult<Option<WeightAdvisory>> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CalcError::invalid_input(
            "weight_kg",
            weight_kg.to_string(),
            "Weight must be a positive number",
        ));
    }
    let expected = EXPECTED_WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == group)
        .map(|(_, range)| *range);
    Ok(match expected {
        Some(range) if !range.contains(weight_kg) => {
            tracing::debug!(
                group = group.key(),
                weight_kg,
                "supplied weight outside documented range for age group"
            );
            Some(WeightAdvisory {
                supplied_kg: weight_kg,
                expected: range,
                expected_label: for_group(group).weight_range,
            })
        }
        _ => None,
    })
}

/// Resolve equipment sizing from an age selector value, optionally
/// cross-checking a supplied weight.
pub fn recommend_by_age(
    age_key: Option<&str>,
    weight_kg: Option<f64>,
) -> CalcResult<Recommendation> {
    let group = AgeGroup::resolve_key(age_key)?;
    let advisory = match weight_kg {
        Some(weight) => weight_advisory(group, weight)?,
        None => None,
    };
    Ok(Recommendation {
        group,
        sizing: for_group(group),
        weight_advisory: advisory,
    })
}

/// Resolve equipment sizing from a patient weight in kilograms
pub fn recommend_by_weight(weight_kg: f64) -> CalcResult<Recommendation> {
    let group = AgeGroup::from_weight_kg(weight_kg)?;
    Ok(Recommendation {
        group,
        sizing: for_group(group),
        weight_advisory: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_weight_range_parses() {
        assert_eq!(EXPECTED_WEIGHTS.len(), AgeGroup::ALL.len());
    }

    #[test]
    fn test_sizing_by_group() {
        let sizing = for_group(AgeGroup::SixToEighteenMonths);
        assert_eq!(sizing.bronchoscope, "3.5 mm (ID) / 5.0 mm (OD)");
        assert_eq!(sizing.ett, "4.0");
        assert_eq!(sizing.weight_range, "6-10 kg");
    }

    #[test]
    fn test_adult_chart_gaps() {
        let sizing = for_group(AgeGroup::Adult);
        assert!(sizing.scope_fits_ett.is_none());
        assert!(sizing.instruments_fit.is_empty());
        assert!(sizing.bryan_balloon.is_some());
    }

    #[test]
    fn test_recommend_by_weight_boundary() {
        // 6 kg belongs to the 6-10 kg station, not 1-6 kg.
        let rec = recommend_by_weight(6.0).unwrap();
        assert_eq!(rec.group, AgeGroup::SixToEighteenMonths);
        assert_eq!(rec.sizing.ett, "4.0");
        assert!(rec.weight_advisory.is_none());
    }

    #[test]
    fn test_recommend_by_age_without_weight() {
        let rec = recommend_by_age(Some("premature"), None).unwrap();
        assert_eq!(rec.group, AgeGroup::Premature);
        assert_eq!(rec.sizing.ett, "2.5");
        assert!(rec.weight_advisory.is_none());
    }

    #[test]
    fn test_weight_advisory_flags_mismatch() {
        // 12 kg is outside the documented 6-10 kg range.
        let rec = recommend_by_age(Some("6-18mo"), Some(12.0)).unwrap();
        let advisory = rec.weight_advisory.expect("mismatch should be flagged");
        assert_eq!(advisory.supplied_kg, 12.0);
        assert_eq!(advisory.expected_label, "6-10 kg");
        // The age-based selection is never overridden.
        assert_eq!(rec.group, AgeGroup::SixToEighteenMonths);
    }

    #[test]
    fn test_weight_advisory_accepts_plausible_weight() {
        let rec = recommend_by_age(Some("6-18mo"), Some(8.0)).unwrap();
        assert!(rec.weight_advisory.is_none());
    }

    #[test]
    fn test_weight_advisory_open_ended_ranges() {
        // Premature is documented "<1 kg"; adult ">45 kg".
        assert!(weight_advisory(AgeGroup::Premature, 0.8).unwrap().is_none());
        assert!(weight_advisory(AgeGroup::Premature, 2.0).unwrap().is_some());
        assert!(weight_advisory(AgeGroup::Adult, 70.0).unwrap().is_none());
        assert!(weight_advisory(AgeGroup::Adult, 30.0).unwrap().is_some());
    }

    #[test]
    fn test_weight_advisory_rejects_invalid_weight() {
        assert!(matches!(
            weight_advisory(AgeGroup::Adult, f64::NAN),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            weight_advisory(AgeGroup::Adult, 0.0),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_selection_state_outcomes() {
        assert!(matches!(
            recommend_by_age(None, None),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            recommend_by_age(Some("toddler"), None),
            Err(CalcError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_payload_serializes() {
        let rec = recommend_by_weight(22.0).unwrap();
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"5.5-6.0\""));
    }
}
