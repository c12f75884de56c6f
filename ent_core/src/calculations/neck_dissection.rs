//! # Neck Dissection Classification
//!
//! Classifies a neck dissection from the set of lymph node levels
//! removed and which non-lymphatic structures were preserved.
//!
//! Removal of levels I-V with sacrifice of sternocleidomastoid, internal
//! jugular vein, and spinal accessory nerve is a radical dissection;
//! preserving any of the three makes it modified radical. Anything short
//! of levels I-V is selective, with the common named patterns
//! recognized.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Cervical lymph node level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NeckLevel {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl NeckLevel {
    /// All levels in anatomical order
    pub const ALL: [NeckLevel; 6] = [
        NeckLevel::I,
        NeckLevel::II,
        NeckLevel::III,
        NeckLevel::IV,
        NeckLevel::V,
        NeckLevel::VI,
    ];

    /// Roman numeral for display
    pub fn numeral(&self) -> &'static str {
        match self {
            NeckLevel::I => "I",
            NeckLevel::II => "II",
            NeckLevel::III => "III",
            NeckLevel::IV => "IV",
            NeckLevel::V => "V",
            NeckLevel::VI => "VI",
        }
    }
}

impl std::fmt::Display for NeckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.numeral())
    }
}

/// Non-lymphatic structures that may be preserved during dissection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreservedStructures {
    /// Sternocleidomastoid muscle
    pub scm: bool,
    /// Internal jugular vein
    pub ijv: bool,
    /// Spinal accessory nerve (CN XI)
    pub cn_xi: bool,
}

impl PreservedStructures {
    /// Names of the preserved structures, in conventional order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.scm {
            names.push("SCM");
        }
        if self.ijv {
            names.push("IJV");
        }
        if self.cn_xi {
            names.push("CN XI");
        }
        names
    }

    pub fn any(&self) -> bool {
        self.scm || self.ijv || self.cn_xi
    }
}

/// Input parameters for classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeckDissectionInput {
    /// Levels removed
    pub levels: BTreeSet<NeckLevel>,
    pub preserved: PreservedStructures,
}

/// Recognized selective dissection patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectiveVariant {
    /// Levels I-III, typically for oral cavity cancers
    Supraomohyoid,
    /// Levels II-IV, typically for laryngeal/hypopharyngeal cancers
    Lateral,
    /// Levels II-V, typically for cutaneous malignancies
    Posterolateral,
    /// Level VI, typically for thyroid cancers
    CentralCompartment,
    /// Any other level combination
    Custom,
}

impl SelectiveVariant {
    /// Chart description for the pattern
    pub fn description(&self) -> &'static str {
        match self {
            SelectiveVariant::Supraomohyoid => {
                "Supraomohyoid neck dissection (levels I-III) - typically for oral cavity cancers"
            }
            SelectiveVariant::Lateral => {
                "Lateral neck dissection (levels II-IV) - typically for laryngeal/hypopharyngeal cancers"
            }
            SelectiveVariant::Posterolateral => {
                "Posterolateral neck dissection (levels II-V) - typically for cutaneous malignancies"
            }
            SelectiveVariant::CentralCompartment => {
                "Central compartment dissection (level VI) - typically for thyroid cancers"
            }
            SelectiveVariant::Custom => "Custom selective neck dissection",
        }
    }
}

/// Classification outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class")]
pub enum NeckDissectionClass {
    /// Levels I-V with sacrifice of SCM, IJV, and CN XI
    Radical,
    /// Levels I-V with at least one structure preserved
    ModifiedRadical { preserved: Vec<&'static str> },
    Selective { variant: SelectiveVariant },
}

impl NeckDissectionClass {
    /// Conventional name with abbreviation
    pub fn display_name(&self) -> &'static str {
        match self {
            NeckDissectionClass::Radical => "Radical Neck Dissection (RND)",
            NeckDissectionClass::ModifiedRadical { .. } => {
                "Modified Radical Neck Dissection (MRND)"
            }
            NeckDissectionClass::Selective { .. } => "Selective Neck Dissection (SND)",
        }
    }
}

fn level_set(levels: &[NeckLevel]) -> BTreeSet<NeckLevel> {
    levels.iter().copied().collect()
}

/// Classify a dissection from its levels and preserved structures.
///
/// An empty level set is `NoSelection`.
pub fn classify(input: &NeckDissectionInput) -> CalcResult<NeckDissectionClass> {
    if input.levels.is_empty() {
        return Err(CalcError::no_selection("neck_levels"));
    }

    let comprehensive = level_set(&[
        NeckLevel::I,
        NeckLevel::II,
        NeckLevel::III,
        NeckLevel::IV,
        NeckLevel::V,
    ]);
    if input.levels == comprehensive {
        return Ok(if input.preserved.any() {
            NeckDissectionClass::ModifiedRadical {
                preserved: input.preserved.names(),
            }
        } else {
            NeckDissectionClass::Radical
        });
    }

    let variant = if input.levels == level_set(&[NeckLevel::I, NeckLevel::II, NeckLevel::III]) {
        SelectiveVariant::Supraomohyoid
    } else if input.levels == level_set(&[NeckLevel::II, NeckLevel::III, NeckLevel::IV]) {
        SelectiveVariant::Lateral
    } else if input.levels
        == level_set(&[NeckLevel::II, NeckLevel::III, NeckLevel::IV, NeckLevel::V])
    {
        SelectiveVariant::Posterolateral
    } else if input.levels == level_set(&[NeckLevel::VI]) {
        SelectiveVariant::CentralCompartment
    } else {
        SelectiveVariant::Custom
    };
    Ok(NeckDissectionClass::Selective { variant })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(levels: &[NeckLevel], preserved: PreservedStructures) -> NeckDissectionInput {
        NeckDissectionInput {
            levels: level_set(levels),
            preserved,
        }
    }

    const I_TO_V: [NeckLevel; 5] = [
        NeckLevel::I,
        NeckLevel::II,
        NeckLevel::III,
        NeckLevel::IV,
        NeckLevel::V,
    ];

    #[test]
    fn test_radical() {
        let class = classify(&input(&I_TO_V, PreservedStructures::default())).unwrap();
        assert_eq!(class, NeckDissectionClass::Radical);
        assert_eq!(class.display_name(), "Radical Neck Dissection (RND)");
    }

    #[test]
    fn test_modified_radical_lists_preserved_structures() {
        let preserved = PreservedStructures {
            scm: true,
            ijv: false,
            cn_xi: true,
        };
        match classify(&input(&I_TO_V, preserved)).unwrap() {
            NeckDissectionClass::ModifiedRadical { preserved } => {
                assert_eq!(preserved, vec!["SCM", "CN XI"]);
            }
            other => panic!("expected MRND, got {other:?}"),
        }
    }

    #[test]
    fn test_named_selective_patterns() {
        let cases = [
            (
                vec![NeckLevel::I, NeckLevel::II, NeckLevel::III],
                SelectiveVariant::Supraomohyoid,
            ),
            (
                vec![NeckLevel::II, NeckLevel::III, NeckLevel::IV],
                SelectiveVariant::Lateral,
            ),
            (
                vec![NeckLevel::II, NeckLevel::III, NeckLevel::IV, NeckLevel::V],
                SelectiveVariant::Posterolateral,
            ),
            (vec![NeckLevel::VI], SelectiveVariant::CentralCompartment),
        ];
        for (levels, expected) in cases {
            match classify(&input(&levels, PreservedStructures::default())).unwrap() {
                NeckDissectionClass::Selective { variant } => assert_eq!(variant, expected),
                other => panic!("expected SND, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unnamed_combination_is_custom() {
        match classify(&input(
            &[NeckLevel::I, NeckLevel::IV],
            PreservedStructures::default(),
        ))
        .unwrap()
        {
            NeckDissectionClass::Selective { variant } => {
                assert_eq!(variant, SelectiveVariant::Custom);
            }
            other => panic!("expected SND, got {other:?}"),
        }
    }

    #[test]
    fn test_six_levels_is_not_radical() {
        // Adding level VI to I-V falls outside the radical definition.
        let all = NeckLevel::ALL;
        match classify(&input(&all, PreservedStructures::default())).unwrap() {
            NeckDissectionClass::Selective { variant } => {
                assert_eq!(variant, SelectiveVariant::Custom);
            }
            other => panic!("expected SND, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_selection() {
        assert!(matches!(
            classify(&input(&[], PreservedStructures::default())),
            Err(CalcError::NoSelection { .. })
        ));
    }
}
