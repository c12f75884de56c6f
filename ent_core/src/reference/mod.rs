//! # Clinical Reference Tables
//!
//! Immutable chart data and its resolution operations. Every table is
//! built once at startup and never mutated; operations hand out shared
//! read-only payload references.
//!
//! ## Available Tables
//!
//! - [`age_group`] - age stations and the weight-to-station bands
//! - [`airway_sizing`] - GOSH bronchoscopy/airway equipment chart
//! - [`balloon_sizing`] - balloon dilation sizing guidance
//! - [`obstruction`] - Cotton-Myer obstruction grading chart
//! - [`nebulized_epinephrine`] - croup-dose nebulized epinephrine
//! - [`xeomin`] - weight-banded XEOMIN sialorrhea dosing
//!
//! Boundary policies differ between tables on purpose: the source charts
//! are right-open in some places and closed in others, and that is a
//! fidelity requirement (see DESIGN.md).

pub mod age_group;
pub mod airway_sizing;
pub mod balloon_sizing;
pub mod nebulized_epinephrine;
pub mod obstruction;
pub mod xeomin;

// Re-export the types callers touch most
pub use age_group::AgeGroup;
pub use airway_sizing::{AirwaySizing, Recommendation, WeightAdvisory};
pub use balloon_sizing::BalloonSizing;
pub use nebulized_epinephrine::EpinephrineDose;
pub use obstruction::{ObstructionFinding, ObstructionGrade};
pub use xeomin::XeominDose;
