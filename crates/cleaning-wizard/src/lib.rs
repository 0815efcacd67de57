//! Inspection checklist, provider fee calculation and payment hand-off for
//! home-cleaning visits.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
