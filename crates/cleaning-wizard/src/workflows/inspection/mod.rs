//! Step one of the visit wizard: the customer's acceptance checklist.

pub mod domain;
mod items;
mod update;
mod validation;

pub use domain::{
    ClaimStatus, InspectionRecord, ItemId, ItemKind, ItemReport, PhotoPreference, SignatureError,
    SignatureImage,
};
pub use items::{ItemChange, ItemReportList};
pub use update::{apply, InspectionUpdate};
pub use validation::{is_complete, missing_requirements, Requirement};
