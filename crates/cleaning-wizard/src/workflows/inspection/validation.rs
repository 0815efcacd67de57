use serde::Serialize;

use super::domain::{ClaimStatus, InspectionRecord};

/// Something the customer still has to provide before the checklist can be
/// handed over to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    CustomerName,
    ServiceCompletion,
    ItemReports,
    ItemNames,
    PhotoPreference,
    PrivacyAcknowledgement,
    Signature,
}

impl Requirement {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CustomerName => "Customer name",
            Self::ServiceCompletion => "Confirm the service was completed",
            Self::ItemReports => "Report at least one damaged or lost item",
            Self::ItemNames => "Name every reported item",
            Self::PhotoPreference => "Choose how photos are kept",
            Self::PrivacyAcknowledgement => "Acknowledge the privacy notice",
            Self::Signature => "Customer signature",
        }
    }
}

/// Unmet requirements in form order. Marketing consent, item kind, item
/// remarks and the conduct detail never appear here.
pub fn missing_requirements(record: &InspectionRecord) -> Vec<Requirement> {
    let mut missing = Vec::new();

    if record.customer_name.trim().is_empty() {
        missing.push(Requirement::CustomerName);
    }
    if !record.acknowledged_service_complete {
        missing.push(Requirement::ServiceCompletion);
    }
    if record.property_status == ClaimStatus::Claimed {
        if record.item_reports.is_empty() {
            missing.push(Requirement::ItemReports);
        } else if !record.item_reports.all_named() {
            missing.push(Requirement::ItemNames);
        }
    }
    if !record.photo_preference.is_answered() {
        missing.push(Requirement::PhotoPreference);
    }
    if !record.privacy_acknowledged {
        missing.push(Requirement::PrivacyAcknowledgement);
    }
    if record.signature.is_none() {
        missing.push(Requirement::Signature);
    }

    missing
}

pub fn is_complete(record: &InspectionRecord) -> bool {
    missing_requirements(record).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::inspection::{ItemChange, PhotoPreference, SignatureImage};

    fn completed() -> InspectionRecord {
        InspectionRecord {
            customer_name: "Chen".to_string(),
            acknowledged_service_complete: true,
            photo_preference: PhotoPreference::Saved,
            privacy_acknowledged: true,
            signature: Some(
                SignatureImage::from_data_url("data:image/png;base64,AAAA").expect("signature"),
            ),
            ..InspectionRecord::default()
        }
    }

    #[test]
    fn completed_record_passes() {
        assert!(is_complete(&completed()));
    }

    fn assert_blocks_alone(mutate: impl FnOnce(&mut InspectionRecord), expected: Requirement) {
        let mut record = completed();
        mutate(&mut record);
        assert_eq!(missing_requirements(&record), vec![expected]);
        assert!(!is_complete(&record));
    }

    #[test]
    fn every_required_field_blocks_on_its_own() {
        assert_blocks_alone(
            |r| r.customer_name = "  ".to_string(),
            Requirement::CustomerName,
        );
        assert_blocks_alone(
            |r| r.acknowledged_service_complete = false,
            Requirement::ServiceCompletion,
        );
        assert_blocks_alone(
            |r| r.photo_preference = PhotoPreference::Unset,
            Requirement::PhotoPreference,
        );
        assert_blocks_alone(
            |r| r.privacy_acknowledged = false,
            Requirement::PrivacyAcknowledgement,
        );
        assert_blocks_alone(|r| r.signature = None, Requirement::Signature);
    }

    #[test]
    fn claimed_property_needs_named_items() {
        let mut record = completed();
        record.property_status = ClaimStatus::Claimed;
        assert_eq!(missing_requirements(&record), vec![Requirement::ItemReports]);

        let id = record.item_reports.add().expect("id available");
        assert_eq!(missing_requirements(&record), vec![Requirement::ItemNames]);

        record
            .item_reports
            .update(id, ItemChange::Name("Glass vase".to_string()));
        assert!(is_complete(&record));
    }

    #[test]
    fn resolved_property_ignores_item_list() {
        let mut record = completed();
        record.property_status = ClaimStatus::Resolved;
        record.item_reports.add();
        assert!(is_complete(&record));
    }

    #[test]
    fn claimed_conduct_does_not_require_detail() {
        let mut record = completed();
        record.conduct_status = ClaimStatus::Claimed;
        record.conduct_detail.clear();
        assert!(is_complete(&record));
    }

    #[test]
    fn marketing_consent_is_optional() {
        let mut record = completed();
        record.marketing_consent = false;
        assert!(is_complete(&record));
    }
}
