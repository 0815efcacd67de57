use serde::{Deserialize, Serialize};

use super::domain::{ClaimStatus, InspectionRecord, ItemId, PhotoPreference, SignatureImage};
use super::items::ItemChange;

/// Closed set of edits the checklist screen can make to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InspectionUpdate {
    CustomerName(String),
    ServiceComplete(bool),
    PropertyStatus(ClaimStatus),
    AddItem,
    RemoveItem(ItemId),
    UpdateItem { id: ItemId, change: ItemChange },
    ConductStatus(ClaimStatus),
    ConductDetail(String),
    PhotoPreference(PhotoPreference),
    PrivacyAcknowledged(bool),
    MarketingConsent(bool),
    Sign(SignatureImage),
    ClearSignature,
}

/// Returns the record with `update` applied; `record` is left untouched.
pub fn apply(record: &InspectionRecord, update: InspectionUpdate) -> InspectionRecord {
    let mut next = record.clone();
    match update {
        InspectionUpdate::CustomerName(name) => next.customer_name = name,
        InspectionUpdate::ServiceComplete(value) => next.acknowledged_service_complete = value,
        InspectionUpdate::PropertyStatus(status) => next.property_status = status,
        InspectionUpdate::AddItem => {
            next.item_reports.add();
        }
        InspectionUpdate::RemoveItem(id) => {
            next.item_reports.remove(id);
        }
        InspectionUpdate::UpdateItem { id, change } => {
            next.item_reports.update(id, change);
        }
        InspectionUpdate::ConductStatus(status) => next.conduct_status = status,
        InspectionUpdate::ConductDetail(detail) => next.conduct_detail = detail,
        InspectionUpdate::PhotoPreference(preference) => next.photo_preference = preference,
        InspectionUpdate::PrivacyAcknowledged(value) => next.privacy_acknowledged = value,
        InspectionUpdate::MarketingConsent(value) => next.marketing_consent = value,
        InspectionUpdate::Sign(signature) => next.signature = Some(signature),
        InspectionUpdate::ClearSignature => next.signature = None,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::inspection::ItemKind;

    #[test]
    fn apply_leaves_the_input_snapshot_alone() {
        let original = InspectionRecord::for_customer("Chen");
        let updated = apply(&original, InspectionUpdate::ServiceComplete(true));

        assert!(!original.acknowledged_service_complete);
        assert!(updated.acknowledged_service_complete);
        assert_eq!(updated.customer_name, "Chen");
    }

    #[test]
    fn item_edits_flow_through_the_list_editor() {
        let record = apply(&InspectionRecord::default(), InspectionUpdate::AddItem);
        let id = record.item_reports.items()[0].id;
        let record = apply(
            &record,
            InspectionUpdate::UpdateItem {
                id,
                change: ItemChange::Kind(ItemKind::Damage),
            },
        );
        assert_eq!(record.item_reports.items()[0].kind, ItemKind::Damage);

        let record = apply(&record, InspectionUpdate::RemoveItem(id));
        assert!(record.item_reports.is_empty());
    }

    #[test]
    fn add_item_with_exhausted_ids_keeps_record() {
        let record: InspectionRecord = serde_json::from_value(serde_json::json!({
            "item_reports": { "items": [], "last_id": u64::MAX },
        }))
        .expect("record parses");

        let updated = apply(&record, InspectionUpdate::AddItem);
        assert_eq!(updated, record);
    }

    #[test]
    fn updates_use_tagged_wire_format() {
        let update: InspectionUpdate = serde_json::from_value(serde_json::json!({
            "type": "update_item",
            "value": { "id": 2, "change": { "field": "name", "value": "Teapot" } },
        }))
        .expect("update parses");

        assert_eq!(
            update,
            InspectionUpdate::UpdateItem {
                id: ItemId(2),
                change: ItemChange::Name("Teapot".to_string()),
            }
        );

        let add: InspectionUpdate =
            serde_json::from_value(serde_json::json!({ "type": "add_item" })).expect("unit parses");
        assert_eq!(add, InspectionUpdate::AddItem);
    }
}
