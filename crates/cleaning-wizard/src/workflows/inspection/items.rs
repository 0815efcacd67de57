use serde::{Deserialize, Serialize};

use super::domain::{ItemId, ItemKind, ItemReport};

/// Single-field edit applied to one reported item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ItemChange {
    Name(String),
    #[serde(rename = "type")]
    Kind(ItemKind),
    Remarks(String),
}

/// Ordered list of reported items. Identifiers come from a counter stored
/// alongside the items, so a removed identifier is never handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemReportList {
    items: Vec<ItemReport>,
    last_id: u64,
}

impl ItemReportList {
    pub fn items(&self) -> &[ItemReport] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemReport> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends an empty item and returns its identifier, or `None` once the
    /// identifier space is exhausted.
    pub fn add(&mut self) -> Option<ItemId> {
        let highest = self
            .items
            .iter()
            .map(|item| item.id.0)
            .max()
            .unwrap_or_default();
        let next = self.last_id.max(highest).checked_add(1)?;
        self.last_id = next;

        let id = ItemId(next);
        self.items.push(ItemReport::empty(id));
        Some(id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<ItemReport> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Returns `false` when no item carries `id`.
    pub fn update(&mut self, id: ItemId, change: ItemChange) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        match change {
            ItemChange::Name(name) => item.name = name,
            ItemChange::Kind(kind) => item.kind = kind,
            ItemChange::Remarks(remarks) => item.remarks = remarks,
        }
        true
    }

    pub fn all_named(&self) -> bool {
        self.items.iter().all(ItemReport::has_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_restores_items() {
        let mut list = ItemReportList::default();
        let first = list.add().expect("id available");
        list.update(first, ItemChange::Name("Vase".to_string()));
        let before = list.items().to_vec();

        let added = list.add().expect("id available");
        assert_eq!(list.len(), 2);
        let removed = list.remove(added).expect("item present");

        assert_eq!(removed.id, added);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn identifiers_are_never_reused() {
        let mut list = ItemReportList::default();
        let first = list.add().expect("id available");
        let second = list.add().expect("id available");
        list.remove(second);
        let third = list.add().expect("id available");

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(third, ItemId(3));
    }

    #[test]
    fn unknown_identifier_is_a_no_op() {
        let mut list = ItemReportList::default();
        let id = list.add().expect("id available");
        let snapshot = list.clone();

        assert!(list.remove(ItemId(99)).is_none());
        assert!(!list.update(ItemId(99), ItemChange::Name("Lamp".to_string())));
        assert_eq!(list, snapshot);
        assert!(list.get(id).is_some());
    }

    #[test]
    fn update_touches_only_the_named_field() {
        let mut list = ItemReportList::default();
        let id = list.add().expect("id available");
        list.update(id, ItemChange::Kind(ItemKind::Lost));
        list.update(id, ItemChange::Remarks("left on balcony".to_string()));

        let item = list.get(id).expect("item present");
        assert_eq!(item.kind, ItemKind::Lost);
        assert_eq!(item.remarks, "left on balcony");
        assert!(item.name.is_empty());
        assert!(!list.all_named());
    }

    #[test]
    fn counter_skips_past_ids_supplied_by_clients() {
        let mut list: ItemReportList = serde_json::from_value(serde_json::json!({
            "items": [{ "id": 7, "name": "Mirror" }],
        }))
        .expect("list parses");

        assert_eq!(list.add(), Some(ItemId(8)));
    }

    #[test]
    fn exhausted_counter_leaves_list_unchanged() {
        let mut list: ItemReportList = serde_json::from_value(serde_json::json!({
            "items": [{ "id": 3, "name": "Rug" }],
            "last_id": u64::MAX,
        }))
        .expect("list parses");
        let snapshot = list.clone();

        assert_eq!(list.add(), None);
        assert_eq!(list, snapshot);

        let mut list: ItemReportList = serde_json::from_value(serde_json::json!({
            "items": [{ "id": u64::MAX, "name": "Rug" }],
        }))
        .expect("list parses");
        assert_eq!(list.add(), None);
        assert_eq!(list.len(), 1);
    }
}
