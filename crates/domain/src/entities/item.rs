//! Item entity - a snapshot of an inventory stack
//!
//! Items arrive from the host platform's inventory subsystem as read-only
//! snapshots. Nothing in this workspace writes them back.

use serde::{Deserialize, Serialize};

use super::item_meta::ItemMeta;
use crate::value_objects::Material;

/// A typed stack with optional rich metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub material: Material,
    /// Stack size. Never part of item identity.
    #[serde(default = "default_amount")]
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

fn default_amount() -> u32 {
    1
}

impl Item {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            amount: 1,
            meta: None,
        }
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Metadata the platform would report; empty metadata counts as none.
    pub fn present_meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref().filter(|meta| !meta.is_empty())
    }

    pub fn has_meta(&self) -> bool {
        self.present_meta().is_some()
    }

    /// Independent copy with the stack size forced to one and empty
    /// metadata dropped.
    pub fn normalized(&self) -> Item {
        Item {
            material: self.material.clone(),
            amount: 1,
            meta: self.present_meta().cloned(),
        }
    }

    /// Native platform equality: same material and structurally identical
    /// metadata, regardless of stack size.
    pub fn is_similar(&self, other: &Item) -> bool {
        self.material == other.material && self.present_meta() == other.present_meta()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(key: &str) -> Material {
        Material::new(key).expect("valid material")
    }

    #[test]
    fn normalized_copy_leaves_original_untouched() {
        let stack = Item::new(material("STONE")).with_amount(64);
        let normalized = stack.normalized();
        assert_eq!(normalized.amount, 1);
        assert_eq!(stack.amount, 64);
    }

    #[test]
    fn similarity_ignores_amount() {
        let a = Item::new(material("STONE")).with_amount(3);
        let b = Item::new(material("STONE")).with_amount(40);
        assert!(a.is_similar(&b));
    }

    #[test]
    fn similarity_compares_meta() {
        let plain = Item::new(material("STONE"));
        let named = plain
            .clone()
            .with_meta(ItemMeta::new().with_display_name("Rock"));
        assert!(!plain.is_similar(&named));
        assert!(named.is_similar(&named.clone()));
    }

    #[test]
    fn empty_meta_is_no_meta() {
        let bare = Item::new(material("STONE"));
        let empty: Item = serde_json::from_str(r#"{"material":"stone","meta":{}}"#)
            .expect("deserialize");
        assert!(!empty.has_meta());
        assert_eq!(empty.normalized().meta, None);
        assert!(bare.is_similar(&empty));
    }

    #[test]
    fn amount_defaults_to_one_when_missing() {
        let item: Item = serde_json::from_str(r#"{"material":"stone"}"#).expect("deserialize");
        assert_eq!(item.amount, 1);
        assert_eq!(item.material.as_str(), "STONE");
    }
}
