//! Represents one inventory record, keyed by SKU.

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single inventory record.
///
/// The SKU is the primary key in the backing table; writing an item with
/// an existing SKU overwrites the prior record entirely.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Stock-Keeping Unit; unique identifier for the record.
    pub sku: String,

    /// Human-readable item name.
    pub name: String,

    /// Quantity on hand.
    pub qty: i64,
}

impl Item {
    /// Reject items with empty identifying fields.
    ///
    /// Field presence and types are already enforced by deserialization;
    /// this only adds the non-empty checks the schema cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.is_empty() {
            return Err("field `sku` must be a non-empty string".into());
        }
        if self.name.is_empty() {
            return Err("field `name` must be a non-empty string".into());
        }
        Ok(())
    }

    /// Convert into the DynamoDB attribute map stored under key `sku`.
    pub fn to_attributes(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("sku".to_string(), AttributeValue::S(self.sku.clone())),
            ("name".to_string(), AttributeValue::S(self.name.clone())),
            ("qty".to_string(), AttributeValue::N(self.qty.to_string())),
        ])
    }

    /// Rebuild an item from a stored attribute map.
    ///
    /// Returns `None` when any attribute is missing or has an unexpected
    /// type, so callers can surface a malformed-record error instead of
    /// a partially filled item.
    pub fn from_attributes(attrs: &HashMap<String, AttributeValue>) -> Option<Self> {
        let sku = attrs.get("sku")?.as_s().ok()?.clone();
        let name = attrs.get("name")?.as_s().ok()?.clone();
        let qty = attrs.get("qty")?.as_n().ok()?.parse().ok()?;
        Some(Self { sku, name, qty })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item {
            sku: "A1".into(),
            name: "Widget".into(),
            qty: 5,
        }
    }

    #[test]
    fn validate_accepts_complete_item() {
        assert!(widget().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_sku() {
        let item = Item {
            sku: String::new(),
            ..widget()
        };
        assert!(item.validate().unwrap_err().contains("sku"));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let item = Item {
            name: String::new(),
            ..widget()
        };
        assert!(item.validate().unwrap_err().contains("name"));
    }

    #[test]
    fn attribute_map_round_trip() {
        let item = widget();
        let attrs = item.to_attributes();
        assert_eq!(Item::from_attributes(&attrs), Some(item));
    }

    #[test]
    fn from_attributes_rejects_missing_field() {
        let mut attrs = widget().to_attributes();
        attrs.remove("qty");
        assert_eq!(Item::from_attributes(&attrs), None);
    }

    #[test]
    fn from_attributes_rejects_wrong_type() {
        let mut attrs = widget().to_attributes();
        attrs.insert("qty".into(), AttributeValue::S("five".into()));
        assert_eq!(Item::from_attributes(&attrs), None);
    }

    #[test]
    fn from_attributes_rejects_non_numeric_qty() {
        let mut attrs = widget().to_attributes();
        attrs.insert("qty".into(), AttributeValue::N("not-a-number".into()));
        assert_eq!(Item::from_attributes(&attrs), None);
    }

    #[test]
    fn deserialization_rejects_fractional_qty() {
        let err = serde_json::from_str::<Item>(r#"{"sku":"A1","name":"Widget","qty":1.5}"#);
        assert!(err.is_err());
    }
}
