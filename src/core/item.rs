use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Safely convert usize to f64 for percentage calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// One entry of a packing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    /// Stable identifier assigned by the app, if the list came from an export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Free-text item name (e.g. "sunscreen")
    pub name: String,

    /// Whether the user has already packed this item
    #[serde(default)]
    pub packed: bool,
}

impl PackingItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            packed: false,
        }
    }

    #[cfg(test)]
    pub fn packed(mut self) -> Self {
        self.packed = true;
        self
    }
}

/// A packing list in the shape the app exports: camelCase keys,
/// `createdAt` in Unix milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub items: Vec<PackingItem>,

    /// Icon name used by the app's list picker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Creation time in Unix milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl PackingList {
    /// Build a bare list (no metadata, nothing packed) from item names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: names.into_iter().map(PackingItem::new).collect(),
            ..Self::default()
        }
    }

    /// Item names in list order
    #[must_use]
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    /// Number of items already packed
    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|i| i.packed).count()
    }

    /// Packed progress as a whole percent, rounded to nearest; 0 for an
    /// empty list.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = count_to_f64(self.packed_count()) / count_to_f64(self.items.len());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // 0-100
        {
            (ratio * 100.0).round() as u32
        }
    }

    /// Creation time as a UTC timestamp, if the export carried one
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(DateTime::from_timestamp_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names() {
        let list = PackingList::from_names(["sunscreen", "passport"]);
        assert_eq!(list.item_names(), vec!["sunscreen", "passport"]);
        assert_eq!(list.packed_count(), 0);
    }

    #[test]
    fn test_progress_percent_rounds() {
        let mut list = PackingList::from_names(["a", "b", "c"]);
        list.items[0].packed = true;
        assert_eq!(list.progress_percent(), 33);

        list.items[1].packed = true;
        assert_eq!(list.progress_percent(), 67);
    }

    #[test]
    fn test_progress_percent_empty() {
        assert_eq!(PackingList::default().progress_percent(), 0);
    }

    #[test]
    fn test_created_at_utc() {
        let list = PackingList {
            created_at: Some(1_717_200_000_000),
            ..PackingList::default()
        };
        let ts = list.created_at_utc().unwrap();
        assert_eq!(ts.timestamp_millis(), 1_717_200_000_000);
    }

    #[test]
    fn test_camel_case_round_trip() {
        let json = r#"{
            "id": "x7f2k1q",
            "title": "Beach Trip",
            "items": [{"id": "a1", "name": "sunscreen", "packed": true}],
            "icon": "camera-outline",
            "createdAt": 1717200000000
        }"#;
        let list: PackingList = serde_json::from_str(json).unwrap();
        assert_eq!(list.title.as_deref(), Some("Beach Trip"));
        assert_eq!(list.items.len(), 1);
        assert!(list.items[0].packed);

        let out = serde_json::to_string(&list).unwrap();
        assert!(out.contains("\"createdAt\""));
    }
}
