use std::path::Path;

use crate::core::item::PackingList;
use crate::parsing::ParseError;

/// Parse a packing list from plain text: one item per line, blank lines
/// ignored, surrounding whitespace trimmed. Nothing is marked packed.
#[must_use]
pub fn parse_list_text(content: &str) -> PackingList {
    PackingList::from_names(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

/// Parse a packing list from JSON text.
///
/// Accepts either a bare array of item-name strings or a single exported
/// list object (camelCase keys, `createdAt` in Unix millis). An export
/// containing multiple lists is rejected: this tool operates on one list at
/// a time, and guessing which one was meant would be worse than asking.
///
/// # Errors
///
/// Returns [`ParseError::Json`] for malformed JSON,
/// [`ParseError::MultipleLists`] when the file holds more than one list,
/// and [`ParseError::InvalidFormat`] for other unrecognized shapes.
pub fn parse_list_json(json: &str) -> Result<PackingList, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if value.is_object() {
        return Ok(serde_json::from_value(value)?);
    }

    if let Some(entries) = value.as_array() {
        if entries.iter().all(serde_json::Value::is_string) {
            let names: Vec<String> = serde_json::from_value(value)?;
            return Ok(PackingList::from_names(names));
        }

        let lists: Vec<PackingList> = serde_json::from_value(value)?;
        return match lists.len() {
            1 => Ok(lists.into_iter().next().expect("length checked")),
            n => Err(ParseError::MultipleLists(n)),
        };
    }

    Err(ParseError::InvalidFormat(
        "expected a list object, an array of item names, or an array of lists".to_string(),
    ))
}

/// Parse a packing list from a file, sniffing JSON vs. plain text from the
/// first non-whitespace character.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_list_json`].
pub fn parse_list_file(path: &Path) -> Result<PackingList, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_list_str(&content)
}

/// Parse a packing list from a string, sniffing JSON vs. plain text.
///
/// # Errors
///
/// See [`parse_list_json`].
pub fn parse_list_str(content: &str) -> Result<PackingList, ParseError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        parse_list_json(content)
    } else {
        Ok(parse_list_text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_lines() {
        let list = parse_list_text("sunscreen\n  flip flops  \n\npassport\n");
        assert_eq!(list.item_names(), vec!["sunscreen", "flip flops", "passport"]);
        assert_eq!(list.packed_count(), 0);
    }

    #[test]
    fn test_parse_string_array() {
        let list = parse_list_json(r#"["sunscreen", "passport"]"#).unwrap();
        assert_eq!(list.item_names(), vec!["sunscreen", "passport"]);
        assert!(list.title.is_none());
    }

    #[test]
    fn test_parse_exported_list_object() {
        let json = r#"{
            "id": "k3j2h1",
            "title": "Photo List 6/1/2024",
            "items": [
                {"id": "a", "name": "sunscreen", "packed": true},
                {"id": "b", "name": "towel", "packed": false}
            ],
            "icon": "camera-outline",
            "createdAt": 1717200000000
        }"#;
        let list = parse_list_json(json).unwrap();
        assert_eq!(list.title.as_deref(), Some("Photo List 6/1/2024"));
        assert_eq!(list.packed_count(), 1);
        assert!(list.created_at_utc().is_some());
    }

    #[test]
    fn test_single_element_list_array() {
        let json = r#"[{"title": "Trip", "items": [{"name": "towel"}]}]"#;
        let list = parse_list_json(json).unwrap();
        assert_eq!(list.title.as_deref(), Some("Trip"));
    }

    #[test]
    fn test_multiple_lists_rejected() {
        let json = r#"[
            {"title": "Trip A", "items": []},
            {"title": "Trip B", "items": []}
        ]"#;
        assert!(matches!(
            parse_list_json(json),
            Err(ParseError::MultipleLists(2))
        ));
    }

    #[test]
    fn test_sniffing_text_vs_json() {
        let as_text = parse_list_str("sunscreen\npassport").unwrap();
        assert_eq!(as_text.items.len(), 2);

        let as_json = parse_list_str(r#"["sunscreen"]"#).unwrap();
        assert_eq!(as_json.items.len(), 1);
    }

    #[test]
    fn test_scalar_json_rejected() {
        assert!(matches!(
            parse_list_json("42"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
