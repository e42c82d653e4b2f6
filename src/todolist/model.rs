use serde::{Deserialize, Serialize};

/// One user-entered item.
///
/// Field names on the wire are fixed (`text`, `uniqueNo`, `isChecked`) so that
/// snapshots stay readable by anything else that shares the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub text: String,
    #[serde(rename = "uniqueNo")]
    pub id: u64,
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
}

impl TodoRecord {
    pub fn new(text: String, id: u64) -> Self {
        Self {
            text,
            id,
            is_checked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let record = TodoRecord::new("Buy milk".into(), 1);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"text":"Buy milk","uniqueNo":1,"isChecked":false}"#);
    }

    #[test]
    fn deserializes_checked_state() {
        let record: TodoRecord =
            serde_json::from_str(r#"{"text":"Walk dog","uniqueNo":7,"isChecked":true}"#).unwrap();
        assert_eq!(record.id, 7);
        assert!(record.is_checked);
    }
}
