//! Bridges [`TodoStore`](crate::todos::TodoStore) snapshots to a single storage slot.
//!
//! Loading never fails outward: a missing slot and a slot that does not parse
//! both come back as an empty list. The second case is logged at warn level.
//! Saving always overwrites the whole slot. There is no coordination between
//! sessions sharing a slot, so the last save wins.

use crate::error::Result;
use crate::model::TodoRecord;
use crate::store::SlotStore;
use tracing::{debug, warn};

pub const DEFAULT_SLOT_KEY: &str = "todoList";

pub struct PersistenceGateway<S: SlotStore> {
    store: S,
    key: String,
    pretty: bool,
}

impl<S: SlotStore> PersistenceGateway<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_SLOT_KEY.to_string(),
            pretty: false,
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> Vec<TodoRecord> {
        let raw = match self.store.read_slot(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "slot empty, starting with no todos");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read slot, starting with no todos");
                return Vec::new();
            }
        };

        // A stored `null` counts as an unset slot.
        match serde_json::from_str::<Option<Vec<TodoRecord>>>(&raw) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "slot data is corrupt, starting with no todos");
                Vec::new()
            }
        }
    }

    pub fn save(&mut self, records: &[TodoRecord]) -> Result<()> {
        let value = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        self.store.write_slot(&self.key, &value)?;
        debug!(key = %self.key, count = records.len(), "todos saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::memory::InMemoryStore;
    use crate::todos::TodoStore;
    use std::io;

    /// Backend whose reads always fail, as with an unreadable slot file.
    struct UnreadableStore;

    impl SlotStore for UnreadableStore {
        fn read_slot(&self, _key: &str) -> Result<Option<String>> {
            Err(TodoError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            )))
        }

        fn write_slot(&mut self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    fn record(text: &str, id: u64, is_checked: bool) -> TodoRecord {
        TodoRecord {
            text: text.to_string(),
            id,
            is_checked,
        }
    }

    #[test]
    fn absent_slot_loads_empty() {
        let gateway = PersistenceGateway::new(InMemoryStore::new());
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn null_slot_loads_empty() {
        let gateway = PersistenceGateway::new(InMemoryStore::new().with_slot("todoList", "null"));
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn corrupt_slot_loads_empty() {
        let gateway =
            PersistenceGateway::new(InMemoryStore::new().with_slot("todoList", "{not json"));
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn unreadable_slot_loads_empty() {
        let gateway = PersistenceGateway::new(UnreadableStore);
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let gateway = PersistenceGateway::new(
            InMemoryStore::new().with_slot("todoList", r#"{"text":"x"}"#),
        );
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let records = vec![
            record("Buy milk", 1, true),
            record("  ", 3, false),
            record("Walk dog", 4, false),
        ];
        let mut gateway = PersistenceGateway::new(InMemoryStore::new());
        gateway.save(&records).unwrap();
        assert_eq!(gateway.load(), records);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut gateway = PersistenceGateway::new(InMemoryStore::new());
        gateway.save(&[record("old", 1, false)]).unwrap();
        gateway.save(&[]).unwrap();
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn custom_key_and_pretty_output() {
        let mut gateway = PersistenceGateway::new(InMemoryStore::new())
            .with_key("other")
            .with_pretty(true);
        gateway.save(&[record("a", 1, false)]).unwrap();

        let raw = gateway.store().read_slot("other").unwrap().unwrap();
        assert!(raw.contains('\n'));
        assert!(gateway.store().read_slot(DEFAULT_SLOT_KEY).unwrap().is_none());
        assert_eq!(gateway.load(), vec![record("a", 1, false)]);
    }

    #[test]
    fn max_id_in_slot_loads_but_blocks_further_adds() {
        let gateway = PersistenceGateway::new(InMemoryStore::new().with_slot(
            "todoList",
            r#"[{"text":"a","uniqueNo":18446744073709551615,"isChecked":false}]"#,
        ));
        let mut todos = TodoStore::with_records(gateway.load());
        assert_eq!(todos.len(), 1);
        assert!(matches!(todos.add("b"), Err(TodoError::Store(_))));
    }

    #[test]
    fn store_scenario_survives_round_trip() {
        let mut gateway = PersistenceGateway::new(InMemoryStore::new());
        let mut todos = TodoStore::with_records(gateway.load());
        todos.add("Buy milk").unwrap();
        todos.add("Walk dog").unwrap();
        todos.toggle(1).unwrap();
        todos.remove(2).unwrap();
        gateway.save(todos.list()).unwrap();

        assert_eq!(gateway.load(), vec![record("Buy milk", 1, true)]);
    }
}
