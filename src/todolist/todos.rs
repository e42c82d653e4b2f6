//! # The Todo Store
//!
//! [`TodoStore`] is the authoritative in-memory list for one session. It owns
//! the records in insertion order and the counter used to hand out ids.
//!
//! ## Id Allocation
//!
//! Ids are sequential. At startup the counter is seeded from the loaded records
//! and every `add` increments it before use, so an empty session hands out `1`
//! first. Ids are never reused within a session, deleted or not.
//!
//! The seed is the number of loaded records, raised to the highest loaded id when
//! that is larger. A snapshot saved after deletions can contain gaps (`[1, 3]`),
//! and seeding from the count alone would hand out `3` a second time.
//!
//! ## Persistence
//!
//! The store never touches storage. Snapshots go through
//! [`crate::persistence::PersistenceGateway`] and only when asked to, so the
//! in-memory list and the stored slot may differ until the next save.

use crate::error::{Result, TodoError};
use crate::model::TodoRecord;
use tracing::debug;

/// Message carried by the validation error raised for empty input.
pub const EMPTY_TEXT_MESSAGE: &str = "Enter Valid Text";

#[derive(Debug, Default, Clone)]
pub struct TodoStore {
    todos: Vec<TodoRecord>,
    counter: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store already seeded with `records`.
    pub fn with_records(records: Vec<TodoRecord>) -> Self {
        let mut store = Self::new();
        store.initialize(records);
        store
    }

    /// Replaces the list with `records` and reseeds the id counter.
    pub fn initialize(&mut self, records: Vec<TodoRecord>) {
        let highest = records.iter().map(|t| t.id).max().unwrap_or(0);
        self.counter = (records.len() as u64).max(highest);
        self.todos = records;
        debug!(count = self.todos.len(), counter = self.counter, "todo store initialized");
    }

    /// Appends a new unchecked record.
    ///
    /// Only the exact empty string is rejected; whitespace is valid text.
    pub fn add(&mut self, text: impl Into<String>) -> Result<TodoRecord> {
        let text = text.into();
        if text.is_empty() {
            return Err(TodoError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
        }

        let id = self
            .counter
            .checked_add(1)
            .ok_or_else(|| TodoError::Store("No todo ids left to allocate".to_string()))?;
        self.counter = id;
        let record = TodoRecord::new(text, id);
        self.todos.push(record.clone());
        debug!(id = record.id, "todo added");
        Ok(record)
    }

    /// Flips the checked flag and returns the updated record.
    pub fn toggle(&mut self, id: u64) -> Result<TodoRecord> {
        let index = self.position(id)?;
        let todo = &mut self.todos[index];
        todo.is_checked = !todo.is_checked;
        Ok(todo.clone())
    }

    /// Removes the record and returns it. Remaining records keep their order.
    pub fn remove(&mut self, id: u64) -> Result<TodoRecord> {
        let index = self.position(id)?;
        Ok(self.todos.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&TodoRecord> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn list(&self) -> &[TodoRecord] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// JSON array of the current records, in store order.
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.todos)?)
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::TodoNotFound(id))
    }
}
