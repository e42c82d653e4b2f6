//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every todolist operation, regardless of the UI in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: one [`TodoStore`] loaded through a
//!   [`PersistenceGateway`] when the facade is opened
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (display keys such as `todo3` → integer ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Mutations only change the in-memory store. Nothing reaches storage until
//! [`TodoApi::save`] is called, and [`TodoApi::has_unsaved_changes`] reports
//! whether the two have drifted apart.
//!
//! ## Generic Over SlotStore
//!
//! `TodoApi<S: SlotStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, TodoError};
use crate::persistence::PersistenceGateway;
use crate::store::SlotStore;
use crate::todos::TodoStore;

/// Prefix of the display key the presentation layer shows for each todo.
pub const DISPLAY_KEY_PREFIX: &str = "todo";

pub struct TodoApi<S: SlotStore> {
    todos: TodoStore,
    gateway: PersistenceGateway<S>,
    paths: commands::TodoPaths,
    dirty: bool,
}

impl<S: SlotStore> TodoApi<S> {
    /// Opens a session: loads the slot once and seeds the store from it.
    pub fn open(gateway: PersistenceGateway<S>, paths: commands::TodoPaths) -> Self {
        let todos = TodoStore::with_records(gateway.load());
        Self {
            todos,
            gateway,
            paths,
            dirty: false,
        }
    }

    pub fn add_todo(&mut self, text: String) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.todos, text)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn toggle_todos<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        let result = commands::toggle::run(&mut self.todos, &ids)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn delete_todos<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        let result = commands::delete::run(&mut self.todos, &ids)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn list_todos(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.todos)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        let result = commands::save::run(&mut self.gateway, &self.todos)?;
        self.dirty = false;
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn todos(&self) -> &TodoStore {
        &self.todos
    }

    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }
}

/// Accepts `3` or the display key `todo3`.
pub fn parse_id(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix(DISPLAY_KEY_PREFIX).unwrap_or(trimmed);
    digits
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| TodoError::Api(format!("Invalid todo id: {}", input)))
}

fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<u64>> {
    if inputs.is_empty() {
        return Err(TodoError::Api("No todo ids given".to_string()));
    }
    inputs.iter().map(|s| parse_id(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, TodoPaths};
