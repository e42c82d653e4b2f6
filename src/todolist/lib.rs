//! # Todolist Architecture
//!
//! Todolist is a **UI-agnostic todo list library** with a terminal client on top.
//! The core knows nothing about how todos are drawn; a presentation layer renders
//! the list and forwards user intents (add, toggle, delete, save) back into it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders rows, runs the session loop    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's TodoStore and PersistenceGateway      │
//! │  - Normalizes inputs (display keys → ids)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + TodoStore (todos.rs)       │
//! │  - The list, id allocation, validation                      │
//! │  - Returns Rust types, no I/O                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persistence.rs) over Storage (store/)         │
//! │  - One JSON snapshot in one named slot                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Lifecycle
//!
//! A session loads the slot once, then works purely in memory. Saving is always
//! an explicit step, so what is on disk can lag behind what is on screen.
//! Sessions sharing a slot do not coordinate: the last save wins.
//!
//! ## Slot Format
//!
//! ```text
//! [
//!   { "text": "Buy milk", "uniqueNo": 1, "isChecked": true },
//!   ...
//! ]
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`todos`]: The in-memory store and id allocation
//! - [`persistence`]: Loading and saving snapshots
//! - [`store`]: Slot storage abstraction and implementations
//! - [`model`]: The `TodoRecord` type
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod persistence;
pub mod store;
pub mod todos;
