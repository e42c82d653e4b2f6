//! # CLI Layer
//!
//! This module is **one possible presentation layer** for todolist. It is the
//! only place that touches the terminal.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap derive types in `setup`
//! 2. **Logging**: installs the `tracing` subscriber
//! 3. **API Dispatch**: one handler per subcommand in `commands`
//! 4. **Rendering**: rows and messages in `render`
//! 5. **Sessions**: the interactive loop in `session`
//!
//! One-shot subcommands (`add`, `toggle`, `delete`) are complete sessions of
//! their own: load, change, save. The `session` subcommand keeps the list in
//! memory until the user asks to save.

mod commands;
mod render;
mod session;
mod setup;

pub use commands::run;
