use crate::commands::{CmdMessage, CmdResult, TodoPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &TodoPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized todo store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
