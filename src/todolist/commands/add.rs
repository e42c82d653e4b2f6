use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::todos::TodoStore;

pub fn run(todos: &mut TodoStore, text: String) -> Result<CmdResult> {
    let todo = todos.add(text)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Todo added ({}): {}",
        todo.id, todo.text
    )));
    Ok(result.with_affected_todos(vec![todo]))
}
