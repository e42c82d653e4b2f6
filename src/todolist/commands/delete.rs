use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::todos::TodoStore;

pub fn run(todos: &mut TodoStore, ids: &[u64]) -> Result<CmdResult> {
    if let Some(missing) = ids.iter().find(|id| todos.get(**id).is_none()) {
        return Err(TodoError::TodoNotFound(*missing));
    }

    let mut result = CmdResult::default();
    for id in ids {
        // Repeated ids in one call are only removed once.
        if todos.get(*id).is_none() {
            continue;
        }
        let todo = todos.remove(*id)?;
        result.add_message(CmdMessage::success(format!(
            "Todo deleted ({}): {}",
            todo.id, todo.text
        )));
        result.affected_todos.push(todo);
    }

    Ok(result)
}
