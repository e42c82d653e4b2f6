use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::todos::TodoStore;

/// Toggles every id in `ids`. All ids are checked up front, so an unknown id
/// leaves the store untouched.
pub fn run(todos: &mut TodoStore, ids: &[u64]) -> Result<CmdResult> {
    if let Some(missing) = ids.iter().find(|id| todos.get(**id).is_none()) {
        return Err(TodoError::TodoNotFound(*missing));
    }

    let mut result = CmdResult::default();
    for id in ids {
        let todo = todos.toggle(*id)?;
        let verb = if todo.is_checked { "checked" } else { "unchecked" };
        result.add_message(CmdMessage::success(format!(
            "Todo {} ({}): {}",
            verb, todo.id, todo.text
        )));
        result.affected_todos.push(todo);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> TodoStore {
        let mut todos = TodoStore::new();
        todos.add("a").unwrap();
        todos.add("b").unwrap();
        todos
    }

    #[test]
    fn toggles_each_id() {
        let mut todos = seeded();
        let result = run(&mut todos, &[1, 2]).unwrap();

        assert_eq!(result.affected_todos.len(), 2);
        assert!(todos.list().iter().all(|t| t.is_checked));
        assert_eq!(result.messages[0].content, "Todo checked (1): a");
    }

    #[test]
    fn toggling_twice_unchecks() {
        let mut todos = seeded();
        run(&mut todos, &[1]).unwrap();
        let result = run(&mut todos, &[1]).unwrap();
        assert!(!result.affected_todos[0].is_checked);
        assert_eq!(result.messages[0].content, "Todo unchecked (1): a");
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut todos = seeded();
        let err = run(&mut todos, &[1, 42]).unwrap_err();
        assert!(matches!(err, TodoError::TodoNotFound(42)));
        assert!(!todos.get(1).unwrap().is_checked);
    }
}
