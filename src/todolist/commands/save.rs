use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::persistence::PersistenceGateway;
use crate::store::SlotStore;
use crate::todos::TodoStore;

pub fn run<S: SlotStore>(
    gateway: &mut PersistenceGateway<S>,
    todos: &TodoStore,
) -> Result<CmdResult> {
    gateway.save(todos.list())?;
    let mut result = CmdResult::default();
    let noun = if todos.len() == 1 { "todo" } else { "todos" };
    result.add_message(CmdMessage::info(format!("Saved {} {}", todos.len(), noun)));
    Ok(result)
}
