use crate::commands::CmdResult;
use crate::error::Result;
use crate::todos::TodoStore;

pub fn run(todos: &TodoStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_todos(todos.list().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_in_insertion_order() {
        let mut todos = TodoStore::new();
        todos.add("first").unwrap();
        todos.add("second").unwrap();

        let result = run(&todos).unwrap();
        let texts: Vec<&str> = result.listed_todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
