//! The interactive session.
//!
//! Mirrors a page lifetime: the list is loaded once when the session opens,
//! every command works on memory, and only `save` writes the slot. Leaving with
//! unsaved changes drops them, after a warning.

use super::render::{render_messages, render_todo_list};
use std::io::{BufRead, Write};
use todolist::api::{CmdMessage, CmdResult, TodoApi};
use todolist::error::{Result, TodoError};
use todolist::store::SlotStore;

const HELP: &str = "\
Commands:
  add <text>       add a todo
  toggle <id>...   check or uncheck todos
  rm <id>...       delete todos
  list             show the list
  save             write the list to storage
  quit             leave the session";

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Add(&'a str),
    Toggle(Vec<&'a str>),
    Delete(Vec<&'a str>),
    List,
    Save,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> SessionCommand<'_> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };

    match verb {
        // Everything after the first space is the text, verbatim.
        "add" | "a" => SessionCommand::Add(rest),
        "toggle" | "check" | "t" => SessionCommand::Toggle(rest.split_whitespace().collect()),
        "rm" | "delete" | "d" => SessionCommand::Delete(rest.split_whitespace().collect()),
        "list" | "ls" => SessionCommand::List,
        "save" | "w" => SessionCommand::Save,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        "" => SessionCommand::Empty,
        other => SessionCommand::Unknown(other),
    }
}

pub fn run_session<S, R, W>(
    api: &mut TodoApi<S>,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()>
where
    S: SlotStore,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", render_todo_list(api.todos().list()))?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let command = parse_line(&line);
        let is_list = matches!(command, SessionCommand::List);
        let outcome = match command {
            SessionCommand::Add(text) => api.add_todo(text.to_string()),
            SessionCommand::Toggle(ids) => api.toggle_todos(ids.as_slice()),
            SessionCommand::Delete(ids) => api.delete_todos(ids.as_slice()),
            SessionCommand::List => api.list_todos(),
            SessionCommand::Save => api.save(),
            SessionCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            SessionCommand::Quit => break,
            SessionCommand::Empty => continue,
            SessionCommand::Unknown(verb) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(format!(
                    "Unknown command: {} (try `help`)",
                    verb
                )));
                Ok(result)
            }
        };

        match outcome {
            Ok(result) => {
                if is_list {
                    write!(out, "{}", render_todo_list(&result.listed_todos))?;
                }
                write!(out, "{}", render_messages(&result.messages))?;
            }
            Err(TodoError::Validation(msg)) => {
                write!(out, "{}", render_messages(&[CmdMessage::warning(msg)]))?;
            }
            Err(e) => {
                write!(out, "{}", render_messages(&[CmdMessage::error(e.to_string())]))?;
            }
        }
    }

    if api.has_unsaved_changes() {
        write!(
            out,
            "{}",
            render_messages(&[CmdMessage::warning(
                "Unsaved changes were discarded. Use `save` before quitting to keep them."
            )])
        )?;
    }

    Ok(())
}
