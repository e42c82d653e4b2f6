//! Terminal rendering for todo rows and command messages.
//!
//! A row shows a checkbox, the id to pass to `toggle`/`delete`, and the text.
//! Checked todos are struck through and dimmed. Long text is cut to fit the
//! line, measured in display columns.

use colored::Colorize;
use todolist::api::{CmdMessage, MessageLevel};
use todolist::model::TodoRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const EMPTY_LIST: &str = "No todos yet.";

pub fn render_todo_list(todos: &[TodoRecord]) -> String {
    if todos.is_empty() {
        return format!("{}\n", EMPTY_LIST.dimmed());
    }

    let id_width = todos
        .iter()
        .map(|t| t.id.to_string().width())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for todo in todos {
        out.push_str(&render_row(todo, id_width));
        out.push('\n');
    }
    out
}

fn render_row(todo: &TodoRecord, id_width: usize) -> String {
    let checkbox = if todo.is_checked { "[x]" } else { "[ ]" };
    let index = format!("{:>width$}.", todo.id, width = id_width);
    let fixed_width = checkbox.width() + 1 + index.width() + 1;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let text = truncate_to_width(&todo.text, available);

    if todo.is_checked {
        format!(
            "{} {} {}",
            checkbox.green(),
            index.dimmed(),
            text.strikethrough().dimmed()
        )
    } else {
        format!("{} {} {}", checkbox, index.yellow(), text)
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, id: u64, is_checked: bool) -> TodoRecord {
        TodoRecord {
            text: text.to_string(),
            id,
            is_checked,
        }
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert!(render_todo_list(&[]).contains(EMPTY_LIST));
    }

    #[test]
    fn rows_show_checkbox_id_and_text() {
        let out = render_todo_list(&[record("Buy milk", 1, true), record("Walk dog", 12, false)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[x]"));
        assert!(lines[0].contains("Buy milk"));
        assert!(lines[1].contains("[ ]"));
        assert!(lines[1].contains("12."));
        assert!(lines[1].contains("Walk dog"));
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Wide characters take two columns each.
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn messages_keep_their_text() {
        let out = render_messages(&[
            CmdMessage::success("Todo added (1): a"),
            CmdMessage::warning("Enter Valid Text"),
        ]);
        assert!(out.contains("Todo added (1): a"));
        assert!(out.contains("Enter Valid Text"));
        assert_eq!(out.lines().count(), 2);
    }
}
