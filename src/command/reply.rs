//! Result texts handed back to whatever front end is driving the session.

use chrono::NaiveDate;

use crate::task::{Priority, Task};

pub const WELCOME: &str =
    "Guten tag! I'm Einstein, how can I help you today? \n\nHint: If you need help type 'help'!";
pub const FAREWELL: &str = "Bye, hope to see you again soon!";
pub const NO_MATCHES: &str = "No matching tasks found!";
pub const EMPTY_LIST: &str = "Hmmm, didn't find any tasks. Add some tasks!";
pub const NOTHING_ON_DATE: &str = "No tasks found for this date.";

pub const HELP: &str = "\
Here are the commands I understand:
1. todo <description>[, <description>...] - Add one or more todo tasks.
   Example: todo read book, buy milk
2. deadline <description> /by <date> - Add a deadline task.
   Example: deadline return book /by 2/12/2019 1800
3. event <description> /from <start> /to <end> - Add an event task.
   Example: event project meeting /from 2/12/2019 1400 /to 2/12/2019 1600
4. list - List all tasks.
5. list <date> - List tasks occurring on a specific date (format: yyyy-MM-dd).
   Example: list 2019-12-02
6. find <keyword> - List tasks whose description contains the keyword.
   Example: find book
7. mark <task number> - Mark a task as done.
8. unmark <task number> - Mark a task as not done.
9. delete <task number> - Delete a task.
10. tag <task number> <tag> - Add a tag to a task.
    Example: tag 1 urgent
11. untag <task number> <tag> - Remove a tag from a task.
12. priority <task number> <low|medium|high|uber_high> - Set a task's priority.
    Example: priority 1 high
13. help - Display this help message.
14. bye - Exit the program.";

/// Renders `(index, task)` pairs as `1.[T][ ] ...` lines, 1-based.
fn numbered<'a>(entries: impl Iterator<Item = (usize, &'a Task)>) -> String {
    entries
        .map(|(i, task)| format!("{}.{}\n", i + 1, task))
        .collect()
}

pub fn added(task: &Task, count: usize) -> String {
    format!("Got it. I've added this task:\n  {task}\nNow you have {count} tasks in the list.")
}

pub fn removed(task: &Task, remaining: &[Task]) -> String {
    format!(
        "Noted. I've removed this task:\n  {task}\n\n{}",
        task_list(remaining)
    )
}

pub fn task_list(tasks: &[Task]) -> String {
    let mut out = String::from("Here are the tasks in your list:\n\n");
    if tasks.is_empty() {
        out.push_str(EMPTY_LIST);
    } else {
        out.push_str(&numbered(tasks.iter().enumerate()));
    }
    out
}

pub fn tasks_on<'a>(date: NaiveDate, hits: impl Iterator<Item = (usize, &'a Task)>) -> String {
    let body = numbered(hits);
    let mut out = format!(
        "Here are the tasks occurring on {}:\n",
        date.format("%b %d %Y")
    );
    if body.is_empty() {
        out.push_str(NOTHING_ON_DATE);
    } else {
        out.push_str(&body);
    }
    out
}

/// Numbers keep pointing at the full list so they can be fed to `mark`.
pub fn matches<'a>(hits: impl Iterator<Item = (usize, &'a Task)>) -> String {
    let body = numbered(hits);
    if body.is_empty() {
        NO_MATCHES.to_string()
    } else {
        format!("Here are the matching tasks in your list:\n\n{body}")
    }
}

pub fn tag_added(task: &Task, tag: &str) -> String {
    format!("Tag added: {tag} to task {task}")
}

pub fn tag_removed(task: &Task, tag: &str) -> String {
    format!("Tag removed: {tag} from task {task}")
}

pub fn priority_set(task: &Task, priority: Priority) -> String {
    format!("Priority set to {priority} for task: {task}")
}
