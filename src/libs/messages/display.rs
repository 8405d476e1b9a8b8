//! Text for every [`Message`] variant.
//!
//! Task confirmations keep the exact wording scripts may depend on, e.g.
//! `Task 3 has been completed` and the `End.` list terminator.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

const USAGE: &str = r#"
Usage:
    todo [command] [id] [option] [argument]

Without arguments defaults to listing active tasks.
Frequently used commands have single-letter aliases.
In ADD command, description is required and must be provided first.
In commands that require it, task ID must follow the command.
Values following switches can be provided in any order.


    help | h | --help | -h                      display this help

    version | v | --version | -v                display program version

    add | a [description] [due]                 optional due date in the configured format

    count                                       defaults to active tasks
        --completed | -c
        --overdue | -o
        --all | -a

    list | l                                    defaults to active tasks
        --completed | -c
        --overdue | -o
        --all | -a

    update | u [id]                             update description, due date, or both. invalid date value removes due date
        --desc [description]
        --due [date]

    complete | c [task_id]                      set task completed

    reopen | open [task_id]                     reopen completed task

    delete | del [task_id]                      delete task

Examples:
    todo
    todo a "New task"
    todo add "New task" "2024-08-13"
    todo list --all
    todo l -o
    todo count -c
    todo update 15 --due "2024-08-13"
    todo u 10 --due -
    todo c 12
    todo reopen 3
    todo del 5
"#;

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Added task: {}", description),
            Message::TaskDueDate(date) => format!("Due date: {}", date),
            Message::TaskCompleted(id) => format!("Task {} has been completed", id),
            Message::TaskReopened(id) => format!("Task {} has been reopened", id),
            Message::TaskDeleted(id) => format!("Task {} has been deleted", id),
            Message::TaskUpdated(fields, id) => format!("Updated {} in task {}", fields.join(", "), id),
            Message::TaskNothingToUpdate(id) => format!("Nothing to update in task {}", id),
            Message::TasksHeader(filter, count) => format!("{} tasks: {}", filter, count),
            Message::TasksEnd => "End.".to_string(),

            // === APPLICATION MESSAGES ===
            Message::Version(version) => format!("TODO CLI\tversion: {}", version),
            Message::Usage => USAGE.to_string(),
            Message::InvalidArguments => "Invalid arguments, showing usage".to_string(),
            Message::FatalError(error) => error.clone(),
        };
        write!(f, "{}", text)
    }
}
