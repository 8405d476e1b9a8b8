use crate::db::tasks::{now, Tasks};
use crate::libs::config::Config;
use crate::libs::error::{Result, TodoError};
use crate::libs::formatter::format_date;
use crate::libs::messages::Message;
use crate::libs::task::{Task, Values, OPT_DESCRIPTION, OPT_DUE};
use std::io::Write;

pub fn cmd<W: Write>(tasks: &Tasks, values: &Values, config: &Config, out: &mut W) -> Result<()> {
    let description = values
        .get(OPT_DESCRIPTION)
        .and_then(|value| value.as_str())
        .ok_or(TodoError::MissingValue(OPT_DESCRIPTION))?;
    let due = values.get(OPT_DUE).and_then(|value| value.as_date());

    let task = Task::new(description, due, now());
    tasks.insert(&task)?;

    writeln!(out, "{}", Message::TaskAdded(task.description.clone()))?;
    if let Some(due) = task.due {
        writeln!(out, "{}", Message::TaskDueDate(format_date(&due, &config.date_format)))?;
    }
    Ok(())
}
