//! Lifecycle transitions addressed by task id: complete, reopen and delete.

use crate::db::tasks::Tasks;
use crate::libs::error::{Result, TodoError};
use crate::libs::messages::Message;
use crate::libs::task::{Values, OPT_ID};
use std::io::Write;

fn task_id(values: &Values) -> Result<i64> {
    values.id().ok_or(TodoError::MissingValue(OPT_ID))
}

pub fn complete<W: Write>(tasks: &Tasks, values: &Values, out: &mut W) -> Result<()> {
    let id = task_id(values)?;
    tasks.complete(id)?;
    writeln!(out, "{}", Message::TaskCompleted(id))?;
    Ok(())
}

pub fn reopen<W: Write>(tasks: &Tasks, values: &Values, out: &mut W) -> Result<()> {
    let id = task_id(values)?;
    tasks.reopen(id)?;
    writeln!(out, "{}", Message::TaskReopened(id))?;
    Ok(())
}

pub fn delete<W: Write>(tasks: &Tasks, values: &Values, out: &mut W) -> Result<()> {
    let id = task_id(values)?;
    tasks.delete(id)?;
    writeln!(out, "{}", Message::TaskDeleted(id))?;
    Ok(())
}
