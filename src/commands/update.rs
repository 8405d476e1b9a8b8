use crate::db::tasks::{now, Tasks};
use crate::libs::error::{Result, TodoError};
use crate::libs::messages::Message;
use crate::libs::task::{Values, OPT_DESCRIPTION, OPT_DUE, OPT_ID};
use std::io::Write;
use tracing::debug;

/// Applies the options present in `values` to the stored task.
///
/// The fetch and the write are separate statements; a concurrent writer in
/// between is overwritten, and a concurrent delete surfaces as `NotFound`.
pub fn cmd<W: Write>(tasks: &Tasks, values: &Values, out: &mut W) -> Result<()> {
    let id = values.id().ok_or(TodoError::MissingValue(OPT_ID))?;
    let mut task = tasks.get_by_id(id)?;

    let mut changed = Vec::new();
    for (name, value) in values.iter() {
        match name {
            OPT_ID => continue,
            OPT_DESCRIPTION => match value.as_str() {
                Some(description) => task.description = description.to_string(),
                None => continue,
            },
            // A missing or unparseable date clears the due date.
            OPT_DUE => task.due = value.as_date(),
            _ => {
                debug!(name, "option not applicable to update");
                continue;
            }
        }
        changed.push(name.to_string());
    }

    // An update without field changes still touches `updated`.
    task.updated = now();
    tasks.update(&task)?;

    let message = if changed.is_empty() {
        Message::TaskNothingToUpdate(id)
    } else {
        Message::TaskUpdated(changed, id)
    };
    writeln!(out, "{}", message)?;
    Ok(())
}
