use crate::db::tasks::{now, Tasks};
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::formatter::format_date;
use crate::libs::messages::Message;
use crate::libs::task::{StatusFilter, Task};
use chrono::NaiveDateTime;
use std::io::Write;

/// Prints the header, one line per matching task, and the `End.` sentinel.
pub fn cmd<W: Write>(tasks: &Tasks, filter: StatusFilter, config: &Config, out: &mut W) -> Result<()> {
    let now = now();
    let count = tasks.count_at(filter, now)?;
    let list = tasks.fetch_at(filter, now)?;

    writeln!(out, "{}", Message::TasksHeader(filter, count))?;
    for task in &list {
        writeln!(out, "\t{}", format_task_line(task, now, &config.date_format))?;
    }
    writeln!(out, "{}", Message::TasksEnd)?;
    Ok(())
}

/// Prints the bare count with no trailing newline.
pub fn count<W: Write>(tasks: &Tasks, filter: StatusFilter, out: &mut W) -> Result<()> {
    let count = tasks.count(filter)?;
    write!(out, "{}", count)?;
    Ok(())
}

pub fn format_task_line(task: &Task, now: NaiveDateTime, date_format: &str) -> String {
    let line = format!("{} {}: {}", task.status(now), task.id.unwrap_or_default(), task.description);
    if task.done {
        match task.completed {
            Some(completed) => format!("{}, completed: {}", line, format_date(&completed, date_format)),
            None => line,
        }
    } else {
        match task.due {
            Some(due) => format!("{}, due date: {}", line, format_date(&due, date_format)),
            None => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::formatter::DEFAULT_DATE_FORMAT;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn stored(description: &str, due: Option<NaiveDateTime>) -> Task {
        Task {
            id: Some(4),
            ..Task::new(description, due, at(2024, 8, 1))
        }
    }

    #[test]
    fn test_open_task_without_due_date() {
        let line = format_task_line(&stored("Read book", None), at(2024, 8, 10), DEFAULT_DATE_FORMAT);
        assert_eq!(line, "Open 4: Read book");
    }

    #[test]
    fn test_open_and_overdue_tasks_show_due_date() {
        let task = stored("Pay rent", Some(at(2024, 8, 13)));
        assert_eq!(format_task_line(&task, at(2024, 8, 10), DEFAULT_DATE_FORMAT), "Open 4: Pay rent, due date: 2024-08-13");
        assert_eq!(
            format_task_line(&task, at(2024, 8, 14), DEFAULT_DATE_FORMAT),
            "Overdue 4: Pay rent, due date: 2024-08-13"
        );
    }

    #[test]
    fn test_closed_task_shows_completion_date() {
        let mut task = stored("Pay rent", Some(at(2024, 8, 13)));
        task.done = true;
        task.completed = Some(at(2024, 8, 12));
        let line = format_task_line(&task, at(2024, 8, 20), "%d.%m.%Y");
        assert_eq!(line, "Closed 4: Pay rent, completed: 12.08.2024");
    }
}
