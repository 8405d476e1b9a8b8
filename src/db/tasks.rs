use super::db::Db;
use crate::libs::error::{Result, TodoError};
use crate::libs::task::{StatusFilter, Task};
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::debug;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL CHECK(length(description) > 0),
    due TIMESTAMP,
    done BOOLEAN NOT NULL DEFAULT 0,
    created TIMESTAMP NOT NULL,
    updated TIMESTAMP NOT NULL,
    completed TIMESTAMP
);";
const INSERT_TASK: &str = "INSERT INTO tasks (description, due, done, created, updated, completed) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, description, due, done, created, updated, completed FROM tasks";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const UPDATE_TASK: &str = "UPDATE tasks SET description = ?1, due = ?2, done = ?3, updated = ?4, completed = ?5 WHERE id = ?6";
const UPDATE_DONE: &str = "UPDATE tasks SET done = ?1, completed = ?2, updated = ?3 WHERE id = ?4";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_OPEN: &str = "WHERE done = 0";
const WHERE_CLOSED: &str = "WHERE done = 1";
const WHERE_OVERDUE: &str = "WHERE done = 0 AND due IS NOT NULL AND due < ?1";
const ORDER_BY_ID: &str = "ORDER BY id ASC";

/// Task repository over a borrowed storage connection.
///
/// Each call is a single statement; nothing spans a fetch and a later write,
/// so two invocations updating the same task concurrently resolve as
/// last-writer-wins.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    /// Ensures the tasks table exists.
    pub fn new(db: &'a Db) -> Result<Tasks<'a>> {
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Tasks { conn: &db.conn })
    }

    /// Persists `task` and returns the identifier assigned by storage.
    pub fn insert(&self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![task.description, task.due, task.done, task.created, task.updated, task.completed],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "task inserted");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Task> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), [id], row_to_task)
            .optional()?
            .ok_or_else(|| TodoError::not_found("fetch", id))
    }

    /// Writes every mutable field of `task` back to its row.
    ///
    /// A task that was never inserted, or whose row has since been deleted,
    /// yields `NotFound`.
    pub fn update(&self, task: &Task) -> Result<()> {
        let id = task.id.ok_or_else(|| TodoError::not_found("update", 0))?;
        let changed = self.conn.execute(
            UPDATE_TASK,
            params![task.description, task.due, task.done, task.updated, task.completed, id],
        )?;
        if changed == 0 {
            return Err(TodoError::not_found("update", id));
        }
        debug!(id, "task updated");
        Ok(())
    }

    /// Sets the done flag together with its completion stamp.
    pub fn set_done(&self, id: i64, done: bool, completed: Option<NaiveDateTime>) -> Result<()> {
        let operation = if done { "complete" } else { "reopen" };
        let changed = self.conn.execute(UPDATE_DONE, params![done, completed, now(), id])?;
        if changed == 0 {
            return Err(TodoError::not_found(operation, id));
        }
        debug!(id, done, "task state changed");
        Ok(())
    }

    pub fn complete(&self, id: i64) -> Result<()> {
        self.set_done(id, true, Some(now()))
    }

    pub fn reopen(&self, id: i64) -> Result<()> {
        self.set_done(id, false, None)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let changed = self.conn.execute(DELETE_TASK, [id])?;
        if changed == 0 {
            return Err(TodoError::not_found("delete", id));
        }
        debug!(id, "task deleted");
        Ok(())
    }

    pub fn count(&self, filter: StatusFilter) -> Result<i64> {
        self.count_at(filter, now())
    }

    /// Counts tasks matching `filter`, judging overdue against `now`.
    pub fn count_at(&self, filter: StatusFilter, now: NaiveDateTime) -> Result<i64> {
        let (clause, params) = filter_clause(filter, now);
        let count = self.conn.query_row(
            &format!("{} {}", COUNT_TASKS, clause),
            params_from_iter(params.iter()),
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn fetch(&self, filter: StatusFilter) -> Result<Vec<Task>> {
        self.fetch_at(filter, now())
    }

    /// Lists tasks matching `filter` in ascending id order.
    pub fn fetch_at(&self, filter: StatusFilter, now: NaiveDateTime) -> Result<Vec<Task>> {
        let (clause, params) = filter_clause(filter, now);
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, clause, ORDER_BY_ID))?;
        let task_iter = stmt.query_map(params_from_iter(params.iter()), row_to_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn filter_clause(filter: StatusFilter, now: NaiveDateTime) -> (&'static str, Vec<NaiveDateTime>) {
    match filter {
        StatusFilter::Open => (WHERE_OPEN, vec![]),
        StatusFilter::Closed => (WHERE_CLOSED, vec![]),
        StatusFilter::All => ("", vec![]),
        StatusFilter::Overdue => (WHERE_OVERDUE, vec![now]),
    }
}

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: Some(row.get(0)?),
        description: row.get(1)?,
        due: row.get(2)?,
        done: row.get(3)?,
        created: row.get(4)?,
        updated: row.get(5)?,
        completed: row.get(6)?,
    })
}
