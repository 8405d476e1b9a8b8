use chrono::NaiveDateTime;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Assigned by storage on insert; `None` until then.
    pub id: Option<i64>,
    pub description: String,
    pub due: Option<NaiveDateTime>,
    pub done: bool,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    /// Set exactly while `done` is true.
    pub completed: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(description: &str, due: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        Task {
            id: None,
            description: description.to_string(),
            due,
            done: false,
            created: now,
            updated: now,
            completed: None,
        }
    }

    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.done && self.due.is_some_and(|due| due < now)
    }

    /// Status derived at render time.
    pub fn status(&self, now: NaiveDateTime) -> TaskStatus {
        if self.done {
            TaskStatus::Closed
        } else if self.is_overdue(now) {
            TaskStatus::Overdue
        } else {
            TaskStatus::Open
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Open,
    Overdue,
    Closed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::Open => "Open",
            TaskStatus::Overdue => "Overdue",
            TaskStatus::Closed => "Closed",
        })
    }
}

/// Scope of a List or Count command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Open,
    Closed,
    All,
    /// Open tasks with a due date strictly before the evaluation time.
    Overdue,
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::Open => "Open",
            StatusFilter::Closed => "Closed",
            StatusFilter::All => "All",
            StatusFilter::Overdue => "Overdue",
        })
    }
}

/// A typed value captured for a named command-line option.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Date(NaiveDateTime),
    /// The option was given but carries no usable value, e.g. `--due -`.
    Absent,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            Value::Integer(_) | Value::Date(_) | Value::Absent => None,
        }
    }

    /// The date carried by this value; anything else reads as "no date".
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(date) => Some(*date),
            Value::String(_) | Value::Integer(_) | Value::Absent => None,
        }
    }
}

/// Option names used as keys in [`Values`].
pub const OPT_ID: &str = "id";
pub const OPT_DESCRIPTION: &str = "description";
pub const OPT_DUE: &str = "due";

/// Named option values in the order they were consumed from the command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Values(Vec<(&'static str, Value)>);

impl Values {
    pub fn new() -> Self {
        Values(Vec::new())
    }

    /// Appends `value` under `name`, replacing an earlier entry of the same name in place.
    pub fn insert(&mut self, name: &'static str, value: Value) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn id(&self) -> Option<i64> {
        match self.get(OPT_ID)? {
            Value::Integer(id) => Some(*id),
            Value::String(_) | Value::Date(_) | Value::Absent => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.0.iter().map(|(n, v)| (*n, v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
