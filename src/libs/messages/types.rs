use crate::libs::task::StatusFilter;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),             // description
    TaskDueDate(String),           // formatted due date
    TaskCompleted(i64),            // id
    TaskReopened(i64),             // id
    TaskDeleted(i64),              // id
    TaskUpdated(Vec<String>, i64), // changed fields, id
    TaskNothingToUpdate(i64),      // id
    TasksHeader(StatusFilter, i64),
    TasksEnd,

    // === APPLICATION MESSAGES ===
    Version(String),
    Usage,
    InvalidArguments,
    FatalError(String),
}
