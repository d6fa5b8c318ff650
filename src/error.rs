use thiserror::Error;

/// Domain-specific errors for the scheduler.
#[derive(Error, Debug)]
pub enum SchedulerError {
    // Input/parse errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse TOML in '{file}': {message}")]
    TomlParse { file: String, message: String },

    #[error("Duplicate ID found: {id_type} '{id}'")]
    DuplicateId { id_type: String, id: String },

    // Configuration errors (loader)
    #[error("No time slots configured")]
    NoTimeSlots,

    #[error("Expected 35 teaching slots, found {found}")]
    InvalidSlotCount { found: usize },

    #[error("Department '{department_id}' has no semesters matching the active parity")]
    NoMatchingSemesters { department_id: String },

    #[error("No subjects found for department '{department_id}'")]
    NoSubjects { department_id: String },

    #[error("No class sections found for department '{department_id}'")]
    NoClasses { department_id: String },

    #[error("Unknown department '{0}'")]
    UnknownDepartment(String),

    #[error("Unknown semester '{0}'")]
    UnknownSemester(String),

    // Persistence errors
    #[error("Could not acquire write lock for term '{term_label}': {reason}")]
    LockHeld { term_label: String, reason: String },

    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),
}

/// Use anyhow::Result at application boundaries.
pub type Result<T> = anyhow::Result<T>;
