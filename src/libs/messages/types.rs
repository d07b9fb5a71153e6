#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskDeleted(String),
    TasksHeader,
    NoTasksFound,
    NoTasksToDelete,
    InvalidTaskIndex(usize, usize),
    DeleteCancelled,

    // === STORAGE MESSAGES ===
    SkippedLine(usize, String, String), // line number, raw content, reason

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigRemoved,

    // === PROMPTS ===
    PromptDataFile,
    PromptTaskName,
    PromptTaskYear,
    PromptTaskMonth,
    PromptTaskDay,
    PromptTaskHasTime,
    PromptTaskHour,
    PromptTaskMinute,
    PromptSelectTaskToDelete,
    ConfirmDeleteTask,

    // === VALIDATION MESSAGES ===
    TaskNameEmpty,
    InvalidDateArg(String),
    InvalidTimeArg(String),
    InvalidDateEntered,
    InvalidTimeEntered,
}
