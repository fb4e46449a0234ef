#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),  // title
    TaskUpdated(String),  // title
    TaskDeleted(String),  // title
    TaskCompleted(String), // title
    TaskReopened(String), // title
    TaskNotFoundWithId(u64),
    NoTasksFound,
    NoTasksMatchFilters,
    NoPendingTasks,
    NoCompletedTasks,
    NoChangesDetected,
    ConfirmDeleteTask(String), // title
    EditingTask(String),       // title
    TasksHeader(usize, usize), // shown, total
    TaskDetailsHeader,
    TaskIdCreated(u64),

    // === VALIDATION MESSAGES ===
    InvalidInput(String), // reason

    // === STORE MESSAGES ===
    StoreUnreadable(String, String),  // path, error
    StoreRecordSkipped(usize, String), // record number, error
    StoreDuplicateId(u64),
    StoreIdReassigned(u64, u64), // old id, new id
    StoreSaveFailed(String), // error
    StoreLocation(String),   // path
    TasksSaved(usize),

    // === STATISTICS MESSAGES ===
    StatisticsHeader,
    OverviewHeader,
    CategoryBreakdownHeader,
    PriorityBreakdownHeader,
    OverdueTasksHeader,
    NoOverdueTasks,
    StatisticsSummary {
        total: usize,
        completed: usize,
        pending: usize,
        overdue: usize,
    },

    // === REMINDER MESSAGES ===
    ReminderOverdue(String),     // title
    ReminderDueToday(String),    // title
    ReminderDueTomorrow(String), // title
    ReminderDueSoon(String, i64), // title, days left
    ReminderDetails(String, String), // priority, due date
    NoReminders,

    // === EXPORT / IMPORT MESSAGES ===
    ExportingData(String),         // format
    ExportCompleted(String, usize), // path, count
    NothingToExport,
    ExportFailed(String),         // error
    ImportCompleted(usize, usize), // imported, skipped
    ImportRowSkipped(usize, String), // line, reason
    ImportFailed(String),         // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStorage,
    ConfigModuleCategories,
    ConfigModuleAutosave,
    ConfigModuleReminders,

    // === SESSION / SCHEDULER MESSAGES ===
    SessionStarted(String), // store path
    SessionEnded(usize),    // saved task count
    SchedulerStarted {
        autosave_secs: u64,
        reminder_secs: Option<u64>,
    },
    SchedulerStopped,
    AutosaveFailed(String), // error
    SchedulerTaskFailed(String), // error

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptSelectTask,
    PromptSelectAction,
    PromptSelectModules,
    PromptSearch,
    PromptFilterCategory,
    PromptFilterPriority,
    PromptFilterStatus,
    PromptExportFormat,
    PromptImportPath,
    PromptDataFile,
    PromptCategories,
    PromptAutosaveInterval,
    PromptRemindersEnabled,
    PromptReminderInterval,
    PromptDueSoonDays,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
