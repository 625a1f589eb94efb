/// Every user-facing string the application prints, in one place.
///
/// Text lives in the `Display` impl in `display.rs`; callers only pick the
/// variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuAddEmployee,
    MenuViewAll,
    MenuViewByCriteria,
    MenuUpdateEmployee,
    MenuDeleteEmployee,
    MenuSearchEmployee,
    MenuAverageSalary,
    MenuExit,
    MenuEntry(String, String), // key, label
    InvalidMenuChoice(String),
    Goodbye,

    // === FILTER MESSAGES ===
    FilterMenuTitle,
    FilterByDepartment,
    FilterBySalaryRange,
    InvalidFilterChoice(String),
    FilteredEmployeesHeader,
    NoEmployeesMatching,

    // === EMPLOYEE MESSAGES ===
    EnterEmployeeDetails,
    EmployeeAdded(i64),
    EmployeeUpdated(i64),
    EmployeeDeleted(i64),
    EmployeeListHeader,
    NoEmployeesFound,
    UpdatingEmployee(i64),
    NoChangesDetected,
    DetailId,
    DetailName,
    DetailDepartment,
    DetailSalary,

    // === AVERAGE SALARY MESSAGES ===
    AverageSalary(String, String), // department, formatted amount
    NoEmployeesInDepartment(String),

    // === PROMPTS ===
    PromptMenuChoice,
    PromptName,
    PromptDepartment,
    PromptSalary,
    PromptFilterChoice,
    PromptFilterDepartment,
    PromptMinSalary,
    PromptMaxSalary,
    PromptUpdateId,
    PromptDeleteId,
    PromptSearchId,
    PromptAverageDepartment,
    PromptNewName(String),
    PromptNewDepartment(String),
    PromptNewSalary(String),

    // === STORAGE MESSAGES ===
    DatabaseOpened(String),
    DatabaseClosed,
    SchemaEnsured,
    NextIdResolved(i64),
    ConfigLoaded(String),
    InputClosed(String),

    // === TABLE HEADERS ===
    ColumnId,
    ColumnName,
    ColumnDepartment,
    ColumnSalary,
}
