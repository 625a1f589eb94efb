//! Display implementation for emsys application messages.
//!
//! All user-facing text is produced here from the structured `Message`
//! variants, so wording stays consistent between the menu, the handlers and
//! the storage layer's debug output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "Employee Management System".to_string(),
            Message::MenuAddEmployee => "Add Employee".to_string(),
            Message::MenuViewAll => "View All Employees".to_string(),
            Message::MenuViewByCriteria => "View Employees by Criteria".to_string(),
            Message::MenuUpdateEmployee => "Update Employee".to_string(),
            Message::MenuDeleteEmployee => "Delete Employee".to_string(),
            Message::MenuSearchEmployee => "Search Employee".to_string(),
            Message::MenuAverageSalary => "Calculate Average Salary by Department".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::MenuEntry(key, label) => format!("{}. {}", key, label),
            Message::InvalidMenuChoice(choice) => format!("Invalid choice '{}'! Please enter a valid option.", choice),
            Message::Goodbye => "Exiting the system. Goodbye!".to_string(),

            // === FILTER MESSAGES ===
            Message::FilterMenuTitle => "View Employees By:".to_string(),
            Message::FilterByDepartment => "1. Department".to_string(),
            Message::FilterBySalaryRange => "2. Salary Range".to_string(),
            Message::InvalidFilterChoice(choice) => format!("Invalid choice '{}' for filtering option.", choice),
            Message::FilteredEmployeesHeader => "Filtered Employee Details:".to_string(),
            Message::NoEmployeesMatching => "No employees found matching the criteria.".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EnterEmployeeDetails => "Enter employee details:".to_string(),
            Message::EmployeeAdded(id) => format!("Employee added successfully with ID: {}", id),
            Message::EmployeeUpdated(id) => format!("Employee {} details updated successfully!", id),
            Message::EmployeeDeleted(id) => format!("Employee with ID {} deleted successfully!", id),
            Message::EmployeeListHeader => "Employee Details:".to_string(),
            Message::NoEmployeesFound => "No employees found!".to_string(),
            Message::UpdatingEmployee(id) => format!("Updating details for Employee ID: {}", id),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::DetailId => "Employee ID".to_string(),
            Message::DetailName => "Name".to_string(),
            Message::DetailDepartment => "Department".to_string(),
            Message::DetailSalary => "Salary".to_string(),

            // === AVERAGE SALARY MESSAGES ===
            Message::AverageSalary(department, amount) => format!("Average Salary for department {}: {}", department, amount),
            Message::NoEmployeesInDepartment(department) => format!("No employees found in the department {}.", department),

            // === PROMPTS ===
            Message::PromptMenuChoice => "Enter your choice (1-8)".to_string(),
            Message::PromptName => "Enter Name".to_string(),
            Message::PromptDepartment => "Enter Department".to_string(),
            Message::PromptSalary => "Enter Salary".to_string(),
            Message::PromptFilterChoice => "Enter 1 or 2 to filter".to_string(),
            Message::PromptFilterDepartment => "Enter department to filter by".to_string(),
            Message::PromptMinSalary => "Enter minimum salary".to_string(),
            Message::PromptMaxSalary => "Enter maximum salary".to_string(),
            Message::PromptUpdateId => "Enter the Employee ID to update".to_string(),
            Message::PromptDeleteId => "Enter the Employee ID to delete".to_string(),
            Message::PromptSearchId => "Enter Employee ID to search".to_string(),
            Message::PromptAverageDepartment => "Enter department to calculate average salary".to_string(),
            Message::PromptNewName(current) => format!("Enter new name (Current: {})", current),
            Message::PromptNewDepartment(current) => format!("Enter new department (Current: {})", current),
            Message::PromptNewSalary(current) => format!("Enter new salary (Current: {})", current),

            // === STORAGE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened employee database at {}", path),
            Message::DatabaseClosed => "Employee database closed".to_string(),
            Message::SchemaEnsured => "Employees table is ready".to_string(),
            Message::NextIdResolved(id) => format!("Next employee ID will be {}", id),
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::InputClosed(error) => format!("Input stream closed: {}", error),

            // === TABLE HEADERS ===
            Message::ColumnId => "ID".to_string(),
            Message::ColumnName => "NAME".to_string(),
            Message::ColumnDepartment => "DEPARTMENT".to_string(),
            Message::ColumnSalary => "SALARY".to_string(),
        };
        write!(f, "{}", text)
    }
}
