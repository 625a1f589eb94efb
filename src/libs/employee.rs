use serde::{Deserialize, Serialize};

/// A single employee's persisted attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(id: i64, name: &str, department: &str, salary: f64) -> Self {
        Employee {
            id,
            name: name.to_string(),
            department: department.to_string(),
            salary,
        }
    }
}

/// Partial update: `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeeUpdate {
    pub fn salary(salary: f64) -> Self {
        EmployeeUpdate {
            salary: Some(salary),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.department.is_none() && self.salary.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum EmployeeFilter {
    All,
    ByDepartment(String),
    /// Inclusive on both ends.
    BySalaryRange { min: f64, max: f64 },
}
