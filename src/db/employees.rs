//! Storage gateway for employee records.
//!
//! All reads and writes of the `employees` table go through [`Employees`].
//! The gateway also owns the id policy: new records receive the highest
//! issued id plus one. The next id is read from the table once, when the
//! gateway is opened, and afterwards advanced in memory after every
//! successful insert. External writers to the same file are not supported.
//!
//! ## Usage
//!
//! ```rust
//! use emsys::db::employees::Employees;
//! use emsys::libs::employee::{EmployeeFilter, EmployeeUpdate};
//!
//! let mut employees = Employees::open_in_memory()?;
//! let id = employees.add("Alice", "Eng", 90000.0)?;
//! employees.update(id, &EmployeeUpdate::salary(95000.0))?;
//! let engineers = employees.fetch(EmployeeFilter::ByDepartment("Eng".to_string()))?;
//! assert_eq!(engineers.len(), 1);
//! employees.close()?;
//! # Ok::<(), emsys::libs::error::EmsError>(())
//! ```

use super::db::Db;
use crate::libs::employee::{Employee, EmployeeFilter, EmployeeUpdate};
use crate::libs::error::{EmsError, EmsResult};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};
use std::path::Path;

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    emp_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    department TEXT NOT NULL,
    salary REAL NOT NULL
)";
const SELECT_MAX_ID: &str = "SELECT MAX(emp_id) FROM employees";
const INSERT_EMPLOYEE: &str = "INSERT INTO employees (emp_id, name, department, salary) VALUES (?1, ?2, ?3, ?4)";
const SELECT_EMPLOYEES: &str = "SELECT emp_id, name, department, salary FROM employees";
const WHERE_ID: &str = "WHERE emp_id = ?1";
const WHERE_DEPARTMENT: &str = "WHERE department = ?1";
const WHERE_SALARY_BETWEEN: &str = "WHERE salary BETWEEN ?1 AND ?2";
// COALESCE keeps the stored value for every NULL parameter
const UPDATE_EMPLOYEE: &str = "UPDATE employees SET
    name = COALESCE(?2, name),
    department = COALESCE(?3, department),
    salary = COALESCE(?4, salary)
    WHERE emp_id = ?1";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE emp_id = ?1";
const SELECT_AVG_SALARY: &str = "SELECT AVG(salary) FROM employees WHERE department = ?1";

pub struct Employees {
    conn: Connection,
    next_id: i64,
}

impl Employees {
    /// Opens (or creates) the database file, ensures the table and resolves
    /// the next id.
    pub fn open(path: &Path) -> EmsResult<Self> {
        Self::from_db(Db::open(path)?)
    }

    pub fn open_in_memory() -> EmsResult<Self> {
        Self::from_db(Db::open_in_memory()?)
    }

    fn from_db(db: Db) -> EmsResult<Self> {
        let mut employees = Employees { conn: db.conn, next_id: 1 };
        employees.ensure_schema()?;
        employees.next_id = employees.query_next_id()?;
        msg_debug!(Message::NextIdResolved(employees.next_id));

        Ok(employees)
    }

    /// Creates the `employees` table if it does not exist yet.
    pub fn ensure_schema(&mut self) -> EmsResult<()> {
        self.conn.execute(SCHEMA_EMPLOYEES, [])?;
        msg_debug!(Message::SchemaEnsured);
        Ok(())
    }

    /// Id the next successful [`add`](Self::add) will assign.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    fn query_next_id(&self) -> EmsResult<i64> {
        let max: Option<i64> = self.conn.query_row(SELECT_MAX_ID, [], |row| row.get(0))?;
        Ok(max.map_or(1, |max| max + 1))
    }

    /// Inserts a new record and returns its id.
    pub fn add(&mut self, name: &str, department: &str, salary: f64) -> EmsResult<i64> {
        validate_text("name", name)?;
        validate_text("department", department)?;
        validate_salary(salary)?;

        let id = self.next_id;
        self.conn.execute(INSERT_EMPLOYEE, params![id, name, department, salary])?;
        self.next_id += 1;
        msg_debug!(format!("Inserted employee {} into department '{}'", id, department));

        Ok(id)
    }

    pub fn get(&self, id: i64) -> EmsResult<Option<Employee>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_EMPLOYEES, WHERE_ID), params![id], employee_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn fetch(&self, filter: EmployeeFilter) -> EmsResult<Vec<Employee>> {
        msg_debug!(format!("Fetching employees with filter {:?}", filter));
        match filter {
            EmployeeFilter::All => self.query(SELECT_EMPLOYEES, []),
            EmployeeFilter::ByDepartment(department) => {
                self.query(&format!("{} {}", SELECT_EMPLOYEES, WHERE_DEPARTMENT), params![department])
            }
            EmployeeFilter::BySalaryRange { min, max } => {
                self.query(&format!("{} {}", SELECT_EMPLOYEES, WHERE_SALARY_BETWEEN), params![min, max])
            }
        }
    }

    pub fn list_all(&self) -> EmsResult<Vec<Employee>> {
        self.fetch(EmployeeFilter::All)
    }

    /// Exact, case-sensitive department match.
    pub fn filter_by_department(&self, department: &str) -> EmsResult<Vec<Employee>> {
        self.fetch(EmployeeFilter::ByDepartment(department.to_string()))
    }

    /// Records with `min <= salary <= max`. Empty when `min > max`.
    pub fn filter_by_salary_range(&self, min: f64, max: f64) -> EmsResult<Vec<Employee>> {
        self.fetch(EmployeeFilter::BySalaryRange { min, max })
    }

    /// Applies the supplied fields of `update` and returns the stored record.
    pub fn update(&mut self, id: i64, update: &EmployeeUpdate) -> EmsResult<Employee> {
        if let Some(name) = &update.name {
            validate_text("name", name)?;
        }
        if let Some(department) = &update.department {
            validate_text("department", department)?;
        }
        if let Some(salary) = update.salary {
            validate_salary(salary)?;
        }

        let affected = self
            .conn
            .execute(UPDATE_EMPLOYEE, params![id, update.name, update.department, update.salary])?;
        if affected == 0 {
            return Err(EmsError::NotFound(id));
        }
        msg_debug!(format!("Updated employee {}", id));

        self.get(id)?.ok_or(EmsError::NotFound(id))
    }

    pub fn delete(&mut self, id: i64) -> EmsResult<()> {
        let affected = self.conn.execute(DELETE_EMPLOYEE, params![id])?;
        if affected == 0 {
            return Err(EmsError::NotFound(id));
        }
        msg_debug!(format!("Deleted employee {}", id));
        Ok(())
    }

    /// Mean salary of the department, `None` when it has no employees.
    pub fn average_salary(&self, department: &str) -> EmsResult<Option<f64>> {
        let average: Option<f64> = self.conn.query_row(SELECT_AVG_SALARY, params![department], |row| row.get(0))?;
        Ok(average)
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> EmsResult<()> {
        self.conn.close().map_err(|(_, e)| EmsError::Storage(e))?;
        msg_debug!(Message::DatabaseClosed);
        Ok(())
    }

    fn query<P: Params>(&self, sql: &str, params: P) -> EmsResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(sql)?;
        let employee_iter = stmt.query_map(params, employee_from_row)?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }
}

fn employee_from_row(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        salary: row.get(3)?,
    })
}

fn validate_text(field: &'static str, value: &str) -> EmsResult<()> {
    if value.trim().is_empty() {
        return Err(EmsError::validation(field, value, "must not be empty"));
    }
    Ok(())
}

fn validate_salary(salary: f64) -> EmsResult<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(EmsError::validation("salary", &salary.to_string(), "must be a non-negative number"));
    }
    Ok(())
}
