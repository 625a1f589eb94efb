//! Database layer for the emsys application.
//!
//! A single SQLite file holds the `employees` table. [`db::Db`] opens the
//! connection and [`employees::Employees`] is the gateway every read and
//! write goes through.
//!
//! ```rust
//! use emsys::db::employees::Employees;
//!
//! let mut employees = Employees::open_in_memory()?;
//! assert_eq!(employees.add("Bob", "Sales", 60000.0)?, 1);
//! assert_eq!(employees.average_salary("Sales")?, Some(60000.0));
//! # Ok::<(), emsys::libs::error::EmsError>(())
//! ```

/// Connection setup for file-backed and in-memory stores.
pub mod db;

/// Employee CRUD, filters, the salary aggregate and the id policy.
pub mod employees;
