//! # Emsys - Employee Management System
//!
//! An interactive command-line utility for keeping employee records in a
//! local SQLite database.
//!
//! ## Features
//!
//! - **Record Management**: Add, view, update and delete employees
//! - **Filtering**: By exact department or inclusive salary range
//! - **Aggregation**: Average salary per department
//! - **Sequential IDs**: New employees get the highest issued ID plus one
//!
//! ## Usage
//!
//! ```rust,no_run
//! use emsys::commands::App;
//! use emsys::libs::config::Config;
//! use emsys::libs::prompt::DialoguerPrompter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let app = App::open(Config::read()?)?;
//!     app.run(&mut DialoguerPrompter::new())
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
