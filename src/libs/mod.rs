//! Core library modules for the emsys application.
//!
//! - **Records**: the `Employee` shape, partial updates and query filters
//! - **Infrastructure**: configuration, data directory resolution, errors
//! - **Interaction**: prompts, messages, console rendering, money formatting

pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod prompt;
pub mod view;
