//! Interactive menu loop and its command handlers.
//!
//! The menu is a table of [`MenuEntry`] values mapping a key typed by the
//! user to a handler. Every handler receives the [`App`] context and a
//! [`Prompter`], so the same functions serve the console loop and tests
//! that feed scripted input.
//!
//! Errors returned by a handler are printed and the loop keeps running.
//! Only a failing input stream ends it early; in that case, as on a normal
//! exit, the database connection is closed before [`App::run`] returns.

pub mod add;
pub mod average;
pub mod delete;
pub mod filter;
pub mod list;
pub mod search;
pub mod update;

use crate::db::employees::Employees;
use crate::libs::config::Config;
use crate::libs::error::EmsError;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompter;
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;

/// Whether the loop keeps going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub type Handler = fn(&mut App, &mut dyn Prompter) -> Result<Flow>;

pub struct MenuEntry {
    pub key: &'static str,
    pub label: Message,
    pub handler: Handler,
}

pub static MENU: [MenuEntry; 8] = [
    MenuEntry {
        key: "1",
        label: Message::MenuAddEmployee,
        handler: add::cmd,
    },
    MenuEntry {
        key: "2",
        label: Message::MenuViewAll,
        handler: list::cmd,
    },
    MenuEntry {
        key: "3",
        label: Message::MenuViewByCriteria,
        handler: filter::cmd,
    },
    MenuEntry {
        key: "4",
        label: Message::MenuUpdateEmployee,
        handler: update::cmd,
    },
    MenuEntry {
        key: "5",
        label: Message::MenuDeleteEmployee,
        handler: delete::cmd,
    },
    MenuEntry {
        key: "6",
        label: Message::MenuSearchEmployee,
        handler: search::cmd,
    },
    MenuEntry {
        key: "7",
        label: Message::MenuAverageSalary,
        handler: average::cmd,
    },
    MenuEntry {
        key: "8",
        label: Message::MenuExit,
        handler: exit,
    },
];

/// Process-lifetime context shared by all handlers.
pub struct App {
    pub employees: Employees,
    pub config: Config,
}

impl App {
    /// Opens the configured database. Failure here is fatal for the process.
    pub fn open(config: Config) -> Result<Self> {
        let db_path = config.db_path()?;
        let employees = Employees::open(&db_path)?;
        Ok(App { employees, config })
    }

    pub fn new(employees: Employees, config: Config) -> Self {
        App { employees, config }
    }

    /// Runs the menu until the user exits or input fails, then closes the
    /// database.
    pub fn run(mut self, prompt: &mut dyn Prompter) -> Result<()> {
        loop {
            print_menu();

            let outcome = match prompt.text(&Message::PromptMenuChoice.to_string()) {
                Ok(choice) => self.dispatch(&choice, prompt),
                Err(err) => Err(err.into()),
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) => match err.downcast_ref::<EmsError>() {
                    Some(EmsError::Prompt(reason)) => {
                        msg_warning!(Message::InputClosed(reason.clone()));
                        break;
                    }
                    _ => msg_error!(err),
                },
            }
        }

        self.close()
    }

    /// Runs the handler registered for `key`. Unknown keys are reported and
    /// leave the loop running.
    pub fn dispatch(&mut self, key: &str, prompt: &mut dyn Prompter) -> Result<Flow> {
        match MENU.iter().find(|entry| entry.key == key.trim()) {
            Some(entry) => (entry.handler)(self, prompt),
            None => {
                msg_error!(Message::InvalidMenuChoice(key.trim().to_string()));
                Ok(Flow::Continue)
            }
        }
    }

    pub fn close(self) -> Result<()> {
        self.employees.close()?;
        Ok(())
    }
}

fn print_menu() {
    msg_print!(Message::MenuTitle, true);
    for entry in MENU.iter() {
        msg_print!(Message::MenuEntry(entry.key.to_string(), entry.label.to_string()));
    }
}

fn exit(_app: &mut App, _prompt: &mut dyn Prompter) -> Result<Flow> {
    msg_print!(Message::Goodbye);
    Ok(Flow::Exit)
}
