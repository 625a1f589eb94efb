use super::{App, Flow};
use crate::libs::messages::Message;
use crate::libs::prompt::Prompter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(app: &mut App, _prompt: &mut dyn Prompter) -> Result<Flow> {
    let employees = app.employees.list_all()?;

    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound, true);
    } else {
        msg_print!(Message::EmployeeListHeader, true);
        View::employees(&employees, &app.config.currency_symbol);
    }

    Ok(Flow::Continue)
}
