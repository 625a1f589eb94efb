use super::{App, Flow};
use crate::libs::employee::EmployeeUpdate;
use crate::libs::error::EmsError;
use crate::libs::formatter::format_currency;
use crate::libs::messages::Message;
use crate::libs::prompt::{parse_id, parse_salary, Prompter};
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;

/// Prompts for each field showing the current value. Empty input keeps it.
pub fn cmd(app: &mut App, prompt: &mut dyn Prompter) -> Result<Flow> {
    let id = parse_id(&prompt.text(&Message::PromptUpdateId.to_string())?)?;
    let current = app.employees.get(id)?.ok_or(EmsError::NotFound(id))?;

    msg_print!(Message::UpdatingEmployee(id));
    let name = prompt.optional_text(&Message::PromptNewName(current.name.clone()).to_string())?;
    let department = prompt.optional_text(&Message::PromptNewDepartment(current.department.clone()).to_string())?;
    let salary = prompt
        .optional_text(&Message::PromptNewSalary(format_currency(current.salary, &app.config.currency_symbol)).to_string())?
        .map(|input| parse_salary(&input))
        .transpose()?;

    let update = EmployeeUpdate { name, department, salary };
    if update.is_empty() {
        msg_warning!(Message::NoChangesDetected);
        return Ok(Flow::Continue);
    }

    app.employees.update(id, &update)?;
    msg_success!(Message::EmployeeUpdated(id));

    Ok(Flow::Continue)
}
