use super::{App, Flow};
use crate::libs::formatter::format_currency;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompter;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(app: &mut App, prompt: &mut dyn Prompter) -> Result<Flow> {
    let department = prompt.text(&Message::PromptAverageDepartment.to_string())?;

    match app.employees.average_salary(&department)? {
        Some(average) => {
            let amount = format_currency(average, &app.config.currency_symbol);
            msg_print!(Message::AverageSalary(department, amount), true);
        }
        None => msg_info!(Message::NoEmployeesInDepartment(department)),
    }

    Ok(Flow::Continue)
}
