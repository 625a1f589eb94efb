use super::{App, Flow};
use crate::libs::messages::Message;
use crate::libs::prompt::{parse_amount, Prompter};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;

/// Sub-menu: filter by exact department (1) or inclusive salary range (2).
pub fn cmd(app: &mut App, prompt: &mut dyn Prompter) -> Result<Flow> {
    msg_print!(Message::FilterMenuTitle, true);
    msg_print!(Message::FilterByDepartment);
    msg_print!(Message::FilterBySalaryRange);

    let choice = prompt.text(&Message::PromptFilterChoice.to_string())?;
    let employees = match choice.trim() {
        "1" => {
            let department = prompt.text(&Message::PromptFilterDepartment.to_string())?;
            app.employees.filter_by_department(&department)?
        }
        "2" => {
            let min = parse_amount("minimum salary", &prompt.text(&Message::PromptMinSalary.to_string())?)?;
            let max = parse_amount("maximum salary", &prompt.text(&Message::PromptMaxSalary.to_string())?)?;
            app.employees.filter_by_salary_range(min, max)?
        }
        other => {
            msg_error!(Message::InvalidFilterChoice(other.to_string()));
            return Ok(Flow::Continue);
        }
    };

    if employees.is_empty() {
        msg_info!(Message::NoEmployeesMatching);
    } else {
        msg_print!(Message::FilteredEmployeesHeader, true);
        View::employees(&employees, &app.config.currency_symbol);
    }

    Ok(Flow::Continue)
}
