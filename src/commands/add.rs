use super::{App, Flow};
use crate::libs::messages::Message;
use crate::libs::prompt::{parse_salary, Prompter};
use crate::{msg_print, msg_success};
use anyhow::Result;

pub fn cmd(app: &mut App, prompt: &mut dyn Prompter) -> Result<Flow> {
    msg_print!(Message::EnterEmployeeDetails, true);
    let name = prompt.text(&Message::PromptName.to_string())?;
    let department = prompt.text(&Message::PromptDepartment.to_string())?;
    let salary = parse_salary(&prompt.text(&Message::PromptSalary.to_string())?)?;

    let id = app.employees.add(&name, &department, salary)?;
    msg_success!(Message::EmployeeAdded(id));

    Ok(Flow::Continue)
}
