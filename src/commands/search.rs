use super::{App, Flow};
use crate::libs::error::EmsError;
use crate::libs::messages::Message;
use crate::libs::prompt::{parse_id, Prompter};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd(app: &mut App, prompt: &mut dyn Prompter) -> Result<Flow> {
    let id = parse_id(&prompt.text(&Message::PromptSearchId.to_string())?)?;
    let employee = app.employees.get(id)?.ok_or(EmsError::NotFound(id))?;

    msg_print!(View::employee_details(&employee, &app.config.currency_symbol), true);

    Ok(Flow::Continue)
}
