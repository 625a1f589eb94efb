use super::{App, Flow};
use crate::libs::messages::Message;
use crate::libs::prompt::{parse_id, Prompter};
use crate::msg_success;
use anyhow::Result;

pub fn cmd(app: &mut App, prompt: &mut dyn Prompter) -> Result<Flow> {
    let id = parse_id(&prompt.text(&Message::PromptDeleteId.to_string())?)?;

    app.employees.delete(id)?;
    msg_success!(Message::EmployeeDeleted(id));

    Ok(Flow::Continue)
}
