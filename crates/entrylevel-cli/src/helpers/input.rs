//! Interactive confirmation.

use dialoguer::Confirm;

use crate::errors::CliError;
use crate::ui::UiContext;

/// Ask for confirmation before a destructive action.
///
/// `force` skips the prompt. Without a terminal there is nobody to ask, so
/// the action is refused unless forced.
pub fn confirm_action(ui_ctx: &UiContext, prompt: &str, force: bool) -> anyhow::Result<bool> {
    if force {
        return Ok(true);
    }
    if !ui_ctx.is_interactive() {
        return Err(CliError::invalid_input(format!(
            "{} Refusing without a terminal; pass --force to confirm.",
            prompt
        ))
        .into());
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
