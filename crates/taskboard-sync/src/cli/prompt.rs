/*
[INPUT]:  Destructive-operation prompts from the workspace
[OUTPUT]: Yes/no answers from the terminal
[POS]:    CLI confirmation step
[UPDATE]: When prompt styling or defaults change
*/

use dialoguer::{Confirm as Prompt, theme::ColorfulTheme};
use taskboard_sync::Confirm;
use tracing::warn;

/// Asks on the terminal; defaults to "no".
pub struct TerminalConfirm {
    theme: ColorfulTheme,
}

impl TerminalConfirm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match Prompt::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "confirmation prompt failed; treating as declined");
                false
            }
        }
    }
}
