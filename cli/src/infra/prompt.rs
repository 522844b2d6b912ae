//! Infrastructure implementation of the `UserPrompt` port.

use anyhow::Result;

use crate::application::ports::UserPrompt;

/// Terminal confirmation via `dialoguer`.
///
/// `--yes` answers every question with yes. Without it, a non-interactive
/// session (`CI` / `COMINTY_YES` set, or no TTY) falls back to the default.
pub struct DialoguerPrompt {
    assume_yes: bool,
    non_interactive: bool,
}

impl DialoguerPrompt {
    #[must_use]
    pub fn new(assume_yes: bool, non_interactive: bool) -> Self {
        Self {
            assume_yes,
            non_interactive,
        }
    }
}

impl UserPrompt for DialoguerPrompt {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        if self.non_interactive || !console::Term::stderr().is_term() {
            tracing::debug!(prompt, default, "non-interactive, using default answer");
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
