//! Terminal implementations of the core interaction traits.
//!
//! The confirmation prompt renders as a numbered menu and the dialer
//! handoff prints the `tel:` URL it would hand to a host platform.

use std::io::{self, BufRead, Write};

use log::debug;
use tour_sentinel_core::dialog::{ChoiceStyle, ConfirmationPrompt, ConfirmationProvider, UserChoice};
use tour_sentinel_core::telephony::{DialRequest, Dialer};

/// Print a prompt and read one trimmed line from stdin.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    // strip only the line ending; field values keep their whitespace
    Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

/// Confirmation provider that renders prompts as numbered terminal menus.
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl TerminalConfirmer {
    /// Index of the cancel choice, used when input is unreadable or
    /// out of range so that bad input never confirms an action.
    fn dismiss_index(prompt: &ConfirmationPrompt) -> usize {
        prompt
            .choices
            .iter()
            .position(|c| c.style == ChoiceStyle::Cancel)
            .unwrap_or(prompt.choices.len())
    }
}

impl ConfirmationProvider for TerminalConfirmer {
    fn request(&mut self, prompt: &ConfirmationPrompt) -> UserChoice {
        println!();
        println!("== {} ==", prompt.title);
        println!("{}", prompt.message);
        for (index, choice) in prompt.choices.iter().enumerate() {
            println!("  [{}] {}", index + 1, choice.label);
        }

        let selection = match read_line("> ") {
            Ok(input) => input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .filter(|n| *n < prompt.choices.len()),
            Err(err) => {
                debug!("Prompt input failed: {}", err);
                None
            }
        };

        UserChoice(selection.unwrap_or_else(|| Self::dismiss_index(prompt)))
    }
}

/// Dialer that prints the handoff instead of placing a call.
#[derive(Debug, Default)]
pub struct TerminalDialer;

impl Dialer for TerminalDialer {
    fn open(&mut self, request: &DialRequest) {
        println!("Handing off to platform dialer: {}", request.url());
    }
}
