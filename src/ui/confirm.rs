use std::io;
use std::io::{BufRead, Write};

use crate::core::constants::prompt;

/// A source of yes/no answers for the deletion gate.
///
/// The production implementation blocks on the invoking terminal; tests
/// inject a scripted source instead of driving a real stdin.
pub trait ConfirmationSource {
    /// Print `question`, block until one answer line is available, and
    /// report whether it was affirmative.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Blocking stdin/stdout prompt. There is no timeout: an unattended run
/// suspends here until a line (or EOF) arrives.
#[derive(Default, Debug)]
pub struct TerminalPrompt;

impl ConfirmationSource for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            // EOF counts as a decline
            return Ok(false);
        }

        Ok(is_affirmative(&line))
    }
}

/// Whether an answer line counts as "yes".
///
/// The accepted tokens are compared after trimming and lower-casing;
/// anything else, the empty line included, is a decline.
pub fn is_affirmative(answer: &str) -> bool {
    let normalized = answer.trim().to_lowercase();
    prompt::AFFIRMATIVE.contains(&normalized.as_str())
}
