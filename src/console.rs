//! Operator I/O - prompts, confirmations and the restart countdown.

use std::io::{BufRead, Write};
use std::time::Duration;

/// Interactive collaborator the run talks to. Abstracted so the flow can be
/// driven by scripted answers in tests.
pub trait Console {
    fn say(&mut self, message: &str);

    /// Ask a question and report whether the operator answered "yes".
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Block until the operator presses Enter.
    fn pause(&mut self, prompt: &str);
}

/// Console over stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&mut self, message: &str) {
        println!("{message}");
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt}");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_affirmative(&answer)
    }

    fn pause(&mut self, prompt: &str) {
        print!("{prompt}");
        let _ = std::io::stdout().flush();
        let mut discard = String::new();
        let _ = std::io::stdin().lock().read_line(&mut discard);
    }
}

/// Only the literal word "yes" (any case) proceeds; everything else cancels.
#[must_use]
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

/// Visible countdown before a restart, one line per second.
pub fn countdown(console: &mut dyn Console, seconds: u32) {
    for i in (1..=seconds).rev() {
        console.say(&format!("{i}..."));
        std::thread::sleep(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_is_affirmative() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("  Yes\n"));

        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yes please"));
        assert!(!is_affirmative(""));
    }
}
