//! Line-based prompts standing in for modal alert/confirm/prompt dialogs.

use std::io::{self, BufRead, Write};

use movie_client::Interaction;
use tracing::warn;

/// Answer that cancels a prompt.
pub const CANCEL: &str = ".";

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Shows `prompt` and reads one line without its line ending. `None` at EOF.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        match self.read_line(prompt) {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "failed to read console input");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Interaction for Console<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(err) = self.say(&format!("! {message}")) {
            warn!(error = %err, message, "failed to show alert");
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.ask(&format!("{message} [y/N] "))
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes" | "Yes" | "YES"))
    }

    /// Empty input accepts `default`; `.` or EOF cancels.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        let question = if default.is_empty() {
            format!("{message} ")
        } else {
            format!("{message} [{default}] ")
        };
        let answer = self.ask(&question)?;
        match answer.trim() {
            CANCEL => None,
            "" => Some(default.to_string()),
            _ => Some(answer),
        }
    }
}
