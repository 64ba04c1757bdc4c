use std::io::{self, BufRead, Stdout, Write};

use crate::structs::MuxError;

/// Blocking console dialogue over any line source and sink.
///
/// Every question loops until it gets an answer it understands. End of input is reported as
/// [`MuxError::InputClosed`] instead of re-prompting forever.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<(), MuxError> {
        writeln!(self.output, "{}", message.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask a yes/no question. Only `y` or `n` (any case, surrounding whitespace ignored) end it.
    pub fn confirm(&mut self, message: impl AsRef<str>) -> Result<bool, MuxError> {
        loop {
            self.say(format!("{} (y/N)", message.as_ref()))?;
            let answer = self.next_line()?;

            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Error: incorrect input value. Please enter y/N")?,
            }
        }
    }

    /// Show `message` and return the next line without its line ending
    pub fn read_line(&mut self, message: impl AsRef<str>) -> Result<String, MuxError> {
        self.say(message)?;
        self.next_line()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn next_line(&mut self) -> Result<String, MuxError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MuxError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
