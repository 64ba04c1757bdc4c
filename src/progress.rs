use std::io::{self, Stdout, Write};

use crate::constants::{PROGRESS_BAR_WIDTH, PROGRESS_EMPTY, PROGRESS_FILLED};

/// Receives byte counts while a stream is transferred
pub trait ProgressReporter {
    /// Called after every chunk with the stream size and the bytes still to come
    fn on_progress(&mut self, total_size: u64, bytes_remaining: u64);
}

/// Share of `total_size` already transferred, in `0.0..=1.0`. A zero sized stream is at `0.0`.
pub fn progress_fraction(total_size: u64, bytes_remaining: u64) -> f64 {
    if total_size == 0 {
        return 0.0;
    }

    let done = total_size.saturating_sub(bytes_remaining);
    done as f64 / total_size as f64
}

/// ` ↳ |█████-----| 50.0%` without line ending
pub fn render_progress(total_size: u64, bytes_remaining: u64) -> String {
    let current = progress_fraction(total_size, bytes_remaining);
    let filled = ((PROGRESS_BAR_WIDTH as f64 * current) as usize).min(PROGRESS_BAR_WIDTH);

    let bar: String = std::iter::repeat(PROGRESS_FILLED)
        .take(filled)
        .chain(std::iter::repeat(PROGRESS_EMPTY).take(PROGRESS_BAR_WIDTH - filled))
        .collect();

    format!(" ↳ |{bar}| {:.1}%", current * 100.0)
}

/// Text bar that keeps overwriting the same terminal line
pub struct ConsoleProgress<W> {
    output: W,
}

impl ConsoleProgress<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<W: Write> ProgressReporter for ConsoleProgress<W> {
    fn on_progress(&mut self, total_size: u64, bytes_remaining: u64) {
        // Rendering failures are ignored
        let _ = write!(
            self.output,
            "{}\r",
            render_progress(total_size, bytes_remaining)
        );
        let _ = self.output.flush();
    }
}

/// Renders nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_progress(&mut self, _total_size: u64, _bytes_remaining: u64) {}
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for Box<P> {
    fn on_progress(&mut self, total_size: u64, bytes_remaining: u64) {
        (**self).on_progress(total_size, bytes_remaining)
    }
}
