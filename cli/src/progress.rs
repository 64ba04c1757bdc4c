use indicatif::{ProgressBar, ProgressStyle};
use rusty_ytmux::ProgressReporter;

/// indicatif bar, started fresh for every stream
pub struct IndicatifProgress {
    style: ProgressStyle,
    bar: Option<ProgressBar>,
}

impl IndicatifProgress {
    pub fn new(style: ProgressStyle) -> Self {
        Self { style, bar: None }
    }

    fn bar_for(&mut self, total_size: u64) -> &ProgressBar {
        let stale = match &self.bar {
            Some(bar) => bar.is_finished() || bar.length() != Some(total_size),
            None => true,
        };

        if stale {
            let bar = ProgressBar::new(total_size);
            bar.set_style(self.style.clone());
            self.bar = Some(bar);
        }

        self.bar.get_or_insert_with(|| ProgressBar::new(total_size))
    }
}

impl ProgressReporter for IndicatifProgress {
    fn on_progress(&mut self, total_size: u64, bytes_remaining: u64) {
        let bar = self.bar_for(total_size);
        bar.set_position(total_size.saturating_sub(bytes_remaining));

        if bytes_remaining == 0 {
            bar.finish();
        }
    }
}
