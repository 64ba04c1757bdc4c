use std::fmt::Arguments;

use clap::Parser;
use fern::colors::{Color, ColoredLevelConfig};
use fern::FormatCallback;
use indicatif::{ProgressState, ProgressStyle};
use log::{Level, LevelFilter, Record};
use rusty_ytmux::{ConsoleProgress, NoProgress, ProgressReporter};
use serde::{Deserialize, Serialize};

use crate::progress::IndicatifProgress;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStyleArg {
    /// ` ↳ |████------| 40.0%` on a single line
    Bar,
    /// indicatif bar with transfer rate and eta
    Fancy,
    Hidden,
}

impl Default for ProgressStyleArg {
    fn default() -> Self {
        Self::Bar
    }
}

#[derive(Parser)]
pub struct LogArgs {
    /// Sets the log-level of rusty_ytmux [default: Info]
    /// (-v = Error, ..., -vvvvv = Trace)
    /// (other crates have log level Warn)
    #[clap(
        long,
        short,
        action = clap::ArgAction::Count,
        global = true,
    )]
    verbose: u8,

    /// How download progress is drawn
    ///
    /// [possible_values: bar, fancy, hidden]
    #[clap(
        long,
        value_parser = parse_from_str,
        default_value = "bar",
    )]
    progress_style: ProgressStyleArg,

    /// Turn off logging for all crates
    #[clap(long, short, conflicts_with = "verbose")]
    quiet: bool,
}

impl LogArgs {
    pub fn init_logger(&self) {
        if self.quiet {
            return;
        }

        let formatter = self.log_msg_formatter();

        let applied = fern::Dispatch::new()
            .level(log::LevelFilter::Warn)
            .level_for("rusty_ytmux", self.level_filter())
            .format(formatter)
            .chain(std::io::stdout())
            .apply();

        if applied.is_err() {
            eprintln!("The global logger was already initialized");
        }
    }

    pub fn progress_reporter(&self) -> Box<dyn ProgressReporter> {
        match self.progress_style {
            ProgressStyleArg::Bar => Box::new(ConsoleProgress::stdout()),
            ProgressStyleArg::Fancy => Box::new(IndicatifProgress::new(Self::progress_bar_style())),
            ProgressStyleArg::Hidden => Box::new(NoProgress),
        }
    }

    fn progress_bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.blue} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("█░░")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }

    fn log_msg_formatter(&self) -> fn(FormatCallback, &Arguments, &Record) {
        #[inline(always)]
        fn format_msg(
            out: FormatCallback,
            level: impl std::fmt::Display,
            record: &Record,
            msg: &Arguments,
        ) {
            out.finish(format_args!(
                "{:<5} [{}:{}]: {}",
                level,
                record.target(),
                record.line().unwrap_or_default(),
                msg,
            ))
        }

        |out: FormatCallback, message: &Arguments, record: &Record| {
            static COLORS: ColoredLevelConfig = ColoredLevelConfig {
                error: Color::Red,
                warn: Color::Yellow,
                info: Color::Green,
                debug: Color::BrightBlue,
                trace: Color::White,
            };

            // Status lines read as plain console output
            if record.level() == Level::Info && record.target().starts_with("rusty_ytmux") {
                return out.finish(format_args!("{}", message));
            }

            format_msg(out, COLORS.color(record.level()), record, message);
        }
    }

    fn level_filter(&self) -> log::LevelFilter {
        match self.verbose {
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            0 | 3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_from_str(s: &str) -> anyhow::Result<ProgressStyleArg> {
    Ok(serde_json::from_str(&format!("\"{s}\""))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_style_parses_kebab_case() {
        assert_eq!(parse_from_str("bar").unwrap(), ProgressStyleArg::Bar);
        assert_eq!(parse_from_str("fancy").unwrap(), ProgressStyleArg::Fancy);
        assert_eq!(parse_from_str("hidden").unwrap(), ProgressStyleArg::Hidden);
        assert!(parse_from_str("loud").is_err());
    }

    #[test]
    fn verbosity_levels() {
        let args = LogArgs {
            verbose: 4,
            progress_style: ProgressStyleArg::default(),
            quiet: false,
        };

        assert_eq!(args.level_filter(), LevelFilter::Debug);
    }
}
