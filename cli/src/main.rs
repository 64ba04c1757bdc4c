mod args;
mod progress;

use std::process::exit;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rusty_ytmux::{
    default_save_path, Downloader, FFmpegMerger, MuxOptions, Prompter, Session, SessionEnd,
    YoutubeSource,
};

use crate::args::Cli;

fn main() {
    let cli = Cli::parse();
    cli.log.init_logger();

    match run(&cli) {
        Ok(end) => {
            log::debug!("session ended: {end:?}");
            exit(0);
        }
        Err(err) => {
            print_error(format!("{err:#}"));
            exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<SessionEnd> {
    let options = MuxOptions::from(&cli.options);
    log::debug!("{options}");

    let source = YoutubeSource::new(options.clone()).context("Could not start the downloader")?;
    let merger = FFmpegMerger::from_options(&options);
    let default_path = default_save_path()?;

    let mut session = Session::new(
        Prompter::stdio(),
        Downloader::new(source, merger),
        cli.log.progress_reporter(),
    );

    let end = session.run(default_path)?;

    Ok(end)
}

fn print_error(msg: impl Into<String>) {
    eprintln!("{} {}", "error:".bold().red(), msg.into());
}
