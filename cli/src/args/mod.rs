pub mod log;
pub mod options;

use clap::Parser;

use self::{log::LogArgs, options::MuxArgs};

#[derive(Parser)]
#[clap(
    version,
    about = "\n\
    Download YouTube videos interactively. High resolution video and audio streams \
    are fetched separately and merged with ffmpeg.
    ",
    author = "rusty_ytmux developers"
)]
pub struct Cli {
    #[clap(flatten)]
    pub options: MuxArgs,

    #[clap(flatten)]
    pub log: LogArgs,
}
