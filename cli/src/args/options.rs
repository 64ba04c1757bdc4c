use clap::Parser;
use std::path::PathBuf;

use rusty_ytmux::constants::{DEFAULT_DL_CHUNK_SIZE, DEFAULT_FFMPEG_BINARY};
use rusty_ytmux::MuxOptions;

#[derive(Parser)]
pub struct MuxArgs {
    /// The ffmpeg binary used to merge high resolution video and audio
    #[clap(long = "ffmpeg", default_value = DEFAULT_FFMPEG_BINARY)]
    pub ffmpeg: PathBuf,

    /// Replace an existing merged file instead of failing
    #[clap(long)]
    pub overwrite: bool,

    /// Maximum bytes requested per chunk
    #[clap(long, default_value_t = DEFAULT_DL_CHUNK_SIZE)]
    pub chunk_size: u64,
}

impl From<&MuxArgs> for MuxOptions {
    fn from(value: &MuxArgs) -> Self {
        MuxOptions {
            ffmpeg_path: value.ffmpeg.clone(),
            overwrite: value.overwrite,
            dl_chunk_size: value.chunk_size,
        }
    }
}
