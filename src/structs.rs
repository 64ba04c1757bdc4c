use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_DL_CHUNK_SIZE, DEFAULT_FFMPEG_BINARY};

/// One downloadable stream as reported by a [`crate::StreamSource`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamDescriptor {
    /// Format itag number
    pub itag: u64,
    /// Vertical resolution, e.g. `1080` for `1080p60`
    pub resolution: Option<u32>,
    pub quality_label: Option<String>,
    /// Audio bitrate, only set for audio-bearing streams
    pub bitrate: Option<u64>,
    /// Container extension without the dot
    pub file_extension: String,
    pub is_video_only: bool,
    pub is_audio_only: bool,
    /// Size in bytes when the source knows it upfront
    pub filesize: Option<u64>,
    pub default_filename: String,
}

impl StreamDescriptor {
    /// Stream carries both audio and video tracks
    pub fn is_progressive(&self) -> bool {
        !self.is_video_only && !self.is_audio_only
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ResolutionTier {
    /// Single progressive file, no merge
    #[display("standard")]
    Standard,
    /// Separate video-only and audio-only files merged afterwards
    #[display("high")]
    High,
}

/// Filenames produced by a high resolution download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub output_filename: String,
    pub video_filename: String,
    pub audio_filename: String,
}

impl MergePlan {
    pub fn output_path(&self, save_path: &Path) -> PathBuf {
        save_path.join(&self.output_filename)
    }

    pub fn video_path(&self, save_path: &Path) -> PathBuf {
        save_path.join(&self.video_filename)
    }

    pub fn audio_path(&self, save_path: &Path) -> PathBuf {
        save_path.join(&self.audio_filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Standard { path: PathBuf },
    Merged { path: PathBuf, plan: MergePlan },
}

impl DownloadOutcome {
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::Standard { path } | DownloadOutcome::Merged { path, .. } => path,
        }
    }
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User typed the exit sentinel at the URL prompt
    Exited,
    /// User declined to download another video
    Finished,
}

/// Downloader options
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display(
    "MuxOptions(ffmpeg: {}, overwrite: {overwrite}, dl_chunk_size: {dl_chunk_size})",
    ffmpeg_path.display()
)]
pub struct MuxOptions {
    /// ffmpeg binary used for merging
    pub ffmpeg_path: PathBuf,
    /// Let ffmpeg replace an existing merged file
    pub overwrite: bool,
    /// Maximum chunk size on per request
    pub dl_chunk_size: u64,
}

impl Default for MuxOptions {
    fn default() -> Self {
        MuxOptions {
            ffmpeg_path: PathBuf::from(DEFAULT_FFMPEG_BINARY),
            overwrite: false,
            dl_chunk_size: DEFAULT_DL_CHUNK_SIZE,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum MuxError {
    /// Error raised by the YouTube library
    #[error(transparent)]
    Video(#[from] rusty_ytdl::VideoError),
    /// Filesystem or console error
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Async runtime could not be started
    #[error("Runtime Error: {0}")]
    Runtime(String),
    /// No stream fits the selection
    #[error("Format not found: {0}")]
    FormatNotFound(String),
    /// FFmpeg command error
    #[error("FFmpeg command error: {0}")]
    FFmpeg(String),
    /// Home directory unknown
    #[error("Home directory could not be determined")]
    HomeDirNotFound,
    /// Console input reached end of file
    #[error("Input closed before an answer was given")]
    InputClosed,
}
