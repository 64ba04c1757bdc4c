pub mod youtube;

use std::path::{Path, PathBuf};

use crate::progress::ProgressReporter;
use crate::structs::{MuxError, StreamDescriptor};

pub use youtube::YoutubeSource;

/// Lists and fetches the streams of a video
pub trait StreamSource {
    /// Every stream available for `url`, in the source's own order
    fn streams(&self, url: &str) -> Result<Vec<StreamDescriptor>, MuxError>;

    /// Write `stream` to `output_dir/filename`, reporting every chunk to `progress`.
    /// Returns the written path.
    fn download(
        &self,
        url: &str,
        stream: &StreamDescriptor,
        output_dir: &Path,
        filename: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<PathBuf, MuxError>;
}
