pub mod constants;
pub mod downloader;
pub mod merge;
pub mod progress;
pub mod prompt;
pub mod save_path;
pub mod session;
pub mod source;
pub mod structs;
pub mod utils;

pub use downloader::{
    plan_merge, resolution_tier, select_audio_only, select_standard, select_video_only,
    Downloader,
};
pub use merge::{FFmpegMerger, MediaMerger};
pub use progress::{render_progress, ConsoleProgress, NoProgress, ProgressReporter};
pub use prompt::Prompter;
pub use save_path::{default_save_path, resolve_save_path};
pub use session::{read_url, Session};
pub use source::{StreamSource, YoutubeSource};
pub use structs::{
    DownloadOutcome, MergePlan, MuxError, MuxOptions, ResolutionTier, SessionEnd,
    StreamDescriptor,
};
pub use utils::{get_video_id, is_valid_youtube_url};
