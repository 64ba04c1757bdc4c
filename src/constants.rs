use once_cell::sync::Lazy;
use regex::Regex;

/// Everything a YouTube video URL may put before the id: watch, short, embed, `/v/`, `/e/`,
/// oEmbed-wrapped and percent-encoded shapes. Matches the whole prefix.
pub(crate) static YOUTUBE_URL_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)(?:.+oembed.+)?(?:m\.|www\.)?(?:(?:youtube(?:-nocookie)?\.com)|(?:youtu\.be))/(?:(?:.*watch%3Fv%3D)|(?:(?:(?:watch\?(?:[a-z]+=[a-z_&]+)?v(?:=|%3D))|(?:(?:e/)|(?:v/)))?|(?:embed/)))$").unwrap()
});

pub(crate) static VIDEO_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_\-]{11}").unwrap());

// The id must not run into another URL...
pub(crate) static TRAILING_URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*http").unwrap());

// ...or into something that looks like a file extension
pub(crate) static EXTENSION_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.a-zA-Z]{3}").unwrap());

pub(crate) static PARSE_INT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*((\-|\+)?[0-9]+)\s*").unwrap());

/// Resolutions that need separate video and audio downloads plus a merge
pub const HIGH_RESOLUTIONS: &[u32] = &[2160, 1080];

/// Container of progressive (audio + video) streams eligible for the standard tier
pub const STANDARD_CONTAINER: &str = "mp4";

/// Extension of the merged output file
pub const MERGED_EXTENSION: &str = "mp4";

pub const VIDEO_FILE_PREFIX: &str = "video_";
pub const AUDIO_FILE_PREFIX: &str = "audio_";

pub const DOWNLOADS_DIR_NAME: &str = "Downloads";

pub const PROGRESS_BAR_WIDTH: usize = 50;
pub const PROGRESS_FILLED: char = '█';
pub const PROGRESS_EMPTY: char = '-';

// 10485760 -> Default is 10MB to avoid Youtube throttle (Bigger than this value can be throttle by Youtube)
pub const DEFAULT_DL_CHUNK_SIZE: u64 = 10485760;

pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";
