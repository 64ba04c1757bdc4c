use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::structs::{MuxError, MuxOptions};

/// Combines a video-only and an audio-only file into one container
pub trait MediaMerger {
    fn merge(&self, video: &Path, audio: &Path, output: &Path) -> Result<(), MuxError>;
}

/// [`MediaMerger`] running an external ffmpeg with stream copy, so nothing is re-encoded
#[derive(Debug, Clone)]
pub struct FFmpegMerger {
    binary: PathBuf,
    overwrite: bool,
}

impl FFmpegMerger {
    pub fn new(binary: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            binary: binary.into(),
            overwrite,
        }
    }

    pub fn from_options(options: &MuxOptions) -> Self {
        Self::new(options.ffmpeg_path.clone(), options.overwrite)
    }

    pub fn args(&self, video: &Path, audio: &Path, output: &Path) -> Vec<String> {
        let overwrite = if self.overwrite { "-y" } else { "-n" };

        vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            overwrite.to_string(),
            "-i".to_string(),
            video.to_string_lossy().into_owned(),
            "-i".to_string(),
            audio.to_string_lossy().into_owned(),
            // first input's video, second input's audio
            "-map".to_string(),
            "0:v:0".to_string(),
            "-map".to_string(),
            "1:a:0".to_string(),
            "-c".to_string(),
            "copy".to_string(),
            output.to_string_lossy().into_owned(),
        ]
    }
}

impl Default for FFmpegMerger {
    fn default() -> Self {
        Self::from_options(&MuxOptions::default())
    }
}

impl MediaMerger for FFmpegMerger {
    fn merge(&self, video: &Path, audio: &Path, output: &Path) -> Result<(), MuxError> {
        let args = self.args(video, audio, output);
        log::trace!("{} {}", self.binary.display(), args.join(" "));

        let result = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|x| MuxError::FFmpeg(x.to_string()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(MuxError::FFmpeg(format!(
                "{} ({})",
                stderr.trim(),
                result.status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_copy_streams_without_overwrite() {
        let merger = FFmpegMerger::default();
        let args = merger.args(
            Path::new("/tmp/video_a.webm"),
            Path::new("/tmp/audio_a.webm"),
            Path::new("/tmp/a.mp4"),
        );

        assert!(args.contains(&"-n".to_string()));
        assert!(!args.contains(&"-y".to_string()));
        assert_eq!(args.last().unwrap(), "/tmp/a.mp4");

        let copy = args.iter().position(|x| x == "-c").unwrap();
        assert_eq!(args[copy + 1], "copy");

        let first_input = args.iter().position(|x| x == "-i").unwrap();
        assert_eq!(args[first_input + 1], "/tmp/video_a.webm");
        assert_eq!(args[first_input + 3], "/tmp/audio_a.webm");
    }

    #[test]
    fn overwrite_flag() {
        let merger = FFmpegMerger::new("ffmpeg", true);
        let args = merger.args(Path::new("v"), Path::new("a"), Path::new("o"));

        assert!(args.contains(&"-y".to_string()));
    }

    #[test]
    fn missing_binary_is_ffmpeg_error() {
        let merger = FFmpegMerger::new("/nonexistent/ffmpeg-binary", false);
        let result = merger.merge(Path::new("v"), Path::new("a"), Path::new("o"));

        assert!(matches!(result, Err(MuxError::FFmpeg(_))));
    }
}
