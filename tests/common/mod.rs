#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use rusty_ytmux::{MediaMerger, MuxError, ProgressReporter, StreamDescriptor, StreamSource};

pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

pub fn progressive(itag: u64, resolution: u32, extension: &str) -> StreamDescriptor {
    StreamDescriptor {
        itag,
        resolution: Some(resolution),
        quality_label: Some(format!("{resolution}p")),
        bitrate: Some(96_000),
        file_extension: extension.to_string(),
        filesize: Some(200),
        default_filename: format!("Clip.{extension}"),
        ..Default::default()
    }
}

pub fn video_only(itag: u64, resolution: u32, extension: &str) -> StreamDescriptor {
    StreamDescriptor {
        itag,
        resolution: Some(resolution),
        quality_label: Some(format!("{resolution}p")),
        file_extension: extension.to_string(),
        is_video_only: true,
        filesize: Some(200),
        default_filename: format!("Clip.{extension}"),
        ..Default::default()
    }
}

pub fn audio_only(itag: u64, bitrate: u64, extension: &str) -> StreamDescriptor {
    StreamDescriptor {
        itag,
        bitrate: Some(bitrate),
        file_extension: extension.to_string(),
        is_audio_only: true,
        filesize: Some(100),
        default_filename: format!("Clip.{extension}"),
        ..Default::default()
    }
}

/// Scripted stream list; downloads write a small file and report two chunks
pub struct FakeSource {
    pub streams: Vec<StreamDescriptor>,
    pub listed: RefCell<Vec<String>>,
    pub downloads: RefCell<Vec<(u64, String)>>,
    pub fail_download: bool,
}

impl FakeSource {
    pub fn new(streams: Vec<StreamDescriptor>) -> Self {
        Self {
            streams,
            listed: RefCell::new(vec![]),
            downloads: RefCell::new(vec![]),
            fail_download: false,
        }
    }

    pub fn failing(streams: Vec<StreamDescriptor>) -> Self {
        Self {
            fail_download: true,
            ..Self::new(streams)
        }
    }

    pub fn downloaded_itags(&self) -> Vec<u64> {
        self.downloads.borrow().iter().map(|(itag, _)| *itag).collect()
    }
}

impl StreamSource for FakeSource {
    fn streams(&self, url: &str) -> Result<Vec<StreamDescriptor>, MuxError> {
        self.listed.borrow_mut().push(url.to_string());
        Ok(self.streams.clone())
    }

    fn download(
        &self,
        _url: &str,
        stream: &StreamDescriptor,
        output_dir: &Path,
        filename: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<PathBuf, MuxError> {
        if self.fail_download && !self.downloads.borrow().is_empty() {
            return Err(MuxError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            )));
        }

        self.downloads
            .borrow_mut()
            .push((stream.itag, filename.to_string()));

        let total = stream.filesize.unwrap_or(0);
        let path = output_dir.join(filename);
        fs::write(&path, vec![0_u8; total as usize])?;

        progress.on_progress(total, total / 2);
        progress.on_progress(total, 0);

        Ok(path)
    }
}

/// Records merge calls and writes the output file unless told to fail
#[derive(Default)]
pub struct RecordingMerger {
    pub calls: RefCell<Vec<(PathBuf, PathBuf, PathBuf)>>,
    pub fail: bool,
}

impl RecordingMerger {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl MediaMerger for RecordingMerger {
    fn merge(&self, video: &Path, audio: &Path, output: &Path) -> Result<(), MuxError> {
        self.calls.borrow_mut().push((
            video.to_path_buf(),
            audio.to_path_buf(),
            output.to_path_buf(),
        ));

        if self.fail {
            return Err(MuxError::FFmpeg("codec not supported".to_string()));
        }

        fs::write(output, b"merged")?;
        Ok(())
    }
}

/// Progress calls in order
#[derive(Default)]
pub struct RecordingProgress {
    pub calls: Vec<(u64, u64)>,
}

impl ProgressReporter for RecordingProgress {
    fn on_progress(&mut self, total_size: u64, bytes_remaining: u64) {
        self.calls.push((total_size, bytes_remaining));
    }
}
