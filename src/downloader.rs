use std::fs;
use std::path::Path;

use crate::constants::{
    AUDIO_FILE_PREFIX, HIGH_RESOLUTIONS, MERGED_EXTENSION, STANDARD_CONTAINER, VIDEO_FILE_PREFIX,
};
use crate::merge::MediaMerger;
use crate::progress::ProgressReporter;
use crate::source::StreamSource;
use crate::structs::{DownloadOutcome, MergePlan, MuxError, ResolutionTier, StreamDescriptor};
use crate::utils::replace_extension;

/// High when any stream is at one of [`HIGH_RESOLUTIONS`]
pub fn resolution_tier(streams: &[StreamDescriptor]) -> ResolutionTier {
    let is_high = streams.iter().any(|stream| {
        stream
            .resolution
            .map(|res| HIGH_RESOLUTIONS.contains(&res))
            .unwrap_or(false)
    });

    if is_high {
        ResolutionTier::High
    } else {
        ResolutionTier::Standard
    }
}

// `max_by_key` keeps the last of equal maxima, so ties go to the source's later entry.

/// Highest resolution progressive stream in the standard container
pub fn select_standard(streams: &[StreamDescriptor]) -> Option<&StreamDescriptor> {
    streams
        .iter()
        .filter(|x| x.is_progressive() && x.file_extension == STANDARD_CONTAINER)
        .max_by_key(|x| x.resolution.unwrap_or(0))
}

/// Highest resolution video-only stream
pub fn select_video_only(streams: &[StreamDescriptor]) -> Option<&StreamDescriptor> {
    streams
        .iter()
        .filter(|x| x.is_video_only)
        .max_by_key(|x| x.resolution.unwrap_or(0))
}

/// Highest bitrate audio-only stream
pub fn select_audio_only(streams: &[StreamDescriptor]) -> Option<&StreamDescriptor> {
    streams
        .iter()
        .filter(|x| x.is_audio_only)
        .max_by_key(|x| x.bitrate.unwrap_or(0))
}

/// Intermediate and final filenames for a video/audio pair
pub fn plan_merge(video: &StreamDescriptor, audio: &StreamDescriptor) -> MergePlan {
    MergePlan {
        output_filename: replace_extension(&video.default_filename, MERGED_EXTENSION),
        video_filename: format!("{VIDEO_FILE_PREFIX}{}", video.default_filename),
        audio_filename: format!("{AUDIO_FILE_PREFIX}{}", audio.default_filename),
    }
}

/// Picks streams for a video, downloads them and merges when needed.
///
/// Collaborator errors are returned as they are. Intermediate files are only removed once the
/// merge has succeeded.
pub struct Downloader<S, M> {
    source: S,
    merger: M,
}

impl<S: StreamSource, M: MediaMerger> Downloader<S, M> {
    pub fn new(source: S, merger: M) -> Self {
        Self { source, merger }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn merger(&self) -> &M {
        &self.merger
    }

    pub fn download(
        &self,
        url: &str,
        save_path: &Path,
        progress: &mut dyn ProgressReporter,
    ) -> Result<DownloadOutcome, MuxError> {
        let streams = self.source.streams(url)?;
        let tier = resolution_tier(&streams);

        log::debug!("{} streams, {tier} resolution tier", streams.len());

        match tier {
            ResolutionTier::Standard => self.download_standard(url, save_path, &streams, progress),
            ResolutionTier::High => {
                let plan = self.download_high(url, save_path, &streams, progress)?;
                self.process_download(save_path, plan)
            }
        }
    }

    fn download_standard(
        &self,
        url: &str,
        save_path: &Path,
        streams: &[StreamDescriptor],
        progress: &mut dyn ProgressReporter,
    ) -> Result<DownloadOutcome, MuxError> {
        let stream = select_standard(streams).ok_or_else(|| {
            MuxError::FormatNotFound(format!("no progressive {STANDARD_CONTAINER} stream"))
        })?;

        log::info!("Downloading standard resolution video from '{url}'");
        log::debug!("itag {} ({:?})", stream.itag, stream.quality_label);

        let path =
            self.source
                .download(url, stream, save_path, &stream.default_filename, progress)?;

        log::info!("Download complete!");

        Ok(DownloadOutcome::Standard { path })
    }

    fn download_high(
        &self,
        url: &str,
        save_path: &Path,
        streams: &[StreamDescriptor],
        progress: &mut dyn ProgressReporter,
    ) -> Result<MergePlan, MuxError> {
        log::info!("### Found High Resolution Video ###");

        let video = select_video_only(streams)
            .ok_or_else(|| MuxError::FormatNotFound("no video-only stream".to_string()))?;
        let audio = select_audio_only(streams)
            .ok_or_else(|| MuxError::FormatNotFound("no audio-only stream".to_string()))?;

        let plan = plan_merge(video, audio);

        log::info!("Downloading high resolution video only file from '{url}'");
        log::debug!("video itag {} ({:?})", video.itag, video.quality_label);
        self.source
            .download(url, video, save_path, &plan.video_filename, progress)?;

        log::info!("Downloading high resolution audio only file from '{url}'");
        log::debug!("audio itag {} ({:?} bps)", audio.itag, audio.bitrate);
        self.source
            .download(url, audio, save_path, &plan.audio_filename, progress)?;

        log::info!("Download complete!");

        Ok(plan)
    }

    /// Merge the pair named by `plan`, then remove both inputs
    fn process_download(
        &self,
        save_path: &Path,
        plan: MergePlan,
    ) -> Result<DownloadOutcome, MuxError> {
        let output = plan.output_path(save_path);
        let video = plan.video_path(save_path);
        let audio = plan.audio_path(save_path);

        log::info!(
            "Combining video and audio files into: {}\nThe old files will be removed when finished.",
            output.display()
        );

        self.merger.merge(&video, &audio, &output)?;

        fs::remove_file(&video)?;
        fs::remove_file(&audio)?;

        Ok(DownloadOutcome::Merged { path: output, plan })
    }
}
