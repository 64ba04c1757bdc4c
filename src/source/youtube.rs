use std::cell::RefCell;
use std::cmp::Ordering;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusty_ytdl::stream::{NonLiveStream, NonLiveStreamOptions, Stream};
use rusty_ytdl::{
    DownloadOptions, Video, VideoFormat, VideoOptions, VideoQuality, VideoSearchOptions,
};
use tokio::runtime::{Builder, Runtime};

use super::StreamSource;
use crate::progress::ProgressReporter;
use crate::structs::{MuxError, MuxOptions, StreamDescriptor};
use crate::utils::{default_filename, parse_resolution, video_ref};

/// Formats of the last video listed, reused by the downloads that follow
struct ListedFormats {
    video_id: String,
    formats: Vec<VideoFormat>,
}

/// [`StreamSource`] backed by `rusty_ytdl`.
///
/// The library is async; a private current-thread runtime drives it so callers stay
/// synchronous and single threaded.
pub struct YoutubeSource {
    runtime: Runtime,
    options: MuxOptions,
    listed: RefCell<Option<ListedFormats>>,
}

impl YoutubeSource {
    pub fn new(options: MuxOptions) -> Result<Self, MuxError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| MuxError::Runtime(e.to_string()))?;

        Ok(Self {
            runtime,
            options,
            listed: RefCell::new(None),
        })
    }

    /// Options that pin the library's format choice to a single itag
    fn options_for(&self, itag: u64) -> VideoOptions {
        let filter =
            VideoSearchOptions::Custom(Arc::new(move |format: &VideoFormat| format.itag == itag));

        VideoOptions {
            quality: VideoQuality::Custom(
                filter.clone(),
                Arc::new(|_: &VideoFormat, _: &VideoFormat| Ordering::Equal),
            ),
            filter,
            download_options: DownloadOptions {
                dl_chunk_size: Some(self.options.dl_chunk_size),
            },
            ..Default::default()
        }
    }

    /// Direct link of `itag` from the last listing of `video_id`, if there was one
    fn listed_link(&self, video_id: &str, itag: u64) -> Option<String> {
        let listed = self.listed.borrow();
        let listed = listed.as_ref().filter(|x| x.video_id == video_id)?;

        listed
            .formats
            .iter()
            .find(|format| format.itag == itag)
            .map(|format| format.url.clone())
            .filter(|link| !link.is_empty())
    }

    /// Stream for `stream`, built from the listed link when its size is known.
    /// Otherwise the library resolves the format itself, which fetches the info again.
    fn open_stream(
        &self,
        video_id: &str,
        stream: &StreamDescriptor,
    ) -> Result<Box<dyn Stream + Send + Sync>, MuxError> {
        let listed = self
            .listed_link(video_id, stream.itag)
            .zip(stream.filesize);

        if let Some((link, content_length)) = listed {
            let chunks = NonLiveStream::new(NonLiveStreamOptions {
                client: None,
                link,
                content_length,
                dl_chunk_size: self.options.dl_chunk_size,
                start: 0,
                end: self.options.dl_chunk_size,
            })?;

            return Ok(Box::new(chunks));
        }

        log::debug!("itag {} was not listed, fetching the info again", stream.itag);

        let video = Video::new_with_options(video_id, self.options_for(stream.itag))?;
        Ok(self.runtime.block_on(video.stream())?)
    }
}

impl StreamSource for YoutubeSource {
    fn streams(&self, url: &str) -> Result<Vec<StreamDescriptor>, MuxError> {
        let video = Video::new(video_ref(url))?;
        let info = self.runtime.block_on(video.get_info())?;

        let title = &info.video_details.title;
        let video_id = &info.video_details.video_id;

        let streams: Vec<StreamDescriptor> = info
            .formats
            .iter()
            .filter(|format| !format.is_hls && !format.is_dash_mpd)
            .filter(|format| format.has_video || format.has_audio)
            .map(|format| describe_format(format, title, video_id))
            .collect();

        log::debug!("{} streams available for {video_id}", streams.len());

        *self.listed.borrow_mut() = Some(ListedFormats {
            video_id: video.get_video_id(),
            formats: info.formats,
        });

        Ok(streams)
    }

    fn download(
        &self,
        url: &str,
        stream: &StreamDescriptor,
        output_dir: &Path,
        filename: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<PathBuf, MuxError> {
        let chunks = self.open_stream(&video_ref(url), stream)?;

        let path = output_dir.join(filename);
        let mut file = File::create(&path)?;

        log::debug!("itag {} -> {}", stream.itag, path.display());

        self.runtime.block_on(async {
            let total = stream
                .filesize
                .unwrap_or(chunks.content_length() as u64);

            let mut downloaded = 0_u64;
            while let Some(chunk) = chunks.chunk().await? {
                file.write_all(&chunk)?;

                downloaded += chunk.len() as u64;
                progress.on_progress(total, total.saturating_sub(downloaded));
            }

            Ok::<(), MuxError>(())
        })?;

        file.flush()?;

        Ok(path)
    }
}

fn describe_format(format: &VideoFormat, title: &str, video_id: &str) -> StreamDescriptor {
    let resolution = format
        .quality_label
        .as_deref()
        .and_then(parse_resolution)
        .or(format.height.map(|height| height as u32));

    let file_extension = format.mime_type.container.clone();

    StreamDescriptor {
        itag: format.itag,
        resolution: if format.has_video { resolution } else { None },
        quality_label: format.quality_label.clone(),
        bitrate: format
            .has_audio
            .then(|| format.average_bitrate.unwrap_or(format.bitrate)),
        is_video_only: format.has_video && !format.has_audio,
        is_audio_only: format.has_audio && !format.has_video,
        filesize: format
            .content_length
            .as_deref()
            .and_then(|x| x.parse::<u64>().ok())
            .filter(|x| *x > 0),
        default_filename: default_filename(title, video_id, &file_extension),
        file_extension,
    }
}
