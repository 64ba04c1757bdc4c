use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::downloader::Downloader;
use crate::merge::MediaMerger;
use crate::progress::ProgressReporter;
use crate::prompt::Prompter;
use crate::save_path::resolve_save_path;
use crate::source::StreamSource;
use crate::structs::{MuxError, SessionEnd};
use crate::utils::is_valid_youtube_url;

/// Ask for a YouTube URL until a valid one is given. `None` when the user typed `N`.
pub fn read_url<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<String>, MuxError> {
    loop {
        let input = prompter.read_line("Please enter the full YouTube video url or N to exit:")?;
        let url = input.trim();

        if is_valid_youtube_url(url) {
            return Ok(Some(url.to_string()));
        }
        if url.eq_ignore_ascii_case("n") {
            return Ok(None);
        }

        prompter.say("Error: URL entered is invalid. Please try again...")?;
    }
}

/// One interactive run: resolve the save path once, then download until the user stops
pub struct Session<R, W, S, M> {
    prompter: Prompter<R, W>,
    downloader: Downloader<S, M>,
    progress: Box<dyn ProgressReporter>,
    save_path: Option<PathBuf>,
}

impl<R, W, S, M> Session<R, W, S, M>
where
    R: BufRead,
    W: Write,
    S: StreamSource,
    M: MediaMerger,
{
    pub fn new(
        prompter: Prompter<R, W>,
        downloader: Downloader<S, M>,
        progress: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            prompter,
            downloader,
            progress,
            save_path: None,
        }
    }

    /// Directory chosen for this session, once resolved
    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }

    pub fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }

    pub fn downloader(&self) -> &Downloader<S, M> {
        &self.downloader
    }

    pub fn run(&mut self, default_path: PathBuf) -> Result<SessionEnd, MuxError> {
        self.prompter.say("Welcome to the YouTube Downloader.")?;

        let save_path = resolve_save_path(&mut self.prompter, default_path)?;
        log::debug!("saving to {}", save_path.display());
        self.save_path = Some(save_path.clone());

        loop {
            let Some(url) = read_url(&mut self.prompter)? else {
                return Ok(SessionEnd::Exited);
            };

            let outcome = self
                .downloader
                .download(&url, &save_path, self.progress.as_mut())?;
            log::debug!("saved {}", outcome.path().display());

            if !self
                .prompter
                .confirm("Would you like to download another video?")?
            {
                self.prompter.say("Goodbye")?;
                return Ok(SessionEnd::Finished);
            }
        }
    }
}
