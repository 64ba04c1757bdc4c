use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::constants::DOWNLOADS_DIR_NAME;
use crate::prompt::Prompter;
use crate::structs::MuxError;

/// `~/Downloads`
pub fn default_save_path() -> Result<PathBuf, MuxError> {
    dirs::home_dir()
        .map(|home| home.join(DOWNLOADS_DIR_NAME))
        .ok_or(MuxError::HomeDirNotFound)
}

/// Offer `default` and let the user swap it for another existing directory.
///
/// Declining the retry after a missing directory falls back to `default`, never to the bad
/// candidate. Declining an existing candidate asks for a new one.
pub fn resolve_save_path<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default: PathBuf,
) -> Result<PathBuf, MuxError> {
    let use_different_path = prompter.confirm(format!(
        "The default save path is {}\nWould you like to define a different path?",
        default.display()
    ))?;

    if !use_different_path {
        return Ok(default);
    }

    loop {
        let candidate = prompter.read_line("Please enter a new directory path:")?;

        if Path::new(&candidate).is_dir() {
            if prompter.confirm(format!("Would you like to set the new path as {candidate} ?"))? {
                log::debug!("save path set to {candidate}");
                return Ok(PathBuf::from(candidate));
            }
        } else {
            prompter.say("Error: Directory does not exist.")?;
            if !prompter.confirm("Would you like to try again?")? {
                return Ok(default);
            }
        }
    }
}
