use std::io::Cursor;
use std::path::PathBuf;

use rusty_ytmux::{default_save_path, resolve_save_path, Prompter};

fn resolve(input: String) -> (PathBuf, String) {
    let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
    let path = resolve_save_path(&mut prompter, PathBuf::from("/home/user/Downloads")).unwrap();
    let (_, output) = prompter.into_inner();

    (path, String::from_utf8(output).unwrap())
}

#[test]
fn default_path_is_kept_when_declined() {
    let (path, output) = resolve("n\n".to_string());

    assert_eq!(path, PathBuf::from("/home/user/Downloads"));
    assert!(output.contains("The default save path is /home/user/Downloads"));
    assert!(!output.contains("Please enter a new directory path:"));
}

#[test]
fn existing_directory_is_accepted_after_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let input = format!("y\n{}\ny\n", dir.path().display());

    let (path, output) = resolve(input);

    assert_eq!(path, dir.path());
    assert!(output.contains(&format!(
        "Would you like to set the new path as {} ?",
        dir.path().display()
    )));
}

#[test]
fn missing_directory_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let input = format!("y\n{}\nn\n", missing.display());

    let (path, output) = resolve(input);

    assert_eq!(path, PathBuf::from("/home/user/Downloads"));
    assert!(output.contains("Error: Directory does not exist."));
    assert!(output.contains("Would you like to try again?"));
}

#[test]
fn missing_directory_then_retry() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let input = format!(
        "y\n{}\ny\n{}\ny\n",
        missing.display(),
        dir.path().display()
    );

    let (path, _) = resolve(input);

    assert_eq!(path, dir.path());
}

#[test]
fn declined_candidate_asks_for_another() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let input = format!(
        "y\n{}\nn\n{}\ny\n",
        first.path().display(),
        second.path().display()
    );

    let (path, output) = resolve(input);

    assert_eq!(path, second.path());
    assert_eq!(
        output.matches("Please enter a new directory path:").count(),
        2
    );
}

#[test]
fn default_save_path_is_home_downloads() {
    if let (Ok(path), Some(home)) = (default_save_path(), dirs::home_dir()) {
        assert_eq!(path, home.join("Downloads"));
    }
}
