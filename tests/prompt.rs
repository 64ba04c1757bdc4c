use std::io::Cursor;

use rusty_ytmux::{MuxError, Prompter};

fn prompter(input: &str) -> Prompter<Cursor<String>, Vec<u8>> {
    Prompter::new(Cursor::new(input.to_string()), Vec::new())
}

fn output(prompter: &Prompter<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(prompter.output().clone()).unwrap()
}

#[test]
fn confirm_retries_until_yes() {
    let mut prompter = prompter("maybe\nY\n");

    assert!(prompter.confirm("Continue?").unwrap());

    let out = output(&prompter);
    assert_eq!(out.matches("Continue? (y/N)").count(), 2);
    assert_eq!(
        out.matches("Error: incorrect input value. Please enter y/N").count(),
        1
    );
}

#[test]
fn confirm_retries_until_no() {
    let mut prompter = prompter("NO\nn\n");

    assert!(!prompter.confirm("Continue?").unwrap());
    assert_eq!(output(&prompter).matches("Error:").count(), 1);
}

#[test]
fn confirm_trims_whitespace() {
    let mut prompter = prompter("   y  \r\n");

    assert!(prompter.confirm("Continue?").unwrap());
    assert!(!output(&prompter).contains("Error:"));
}

#[test]
fn confirm_fails_when_input_ends() {
    let mut prompter = prompter("what\n");

    assert!(matches!(
        prompter.confirm("Continue?"),
        Err(MuxError::InputClosed)
    ));
}
