//! Blocking terminal input.

use std::io::{self, BufRead, Write};

use crate::{
    tracklist::{MalformedRow, RowRepair},
    utils, warning,
};

/// Prints `message` and reads one line from stdin, without its line ending.
pub fn ask(message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout().flush().map_err(|e| e.to_string())?;

    read_answer(&mut io::stdin().lock())
}

/// Like [`ask`], but a blank answer yields `default`.
pub fn ask_with_default(message: &str, default: &str) -> Result<String, String> {
    let answer = ask(&format!("{} [{}]: ", message, default))?;
    Ok(utils::or_default(&answer, default))
}

/// Asks a yes/no question until the answer is one of them.
pub fn confirm(message: &str) -> Result<bool, String> {
    loop {
        let answer = ask(&format!("{} [y/n] ", message))?;
        match parse_confirmation(&answer) {
            Some(yes) => return Ok(yes),
            None => warning!("Please type yes or no and then press enter."),
        }
    }
}

pub fn read_answer<R: BufRead>(reader: &mut R) -> Result<String, String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("no input".to_string());
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Asks the user for the artist and song of a track that could not be split.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRepair;

impl RowRepair for TerminalRepair {
    fn repair(&mut self, row: &MalformedRow) -> Result<(String, String), String> {
        warning!(
            "Error parsing track {} at {} (line {})",
            row.content,
            row.timestamp,
            row.line
        );

        let artist = ask("Please enter an artist for this track: ")
            .map_err(|e| format!("Incorrect artist entry: {}", e))?;
        let song = ask("Please enter a name for this track: ")
            .map_err(|e| format!("Incorrect track name entry: {}", e))?;

        Ok((artist, song))
    }
}
