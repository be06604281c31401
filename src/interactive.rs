use std::io::BufRead;
use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::error::TagError;
use crate::report::{Presenter, Severity};
use crate::session::Session;

const HELP: &str = "commands:
  stop-words <path>  load a stop-word file (replaces the current list)
  scan <path>        scan a text file and show its tags
  show               show the tags of the last scan
  save [path]        save tags (default: tags_output.txt beside the text file)
  help               show this message
  quit               leave";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    StopWords(&'a str),
    Scan(&'a str),
    Show,
    Save(Option<&'a str>),
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Option<Command<'_>>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let arg = if rest.is_empty() { None } else { Some(rest) };

    let command = match (name, arg) {
        ("stop-words" | "stop", Some(path)) => Command::StopWords(path),
        ("scan" | "text", Some(path)) => Command::Scan(path),
        ("stop-words" | "stop" | "scan" | "text", None) => {
            return Err(format!("usage: {name} <path>"));
        }
        ("show", _) => Command::Show,
        ("save", path) => Command::Save(path),
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        _ => return Err(format!("unknown command '{name}' (try 'help')")),
    };
    Ok(Some(command))
}

/// Runs commands from `input` against `session` until `quit` or end of input.
///
/// Failures are reported through the presenter and never end the loop.
pub fn run_session<R: BufRead>(
    input: R,
    session: &mut Session,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                presenter.notify(&message, Severity::Error)?;
                continue;
            }
        };
        debug!("command: {command:?}");

        match command {
            Command::StopWords(path) => match session.load_stop_words(Path::new(path)) {
                Ok(count) => {
                    presenter.notify(&format!("Loaded {count} stop words"), Severity::Info)?
                }
                Err(err) => presenter.notify(
                    &format!("Error loading stop words: {err}"),
                    Severity::Error,
                )?,
            },
            Command::Scan(path) => match session.scan_text(Path::new(path)) {
                Ok(view) => presenter.render_tags(&view)?,
                Err(err) => {
                    presenter.notify(&format!("Error reading file: {err}"), Severity::Error)?
                }
            },
            Command::Show => presenter.render_tags(&session.ranked_view())?,
            Command::Save(path) => {
                let saved = match path {
                    Some(path) => session.save_tags_to(Path::new(path)),
                    None => session.save_tags(),
                };
                match saved {
                    Ok(path) => presenter
                        .notify(&format!("Tags saved to {}", path.display()), Severity::Info)?,
                    Err(err @ TagError::NothingToSave) => {
                        presenter.notify(&err.to_string(), Severity::Error)?
                    }
                    Err(err) => {
                        presenter.notify(&format!("Error saving file: {err}"), Severity::Error)?
                    }
                }
            }
            Command::Help => presenter.notify(HELP, Severity::Info)?,
            Command::Quit => break,
        }
    }
    Ok(())
}
