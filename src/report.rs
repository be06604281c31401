use std::io::Write;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::tags::RankedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

pub trait Presenter {
    fn notify(&mut self, message: &str, severity: Severity) -> Result<()>;
    fn render_tags(&mut self, view: &[RankedEntry]) -> Result<()>;
}

pub fn render_text(view: &[RankedEntry], limit: Option<usize>) -> String {
    let mut output = String::new();
    for entry in view.iter().take(limit.unwrap_or(usize::MAX)) {
        output.push_str(&entry.line());
        output.push('\n');
    }
    output
}

pub fn render_json(view: &[RankedEntry], limit: Option<usize>) -> Result<String> {
    let shown = &view[..limit.unwrap_or(view.len()).min(view.len())];
    Ok(serde_json::to_string_pretty(shown)?)
}

pub fn summarize(view: &[RankedEntry]) -> String {
    let total: usize = view.iter().map(|entry| entry.count).sum();
    format!("{} tags, {} tokens counted", view.len(), total)
}

/// Writes listings to `out` and notices to `err`.
pub struct ConsolePresenter<O, E> {
    out: O,
    err: E,
    format: OutputFormat,
    limit: Option<usize>,
}

impl<O: Write, E: Write> ConsolePresenter<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat, limit: Option<usize>) -> Self {
        Self {
            out,
            err,
            format,
            limit,
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Presenter for ConsolePresenter<O, E> {
    fn notify(&mut self, message: &str, severity: Severity) -> Result<()> {
        match severity {
            Severity::Info => writeln!(self.err, "{message}")?,
            Severity::Error => writeln!(self.err, "error: {message}")?,
        }
        Ok(())
    }

    fn render_tags(&mut self, view: &[RankedEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                if view.is_empty() {
                    writeln!(self.out, "(no tags)")?;
                } else {
                    write!(self.out, "{}", render_text(view, self.limit))?;
                }
            }
            OutputFormat::Json => writeln!(self.out, "{}", render_json(view, self.limit)?)?,
        }
        self.out.flush()?;
        Ok(())
    }
}
