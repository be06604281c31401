use anyhow::{Context, Result};
use log::warn;

use crate::cli::ExtractArgs;
use crate::config::resolve_stop_words_path;
use crate::error::TagError;
use crate::report::{Presenter, Severity, summarize};
use crate::session::Session;

pub fn extract(args: &ExtractArgs, presenter: &mut dyn Presenter) -> Result<()> {
    let mut session = Session::new();

    if let Some(path) = resolve_stop_words_path(args.stop_words.as_deref()) {
        session
            .load_stop_words(&path)
            .context("Error loading stop words")?;
    }

    let view = session.scan_text(&args.text).context("Error reading file")?;
    presenter.render_tags(&view)?;
    presenter.notify(&summarize(&view), Severity::Info)?;

    if !args.save && args.out.is_none() {
        return Ok(());
    }

    let saved = match args.out.as_deref() {
        Some(path) => session.save_tags_to(path),
        None => session.save_tags(),
    };
    match saved {
        Ok(path) => presenter.notify(
            &format!("Tags saved to {}", path.display()),
            Severity::Info,
        )?,
        Err(TagError::NothingToSave) => {
            warn!("save skipped for {}: no tags", args.text.display());
            presenter.notify(&TagError::NothingToSave.to_string(), Severity::Error)?;
        }
        Err(err) => return Err(err).context("Error saving file"),
    }

    Ok(())
}
