pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod interactive;
pub mod logging;
pub mod report;
pub mod session;
pub mod stopwords;
pub mod tags;
pub mod tokenize;

use std::io;

use anyhow::Result;
use cli::{Cli, Commands};
use report::{ConsolePresenter, Presenter, Severity};
use session::Session;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract(args) => {
            let mut presenter =
                ConsolePresenter::new(io::stdout(), io::stderr(), args.format, args.top);
            extract::extract(&args, &mut presenter)
        }
        Commands::Interactive(args) => {
            let mut presenter =
                ConsolePresenter::new(io::stdout(), io::stderr(), args.format, args.top);
            let mut session = Session::new();
            if let Some(path) = config::resolve_stop_words_path(args.stop_words.as_deref())
                && let Err(err) = session.load_stop_words(&path)
            {
                presenter.notify(&format!("Error loading stop words: {err}"), Severity::Error)?;
            }
            interactive::run_session(io::stdin().lock(), &mut session, &mut presenter)
        }
    }
}
