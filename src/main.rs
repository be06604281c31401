use clap::Parser;
use tag_extractor::cli::Cli;
use tag_extractor::run;

fn main() -> anyhow::Result<()> {
    tag_extractor::logging::init();
    let cli = Cli::parse();
    run(cli)
}
