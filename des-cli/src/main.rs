use clap::Parser;
use des_cli::cli::{self, Cli};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .parse_default_env()
            .init();
    }

    cli::run(&cli, &mut std::io::stdout().lock())
}
