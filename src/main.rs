use clap::Parser;
use uriroute::cli::{run_cli, Cli};
use uriroute::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    let _guard = init_logging(&LogConfig::from_env())?;
    let cli = Cli::parse();
    run_cli(cli)
}
