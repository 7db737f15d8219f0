use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use format_guard::cli::{Cli, Commands};
use format_guard::commands::{run_check, run_config, run_hook, run_init};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Hook(args) => run_hook(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so hook output on stdout stays readable.
fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
