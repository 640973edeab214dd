use clap::Parser;

mod commands;
mod options;

use options::{Args, Subcommands};

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.cmd {
        Subcommands::ListHeads { path } => commands::list_heads(&commands::open(&path)?, &mut out)?,
        Subcommands::Header { path } => commands::describe(&commands::open(&path)?, &mut out)?,
        Subcommands::Verify { path } => commands::verify(&commands::open(&path)?, &mut out)?,
    }
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::filter::LevelFilter;

    tracing_subscriber::fmt()
        .with_max_level(if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing(_verbose: bool) {}
