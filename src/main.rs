use clap::Parser;
use cupholder::cli::{Cli, Commands};
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let global = &cli.global;
    match cli.command {
        Commands::Size(args) => cupholder::cli::commands::size::run(args, global),
        Commands::Measure(args) => cupholder::cli::commands::measure::run(args, global),
        Commands::Bands(args) => cupholder::cli::commands::bands::run(args, global),
        Commands::Cups(args) => cupholder::cli::commands::cups::run(args, global),
        Commands::Chart(args) => cupholder::cli::commands::chart::run(args, global),
        Commands::Regions => cupholder::cli::commands::regions::run(global),
        Commands::Config(cmd) => cupholder::cli::commands::config::run(cmd, global),
        Commands::Completions(args) => cupholder::cli::commands::completions::run(args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("cupholder={}", level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
