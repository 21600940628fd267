use clap::Parser;
use miette::Result;
use pokedex::cli::{Cli, Commands, GlobalOpts};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for diagnostics
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
    let global = cli.global;
    init_tracing(&global);

    match cli.command {
        Commands::List(args) => pokedex::cli::commands::list::run(args, &global),
        Commands::Show(args) => pokedex::cli::commands::show::run(args, &global),
        Commands::Browse(args) => pokedex::cli::commands::browse::run(args, &global),
        Commands::Config(cmd) => pokedex::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => pokedex::cli::commands::completions::run(args),
    }
}

/// Logs go to stderr; RUST_LOG overrides the level picked from the flags
fn init_tracing(global: &GlobalOpts) {
    let default_level = if global.verbose {
        "info"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
