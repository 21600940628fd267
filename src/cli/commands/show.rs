//! `pokedex show` command - Entry detail page

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{load_config, open_source, resolve_format, LOADING};
use crate::cli::render::{render_detail, DetailRecord};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::detail::{next_id, previous_id, DetailState};
use crate::core::identity::parse_id;
use crate::core::session::DetailSession;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Entry number (`25`, `#025`) or its API URL
    pub id: String,

    /// Show the entry after this one
    #[arg(long, conflicts_with = "prev")]
    pub next: bool,

    /// Show the entry before this one (no-op at #001)
    #[arg(long)]
    pub prev: bool,
}

/// Run the show command
pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let id = parse_id(&args.id)
        .ok_or_else(|| miette::miette!("Invalid entry number '{}'", args.id))?;

    let target = if args.next {
        next_id(id)
    } else if args.prev {
        previous_id(id).unwrap_or(id)
    } else {
        id
    };

    let config = load_config(global);
    let source = open_source(&config)?;

    let mut session = DetailSession::new(target);
    let state = session.reload(&source, config.language());

    let detail = match state {
        DetailState::Loading { .. } => {
            println!("{}", LOADING);
            std::process::exit(1);
        }
        _ => state.detail(),
    };

    let format = resolve_format(global, &config, OutputFormat::Auto);
    match (format, detail) {
        (OutputFormat::Json, Some(detail)) => {
            let record = DetailRecord::new(detail, state.description(), &config);
            let json = serde_json::to_string_pretty(&record).into_diagnostic()?;
            println!("{}", json);
        }
        (OutputFormat::Yaml, Some(detail)) => {
            let record = DetailRecord::new(detail, state.description(), &config);
            let yaml = serde_yml::to_string(&record).into_diagnostic()?;
            print!("{}", yaml);
        }
        (OutputFormat::Id, Some(detail)) => {
            println!("{}", detail.id);
        }
        _ => {
            println!("{}", render_detail(state, &config));
        }
    }

    Ok(())
}
