//! `pokedex list` command - Catalog listing with search
//!
//! Fetches the catalog page once, then derives the visible rows from the
//! search box state (`--search` and `--by`).

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{load_config, open_source, resolve_format, LOADING};
use crate::cli::render::{summary_header, summary_row, SummaryRecord};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::catalog::EntitySummary;
use crate::core::filter::{FilterState, SearchMode};
use crate::core::palette::capitalize;
use crate::core::session::load_catalog;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search term (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// What the search term is matched against
    #[arg(long, short = 'b', default_value = "name")]
    pub by: SearchMode,

    /// Number of entries to fetch (default from config, 151)
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Run the list command
pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global);
    let source = open_source(&config)?;
    let limit = args.limit.unwrap_or_else(|| config.limit());

    let state = load_catalog(&source, limit);
    let Some(catalog) = state.catalog() else {
        // Fetch failed; the view never leaves its loading state
        println!("{}", LOADING);
        std::process::exit(1);
    };

    let filter = FilterState::new(args.search.clone().unwrap_or_default(), args.by);
    let entries = catalog.view(&filter);

    // Count only
    if args.count {
        println!("{}", entries.len());
        return Ok(());
    }

    let format = resolve_format(global, &config, OutputFormat::Tsv);
    print_entries(&entries, &filter, format, global.quiet)
}

/// Print catalog rows in the requested format
pub fn print_entries(
    entries: &[EntitySummary],
    filter: &FilterState,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<SummaryRecord> = entries.iter().map(SummaryRecord::from).collect();
            let json = serde_json::to_string_pretty(&records).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let records: Vec<SummaryRecord> = entries.iter().map(SummaryRecord::from).collect();
            let yaml = serde_yml::to_string(&records).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for entry in entries {
                writer
                    .serialize(SummaryRecord::from(entry))
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Number", "Name", "URL"]);
            for entry in entries {
                builder.push_record([
                    entry.display_id(),
                    capitalize(&entry.name),
                    entry.locator.clone(),
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Id => {
            for entry in entries {
                println!("{}", entry.id_str());
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            if entries.is_empty() {
                if !quiet {
                    println!(
                        "No entries match '{}' by {}.",
                        style(&filter.query).yellow(),
                        filter.mode
                    );
                }
                return Ok(());
            }

            if !quiet {
                println!("{}", summary_header());
                println!("{}", "-".repeat(50));
            }
            for entry in entries {
                println!("{}", summary_row(entry));
            }
            if !quiet {
                println!();
                println!("{} entries found.", style(entries.len()).cyan());
            }
        }
    }

    Ok(())
}
