use clap::{Args, Parser as ClapParser, Subcommand};
use mapexpr::cli::{self, CliError, ExecOptions, ExecOutcome, TargetsOptions};
use std::{
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "mapexpr")]
#[command(about = "mapexpr - evaluate and analyse message mapping expressions")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `debug` or `mapexpr=trace` (defaults to $MAPEXPR_LOG, then `warn`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MappingSource {
    /// Inline mapping definition (JSON)
    #[arg(short, long)]
    expr: Option<String>,

    /// Path to a mapping definition file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a mapping against a message
    Exec {
        #[command(flatten)]
        source: MappingSource,

        /// Message content (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Message metadata as key=value (repeatable)
        #[arg(short, long = "meta")]
        meta: Vec<String>,

        /// Variable as name=json (repeatable)
        #[arg(long = "var")]
        vars: Vec<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List the fields, metadata and variables a mapping reads
    Targets {
        #[command(flatten)]
        source: MappingSource,

        /// Print targets as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'mapexpr docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Exec {
            source,
            input,
            meta,
            vars,
            pretty,
        } => run_exec(source, input, meta, vars, pretty),
        Commands::Targets { source, json } => run_targets(source, json),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env("MAPEXPR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_mapping(source: MappingSource) -> Result<String, CliError> {
    cli::load_mapping(source.expr, source.file.as_deref())
}

fn run_exec(
    source: MappingSource,
    input: Option<String>,
    metadata: Vec<String>,
    vars: Vec<String>,
    pretty: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = ExecOptions {
        mapping: read_mapping(source)?,
        input,
        metadata,
        vars,
    };

    match cli::execute_exec(&options)? {
        ExecOutcome::Value(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", json);
        }
        ExecOutcome::Absent => eprintln!("(absent: nothing to assign)"),
        ExecOutcome::Delete => eprintln!("(delete: target removed)"),
    }
    Ok(())
}

fn run_targets(source: MappingSource, json: bool) -> Result<(), CliError> {
    let options = TargetsOptions {
        mapping: read_mapping(source)?,
    };
    let targets = cli::execute_targets(&options)?;

    if json {
        let items: Vec<serde_json::Value> = targets
            .iter()
            .map(|t| {
                serde_json::json!({
                    "kind": format!("{:?}", t.kind).to_lowercase(),
                    "path": t.path,
                })
            })
            .collect();
        println!("{}", serde_json::to_string(&items)?);
    } else {
        for target in targets {
            println!("{}", target);
        }
    }
    Ok(())
}
