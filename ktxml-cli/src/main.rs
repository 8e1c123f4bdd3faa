use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ktxml_cli::config::ConfigOverrides;
use ktxml_cli::debug::{DebugOptions, run_debug_command};
use ktxml_cli::generate::{GenerateOptions, run_generate_command};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log debug details of each pipeline stage to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Kotlin objects from dimens.xml, colors.xml and styles.xml.
    Generate {
        /// Path to a TOML config file (defaults to ./ktxml.toml when present)
        #[arg(short, long)]
        config: Option<String>,

        /// Prefix of the generated objects, e.g. `Example` for `ExampleColors`
        #[arg(long)]
        project_name: Option<String>,

        /// Kotlin package of the generated files
        #[arg(long)]
        package_name: Option<String>,

        /// Directory containing the XML resource files
        #[arg(long)]
        res_dir: Option<PathBuf>,

        /// Root directory for generated sources
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Only keep styles descending from this style family
        #[arg(long)]
        style_root: Option<String>,

        /// Resource kinds to generate (dimens, colors, styles); repeatable or comma separated
        #[arg(short, long)]
        kind: Vec<String>,
    },

    /// Dump parsed (or mapped) resources of one XML file as JSON.
    Debug {
        /// The XML resource file to read
        #[arg(short, long)]
        input: String,

        /// Optional output file; prints to stdout otherwise
        #[arg(short, long)]
        output: Option<String>,

        /// Show the mapped Kotlin resources instead of the raw XML records
        #[arg(long)]
        mapped: bool,

        /// Project name used for cross-references when mapping
        #[arg(long)]
        project_name: Option<String>,

        /// Only keep styles descending from this style family
        #[arg(long)]
        style_root: Option<String>,
    },

    /// Print a shell completion script.
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.commands {
        Commands::Generate {
            config,
            project_name,
            package_name,
            res_dir,
            output_dir,
            style_root,
            kind,
        } => run_generate_command(GenerateOptions {
            config,
            overrides: ConfigOverrides {
                project_name,
                package_name,
                res_dir,
                output_dir,
                style_root,
            },
            kinds: kind,
        }),
        Commands::Debug {
            input,
            output,
            mapped,
            project_name,
            style_root,
        } => run_debug_command(DebugOptions {
            input,
            output,
            mapped,
            project_name,
            style_root,
        }),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Args::command(), "ktxml", &mut io::stdout());
        }
    }
}
