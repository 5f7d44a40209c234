//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use twig::output::build_tree;
use twig::{JsonSchema, OutputConfig, TextFormatter, TreeWalker, WalkerConfig, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Display a directory tree as indented text or JSON")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Max depth of directory tree (0 = only the directory's own entries)
    #[arg(short = 'd', long = "max-depth", value_name = "INT")]
    max_depth: Option<usize>,

    /// Display only directories
    #[arg(short = 'o', long = "directories-only")]
    directories_only: bool,

    /// Display size of files and directories
    #[arg(short = 's', long = "show-size")]
    show_size: bool,

    /// Output tree in JSON format
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// JSON layout: flat (size beside children) or nested (explicit children)
    #[arg(long = "schema", value_name = "SCHEMA", default_value = "flat", requires = "json")]
    schema: JsonSchema,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn run(args: &Args) -> Result<()> {
    let walker_config = WalkerConfig {
        max_depth: args.max_depth,
        dirs_only: args.directories_only,
        show_size: args.show_size,
    };
    tracing::debug!(?walker_config, root = %args.directory.display(), "starting walk");

    let walker = TreeWalker::new(walker_config);
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        schema: args.schema,
    };

    if args.json {
        // The mapping is built in full before anything is printed
        let tree = build_tree(&walker, &args.directory, output_config.schema)?;
        print_json(&tree)?;
    } else {
        let mut formatter = TextFormatter::stdout(&output_config);
        let count = walker.walk_streaming(&args.directory, &mut formatter)?;
        tracing::info!(entries = count, "tree printed");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    twig::logging::init(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("twig: {:#}", e);
        process::exit(1);
    }
}
