//! CLI entry point for the train registry

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use twig::trains::{Train, TrainStore, add_train, render_table, select_trains};

#[derive(Parser, Debug)]
#[command(name = "trains")]
#[command(about = "Keep a list of trains in a JSON file")]
#[command(version)]
struct Cli {
    /// Directory holding relative data files (defaults to the home directory)
    #[arg(long = "data-dir", env = "TRAINS_HOME", global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct FileArg {
    /// The data file name
    filename: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new train
    Add {
        #[command(flatten)]
        file: FileArg,

        /// The train's departure point
        #[arg(long = "departure", visible_alias = "dep")]
        departure: String,

        /// The train's number
        #[arg(short = 'n', long = "number")]
        number: String,

        /// The time departure of train
        #[arg(short = 't', long = "time")]
        time: String,

        /// The train's destination point
        #[arg(long = "destination", visible_alias = "des")]
        destination: String,
    },

    /// Display all trains
    Display {
        #[command(flatten)]
        file: FileArg,
    },

    /// Select the trains going to a destination
    Select {
        #[command(flatten)]
        file: FileArg,

        /// The required point
        #[arg(short = 'P', long = "point")]
        point: String,
    },
}

fn open_store(filename: &Path, data_dir: Option<&Path>) -> Result<TrainStore> {
    let store = TrainStore::resolve(filename, data_dir)
        .with_context(|| format!("cannot locate data file '{}'", filename.display()))?;
    tracing::debug!(path = %store.path().display(), "using train store");
    Ok(store)
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.as_deref();
    match cli.command {
        Command::Add {
            file,
            departure,
            number,
            time,
            destination,
        } => {
            let store = open_store(&file.filename, data_dir)?;
            let mut trains = store.load()?;
            add_train(&mut trains, Train::new(departure, number, time, destination));
            store.save(&trains)?;
        }
        Command::Display { file } => {
            let trains = open_store(&file.filename, data_dir)?.load()?;
            println!("{}", render_table(&trains));
        }
        Command::Select { file, point } => {
            let trains = open_store(&file.filename, data_dir)?.load()?;
            let selected = select_trains(&trains, &point);
            println!("{}", render_table(selected));
        }
    }
    Ok(())
}

/// Accept the single-dash `-dep` and `-des` spellings by rewriting them to their
/// long aliases; clap shorts are one character. Arguments after `--` are left alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            let single_dash = ["-dep", "-des"].iter().any(|flag| {
                text.strip_prefix(flag)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
            });
            if single_dash {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    twig::logging::init(cli.verbose, false);

    if let Err(e) = run(cli) {
        eprintln!("trains: {:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_single_dash_flags_become_long() {
        let normalized = normalize_args(args(&[
            "trains", "add", "ind.json", "-dep", "Moscow", "-n", "1", "-t", "08:15", "-des=Omsk",
        ]));
        assert_eq!(
            normalized,
            args(&[
                "trains", "add", "ind.json", "--dep", "Moscow", "-n", "1", "-t", "08:15", "--des=Omsk",
            ])
        );
    }

    #[test]
    fn test_other_arguments_are_untouched() {
        let original = args(&["trains", "add", "-departure", "-desk", "--dep", "--", "-dep"]);
        assert_eq!(normalize_args(original.clone()), original);
    }

    #[test]
    fn test_normalized_args_parse() {
        let cli = Cli::try_parse_from(normalize_args(args(&[
            "trains", "add", "ind.json", "-dep", "Moscow", "-n", "1", "-t", "08:15", "-des", "Omsk",
        ])))
        .unwrap();
        match cli.command {
            Command::Add {
                departure,
                destination,
                ..
            } => {
                assert_eq!(departure, "Moscow");
                assert_eq!(destination, "Omsk");
            }
            other => panic!("expected add, got {:?}", other),
        }
    }
}
