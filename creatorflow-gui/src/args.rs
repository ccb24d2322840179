//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::CreatorFlowDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(CreatorFlowDirectory),
    ConfigPath(PathBuf),
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a String, Box<dyn Error>> {
    args.get(i + 1)
        .filter(|a| !a.starts_with("--"))
        .ok_or_else(|| format!("missing arg to {}", flag).into())
}

/// Parse command-line arguments.
///
/// `args` includes the program name at `args[0]`.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("creatorflow");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of creatorflow datadir
    --config <PATH>     Path of the configuration file (default: <datadir>/gui.toml)
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--datadir" => {
                let path = value_of(&args, i, "--datadir")?;
                res.push(Arg::DatadirPath(CreatorFlowDirectory::new(PathBuf::from(
                    path,
                ))));
                i += 2;
            }
            "--config" => {
                let path = value_of(&args, i, "--config")?;
                res.push(Arg::ConfigPath(PathBuf::from(path)));
                i += 2;
            }
            arg => return Err(format!("unknown argument '{}'", arg).into()),
        }
    }

    Ok(res)
}

/// Data directory and configuration file selected by the arguments.
pub fn resolve_paths(
    args: &[Arg],
) -> Result<(CreatorFlowDirectory, Option<PathBuf>), Box<dyn Error>> {
    let mut datadir = None;
    let mut config_path = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(dir) if datadir.is_none() => datadir = Some(dir.clone()),
            Arg::ConfigPath(path) if config_path.is_none() => config_path = Some(path.clone()),
            _ => return Err("Unknown args combination".into()),
        }
    }
    let datadir = match datadir {
        Some(dir) => dir,
        None => CreatorFlowDirectory::new_default()?,
    };
    Ok((datadir, config_path))
}
