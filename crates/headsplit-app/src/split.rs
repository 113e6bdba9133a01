use std::{io::Write, num::NonZeroUsize, path::PathBuf};

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use headsplit::{
    io::read_async_to_limit,
    processor::{ExtractHeader, Output, Route},
    property::{parse_boolean, parse_line_count},
};

use crate::{
    argutil::{InputStream, OutputStream},
    config::AppConfig,
};

const ABOUT: &str = "Remove lines from the beginning of a file";
const ABOUT_LONG: &str = "Remove lines from the beginning of a file.

The removed lines and the remaining body are written to separate outputs. \
Lines may end with LF, CRLF, or CR.

If the input is empty or has fewer lines than requested, the unmodified \
input is written to the error output and the program exits with an error.";
const INPUT_FILE_HELP: &str = "Path to input file or '-' for standard input";
const LINES_HELP: &str = "Number of lines to remove";
const KEEP_TRAILING_NEWLINE_HELP: &str = "Whether to keep the final newline in the body";
const CONFIG_HELP: &str = "Path to configuration file";
const BODY_HELP: &str = "Path to write the body or '-' for standard output";
const REMOVED_HELP: &str = "Path to write the removed lines";
const ERROR_HELP: &str = "Path to write the input on error";
const OVERWRITE_HELP: &str = "Allow overwriting existing files";

pub fn create_command() -> Command<'static> {
    Command::new("split")
        .about(ABOUT)
        .long_about(ABOUT_LONG)
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help(INPUT_FILE_HELP),
        )
        .arg(
            Arg::new("lines")
                .long("lines")
                .short('n')
                .takes_value(true)
                .value_parser(parse_line_count)
                .help(LINES_HELP),
        )
        .arg(
            Arg::new("keep_trailing_newline")
                .long("keep-trailing-newline")
                .takes_value(true)
                .value_parser(parse_boolean)
                .help(KEEP_TRAILING_NEWLINE_HELP),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help(CONFIG_HELP),
        )
        .arg(
            Arg::new("body")
                .long("body")
                .short('o')
                .takes_value(true)
                .default_value("-")
                .value_parser(clap::value_parser!(PathBuf))
                .help(BODY_HELP),
        )
        .arg(
            Arg::new("removed")
                .long("removed")
                .takes_value(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help(REMOVED_HELP),
        )
        .arg(
            Arg::new("error")
                .long("error")
                .takes_value(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help(ERROR_HELP),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .action(ArgAction::SetTrue)
                .help(OVERWRITE_HELP),
        )
}

pub fn load_config(sub_matches: &ArgMatches) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_or_default(sub_matches.get_one::<PathBuf>("config"))?;

    if let Some(value) = sub_matches.get_one::<NonZeroUsize>("lines") {
        config.remove_lines = *value;
    }

    if let Some(value) = sub_matches.get_one::<bool>("keep_trailing_newline") {
        config.keep_trailing_newline = *value;
    }

    Ok(config)
}

fn destination(sub_matches: &ArgMatches, route: Route) -> Option<&PathBuf> {
    sub_matches.get_one::<PathBuf>(route.name())
}

pub async fn run(sub_matches: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(sub_matches)?;
    let input_path = sub_matches
        .get_one::<PathBuf>("input")
        .context("missing input")?;
    let overwrite = sub_matches.get_one::<bool>("overwrite").copied().unwrap_or(false);

    let input = InputStream::open(input_path)
        .await
        .context("failed to open input")?;
    let data = read_async_to_limit(input, config.max_input_size).await?;

    tracing::info!(?input_path, len = data.len(), "read input");

    let processor = ExtractHeader::new(config.split_config());
    let outputs = processor.process(data);

    for output in &outputs {
        write_output(sub_matches, output, overwrite)?;
    }

    if outputs.iter().any(|output| output.route == Route::Error) {
        anyhow::bail!("input could not be split");
    }

    Ok(())
}

fn write_output(sub_matches: &ArgMatches, output: &Output, overwrite: bool) -> anyhow::Result<()> {
    match destination(sub_matches, output.route) {
        Some(path) => {
            tracing::info!(route = %output.route, ?path, len = output.content.len(), "write output");

            let mut stream = OutputStream::open(path, overwrite)
                .with_context(|| format!("failed to open {} output", output.route))?;
            stream.write_all(&output.content)?;
            stream.flush()?;
        }
        None => {
            tracing::info!(route = %output.route, len = output.content.len(), "discard output");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        create_command().get_matches_from(args)
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(&matches(&["split", "-"])).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_overrides() {
        let config = load_config(&matches(&[
            "split",
            "-",
            "--lines",
            "3",
            "--keep-trailing-newline",
            "false",
        ]))
        .unwrap();

        assert_eq!(config.remove_lines.get(), 3);
        assert!(!config.keep_trailing_newline);
    }

    #[test]
    fn test_invalid_lines() {
        let result = create_command().try_get_matches_from(["split", "-", "--lines", "0"]);

        assert!(result.is_err());
    }

    #[test_log::test(tokio::test)]
    async fn test_run_split() {
        let dir = tempdir::TempDir::new("headsplit").unwrap();
        let input_path = dir.path().join("input.txt");
        let body_path = dir.path().join("body.txt");
        let removed_path = dir.path().join("removed.txt");
        std::fs::write(&input_path, b"1\n2\n").unwrap();

        let sub_matches = matches(&[
            "split",
            input_path.to_str().unwrap(),
            "--body",
            body_path.to_str().unwrap(),
            "--removed",
            removed_path.to_str().unwrap(),
        ]);
        run(&sub_matches).await.unwrap();

        assert_eq!(std::fs::read(&removed_path).unwrap(), b"1\n");
        assert_eq!(std::fs::read(&body_path).unwrap(), b"2\n");
    }

    #[test_log::test(tokio::test)]
    async fn test_run_split_error() {
        let dir = tempdir::TempDir::new("headsplit").unwrap();
        let input_path = dir.path().join("input.txt");
        let body_path = dir.path().join("body.txt");
        let error_path = dir.path().join("error.txt");
        std::fs::write(&input_path, b"1\n").unwrap();

        let sub_matches = matches(&[
            "split",
            input_path.to_str().unwrap(),
            "--lines",
            "2",
            "--body",
            body_path.to_str().unwrap(),
            "--error",
            error_path.to_str().unwrap(),
        ]);

        assert!(run(&sub_matches).await.is_err());
        assert_eq!(std::fs::read(&error_path).unwrap(), b"1\n");
        assert!(!body_path.exists());
    }
}
