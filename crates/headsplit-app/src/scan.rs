use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use headsplit::{
    io::read_async_to_limit,
    scan::{scan, LineBoundary},
};
use serde::Serialize;

use crate::{argutil::InputStream, config::AppConfig};

const ABOUT: &str = "List line boundaries of a file";
const ABOUT_LONG: &str = "List line boundaries of a file.

Each line is printed as a JSON object containing the line index, the offset \
after its terminator, and the terminator kind ('lf', 'crlf', 'cr', or \
'none' for a final line without a terminator).

The input is limited to the 'max_input_size' of the configuration file.";

#[derive(Serialize)]
struct BoundaryRecord {
    index: usize,
    #[serde(flatten)]
    boundary: LineBoundary,
}

pub fn create_command() -> Command<'static> {
    Command::new("scan")
        .about(ABOUT)
        .long_about(ABOUT_LONG)
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to input file or '-' for standard input"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to configuration file"),
        )
}

pub async fn run(sub_matches: &ArgMatches) -> anyhow::Result<()> {
    let input_path = sub_matches
        .get_one::<PathBuf>("input")
        .context("missing input")?;
    let config = AppConfig::load_or_default(sub_matches.get_one::<PathBuf>("config"))?;
    let input = InputStream::open(input_path)
        .await
        .context("failed to open input")?;
    let data = read_async_to_limit(input, config.max_input_size).await?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    write_boundaries(&data, &mut stdout)?;

    Ok(())
}

fn write_boundaries<W: Write>(data: &[u8], mut output: W) -> anyhow::Result<()> {
    for (index, boundary) in scan(data).enumerate() {
        serde_json::to_writer(&mut output, &BoundaryRecord { index, boundary })?;
        output.write_all(b"\n")?;
    }

    output.flush()?;

    Ok(())
}
