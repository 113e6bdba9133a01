use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::{prelude::*, EnvFilter};

pub struct LogLineWriter {
    file: Option<File>,
}

impl LogLineWriter {
    pub fn new() -> Self {
        Self { file: None }
    }

    pub fn open_file(path: &Path) -> Result<Self, std::io::Error> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self { file: Some(file) })
    }
}

impl Write for LogLineWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.file {
            Some(file) => file.write(buf),
            None => std::io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.file {
            Some(file) => file.flush(),
            None => std::io::stderr().flush(),
        }
    }
}

pub fn logging_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .short('l')
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("warn")
                .help("Set the level of severity of logging messages."),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .conflicts_with("log_level")
                .help("Print informative messages. Set log level to 'info'."),
        )
        .arg(
            Arg::new("log_filter")
                .long("log-filter")
                .conflicts_with("log_level")
                .takes_value(true)
                .help("Filter level of severity and targets of logging messages."),
        )
        .arg(
            Arg::new("log_file")
                .long("log-file")
                .takes_value(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write logging messages to a file."),
        )
        .arg(
            Arg::new("log_format")
                .long("log-format")
                .value_parser(["default", "json"])
                .default_value("default")
                .help("Format of logging messages."),
        )
}

pub fn log_filter_directives(arg_matches: &ArgMatches) -> String {
    match arg_matches.get_one::<String>("log_filter") {
        Some(filter) => filter.clone(),
        None => {
            let verbose = arg_matches.get_one::<bool>("verbose").copied() == Some(true);
            let level = if verbose {
                "info"
            } else {
                arg_matches
                    .get_one::<String>("log_level")
                    .map(String::as_str)
                    .unwrap_or("warn")
            };
            format!("headsplit={},headsplit_app={}", level, level)
        }
    }
}

pub fn set_up_logging(arg_matches: &ArgMatches) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_filter_directives(arg_matches))?;

    let mut ansi = use_console_color_stderr();
    let mut subscriber_default = None;
    let mut subscriber_json = None;

    let writer = Mutex::new(match arg_matches.get_one::<PathBuf>("log_file") {
        Some(path) => {
            ansi = false;
            LogLineWriter::open_file(path)?
        }
        None => LogLineWriter::new(),
    });

    match arg_matches
        .get_one::<String>("log_format")
        .map(String::as_str)
        .unwrap_or("default")
    {
        "json" => {
            subscriber_json = Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .json(),
            )
        }
        _ => {
            subscriber_default = Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(ansi),
            )
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber_default)
        .with(subscriber_json)
        .init();

    Ok(())
}

pub fn use_console_color_stderr() -> bool {
    console::colors_enabled_stderr() && std::env::var_os("NO_COLOR").is_none()
}
