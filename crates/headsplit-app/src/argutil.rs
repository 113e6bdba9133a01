use std::{
    fs::File,
    io::{Stdout, Write},
    path::Path,
    pin::Pin,
    task::{Context, Poll},
};

use clap::Command;
use tokio::io::{AsyncRead, ReadBuf, Stdin};

pub enum InputStream {
    File(tokio::fs::File),
    Stdin(Stdin),
}

impl InputStream {
    pub async fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if path.as_ref().as_os_str() == "-" {
            Ok(Self::Stdin(tokio::io::stdin()))
        } else {
            Ok(Self::File(tokio::fs::File::open(path).await?))
        }
    }
}

impl AsyncRead for InputStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        match self.get_mut() {
            InputStream::File(s) => Pin::new(s).poll_read(cx, buf),
            InputStream::Stdin(s) => Pin::new(s).poll_read(cx, buf),
        }
    }
}

pub enum OutputStream {
    File(File),
    Stdout(Stdout),
}

impl OutputStream {
    pub fn open<P: AsRef<Path>>(path: P, overwrite: bool) -> std::io::Result<Self> {
        if path.as_ref().as_os_str() == "-" {
            Ok(Self::Stdout(std::io::stdout()))
        } else {
            let mut options = std::fs::OpenOptions::new();
            options.write(true);

            if overwrite {
                options.create(true).truncate(true);
            } else {
                options.create_new(true);
            }

            Ok(Self::File(options.open(path)?))
        }
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutputStream::File(s) => s.write(buf),
            OutputStream::Stdout(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutputStream::File(s) => s.flush(),
            OutputStream::Stdout(s) => s.flush(),
        }
    }
}

pub fn build_commands() -> Command<'static> {
    let command = Command::new(clap::crate_name!())
        .about("Remove leading lines from files")
        .version(clap::crate_version!())
        .subcommand_required(true)
        .subcommand(crate::split::create_command())
        .subcommand(crate::scan::create_command())
        .subcommand(crate::config::create_command());

    crate::logging::logging_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commands() {
        build_commands().debug_assert();
    }
}
