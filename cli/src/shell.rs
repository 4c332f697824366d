//! Output for the terminal front end.
//!
//! Snapshots go to the wrapped writer, as text or as one JSON object per line.
//! In text mode errors and the prompt go to stderr so that stdout only carries
//! colors; in JSON mode errors are objects on the same stream as snapshots.

use std::{
    fmt::Display,
    io::{self, Write},
};

use anstyle::{AnsiColor, Style};
use serde::Serialize;
use tinta::ColorSnapshot;

mod styles {
    use super::{AnsiColor, Style};

    pub const ERROR: Style = Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));
    pub const PROMPT: Style = Style::new().dimmed();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellOut {
    Human,
    Json,
}

#[derive(Debug)]
pub struct Shell<W> {
    out: W,
    output: ShellOut,
    prompt: bool,
}

impl<W: Write> Shell<W> {
    pub const fn new(out: W, json: bool) -> Self {
        Self {
            out,
            output: if json { ShellOut::Json } else { ShellOut::Human },
            prompt: false,
        }
    }

    /// Show a `>` prompt before each command. Ignored in JSON mode.
    pub const fn set_prompt(&mut self, prompt: bool) {
        self.prompt = prompt;
    }

    pub fn snapshot(&mut self, snapshot: &ColorSnapshot) -> io::Result<()> {
        match self.output {
            ShellOut::Human => writeln!(self.out, "{snapshot}")?,
            ShellOut::Json => {
                serde_json::to_writer(&mut self.out, snapshot)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    pub fn prompt(&self) -> io::Result<()> {
        if self.prompt && self.output == ShellOut::Human {
            let mut stderr = anstream::stderr().lock();
            write!(
                stderr,
                "{}>{} ",
                styles::PROMPT,
                styles::PROMPT.render_reset()
            )?;
            stderr.flush()?;
        }
        Ok(())
    }

    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        match self.output {
            ShellOut::Human => {
                let mut stderr = anstream::stderr().lock();
                write!(
                    stderr,
                    "{}error{}: ",
                    styles::ERROR,
                    styles::ERROR.render_reset()
                )?;
                writeln!(stderr, "{message}")?;
                stderr.flush()
            }
            ShellOut::Json => {
                #[derive(Serialize)]
                struct Error<'a> {
                    level: &'static str,
                    message: &'a str,
                }
                serde_json::to_writer(
                    &mut self.out,
                    &Error {
                        level: "error",
                        message: &message.to_string(),
                    },
                )?;
                writeln!(self.out)?;
                self.out.flush()
            }
        }
    }

    /// Report a line clap could not parse, including help requests.
    pub fn command_error(&mut self, error: &clap::Error) -> io::Result<()> {
        match self.output {
            ShellOut::Human => {
                let mut stderr = anstream::stderr().lock();
                write!(stderr, "{}", error.render().ansi())?;
                stderr.flush()
            }
            ShellOut::Json => {
                let rendered = error.to_string();
                let first = rendered.lines().next().unwrap_or_default();
                self.error(first.trim_start_matches("error: "))
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
