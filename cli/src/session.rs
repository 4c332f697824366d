//! The interactive session: one edit command per input line.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tinta::{ColorSync, HslChannel, RgbChannel};
use tracing::trace;

use crate::shell::Shell;

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Type into the hex field; incomplete entries are kept as typed
    Hex {
        /// Hex text, empty to clear the field
        value: Option<String>,
    },
    /// Set one RGB channel (clamped to 0-255)
    Rgb {
        channel: RgbArg,
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Set one HSL component (hue 0-360, others 0-100)
    Hsl {
        channel: HslArg,
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Print the current color again
    Show,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RgbArg {
    #[value(alias = "red")]
    R,
    #[value(alias = "green")]
    G,
    #[value(alias = "blue")]
    B,
}

impl From<RgbArg> for RgbChannel {
    fn from(value: RgbArg) -> Self {
        match value {
            RgbArg::R => Self::Red,
            RgbArg::G => Self::Green,
            RgbArg::B => Self::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HslArg {
    #[value(alias = "hue")]
    H,
    #[value(alias = "saturation")]
    S,
    #[value(alias = "lightness")]
    L,
}

impl From<HslArg> for HslChannel {
    fn from(value: HslArg) -> Self {
        match value {
            HslArg::H => Self::Hue,
            HslArg::S => Self::Saturation,
            HslArg::L => Self::Lightness,
        }
    }
}

/// Runs commands from `input` until it ends or a `quit` line.
///
/// The starting color is printed first and the snapshot after every command.
/// A line that does not parse is reported and the session goes on.
pub fn run<R: BufRead, W: Write>(
    sync: &mut ColorSync,
    input: R,
    shell: &mut Shell<W>,
) -> Result<()> {
    let _guard = sync.watch(|snapshot| {
        trace!(hex = snapshot.hex(), authority = %snapshot.authority(), "snapshot published");
    });

    shell.snapshot(sync.snapshot())?;
    shell.prompt()?;

    for line in input.lines() {
        let line = line.wrap_err("failed to read a command")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            shell.prompt()?;
            continue;
        }

        let command = match Line::try_parse_from(words) {
            Ok(line) => line.command,
            Err(error) => {
                shell.command_error(&error)?;
                shell.prompt()?;
                continue;
            }
        };

        let snapshot = match command {
            Command::Hex { value } => sync.edit_hex(value.unwrap_or_default()),
            Command::Rgb { channel, value } => sync.edit_rgb(channel.into(), value),
            Command::Hsl { channel, value } => sync.edit_hsl(channel.into(), value),
            Command::Show => sync.snapshot(),
            Command::Quit => break,
        };
        shell.snapshot(snapshot)?;
        shell.prompt()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use serde_json::Value;

    use super::*;

    fn run_lines(input: &str, json: bool) -> Vec<String> {
        let mut sync = ColorSync::new();
        let mut shell = Shell::new(Vec::new(), json);
        run(&mut sync, Cursor::new(input), &mut shell).unwrap();
        String::from_utf8(shell.into_inner())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn prints_a_snapshot_per_command() {
        let lines = run_lines("rgb r 255\n\nhex #3B\nshow\n", false);
        assert_eq!(
            lines,
            [
                "#3B82F6  rgb(59, 130, 246)  hsl(217, 91%, 60%)  [hex]",
                "#FF82F6  rgb(255, 130, 246)  hsl(304, 100%, 75%)  [rgb]",
                "#3B  rgb(255, 130, 246)  hsl(304, 100%, 75%)  [hex]",
                "#3B  rgb(255, 130, 246)  hsl(304, 100%, 75%)  [hex]",
            ]
        );
    }

    #[test]
    fn quit_stops_reading() {
        let lines = run_lines("hsl l 0\nquit\nhsl l 100\n", false);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "#000000  rgb(0, 0, 0)  hsl(217, 91%, 0%)  [hsl]");
    }

    #[test]
    fn long_channel_names_and_negative_values() {
        let lines = run_lines("rgb green -20\nhsl hue 360\n", false);
        assert!(lines[1].starts_with("#3B00F6  rgb(59, 0, 246)"));
        assert!(lines[2].contains("hsl(0, "));
    }

    #[test]
    fn bare_hex_clears_the_field() {
        let lines = run_lines("hex\n", false);
        assert_eq!(lines[1], "  rgb(59, 130, 246)  hsl(217, 91%, 60%)  [hex]");
    }

    #[test]
    fn json_reports_bad_lines_and_continues() {
        let lines = run_lines("rgb x 1\nrgb b 0\n", true);
        assert_eq!(lines.len(), 3);

        let error: Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(error["level"], "error");

        let snapshot: Value = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(snapshot["hex"], "#3B8200");
        assert_eq!(snapshot["authority"], "rgb");
        assert_eq!(snapshot["rgb"]["blue"], 0);
        assert_eq!(snapshot["hsl"]["hue"], 93);
    }
}
