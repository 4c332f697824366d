//! `tinta`: edit a color as hex, RGB or HSL from the terminal.

mod config;
mod session;
mod shell;

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::{
    config::HookBuilder,
    eyre::{Result, WrapErr},
};
use tinta::{ColorSnapshot, ColorSync, hex_to_rgb};
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter, fmt::format::FmtSpan};

use crate::{config::Config, shell::Shell};

#[derive(Debug, Parser)]
#[command(name = "tinta")]
#[command(about = "Edit one color as hex, RGB or HSL", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print one JSON object per snapshot
    #[arg(long, global = true)]
    json: bool,

    /// Read settings from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Edit a color interactively, one command per line (the default)
    Session,
    /// Print a hex color in all three forms
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Six hex digits, with or without a leading `#`
    color: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    HookBuilder::default()
        .display_env_section(false)
        .display_location_section(false)
        .install()?;

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("failed to install the log subscriber")?;

    let config = Config::load(cli.config.as_deref())?;
    let mut shell = Shell::new(io::stdout().lock(), cli.json);

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let mut sync = ColorSync::with_config(&config.sync)
                .wrap_err_with(|| format!("invalid initial color `{}`", config.sync.initial))?;
            let stdin = io::stdin();
            shell.set_prompt(stdin.is_terminal());
            session::run(&mut sync, stdin.lock(), &mut shell)
        }
        Commands::Convert(args) => convert(&args, &mut shell),
    }
}

fn convert<W: io::Write>(args: &ConvertArgs, shell: &mut Shell<W>) -> Result<()> {
    let rgb = hex_to_rgb(&args.color)
        .wrap_err_with(|| format!("`{}` is not a hex color", args.color))?;
    shell.snapshot(&ColorSnapshot::from_rgb(rgb))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn session_is_the_default_command() {
        let cli = Cli::try_parse_from(["tinta", "-vv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["tinta", "convert", "ff5722", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Convert(ref args)) if args.color == "ff5722"));
    }

    #[test]
    fn convert_normalizes_the_hex_form() {
        let mut shell = Shell::new(Vec::new(), false);
        let args = ConvertArgs {
            color: "3b82f6".to_owned(),
        };
        convert(&args, &mut shell).unwrap();
        assert_eq!(
            String::from_utf8(shell.into_inner()).unwrap(),
            "#3B82F6  rgb(59, 130, 246)  hsl(217, 91%, 60%)  [hex]\n"
        );
    }

    #[test]
    fn convert_rejects_short_hex() {
        let mut shell = Shell::new(Vec::new(), false);
        let args = ConvertArgs {
            color: "#FFF".to_owned(),
        };
        let error = convert(&args, &mut shell).unwrap_err();
        assert_eq!(error.to_string(), "`#FFF` is not a hex color");
    }
}
