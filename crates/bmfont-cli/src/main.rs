//! bmfont - command-line tool for BMF bitmap fonts
//!
//! Inspects, validates and re-encodes `.bmf` files and renders text with them.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use bmfont_cli::commands;
use bmfont_cli::commands::render::RenderOptions;

/// bmfont - BMF bitmap font tool
#[derive(Parser)]
#[command(name = "bmfont")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header, palette and glyph table of a font
    Inspect {
        /// Path to the BMF file
        #[arg(short, long)]
        font: String,

        /// List every present glyph
        #[arg(long)]
        glyphs: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check that a font decodes cleanly
    Validate {
        /// Path to the BMF file
        #[arg(short, long)]
        font: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render text to a PNG image
    Render {
        /// Path to the BMF file
        #[arg(short, long)]
        font: String,

        /// Text to draw
        #[arg(short, long)]
        text: String,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Extra pixels between letters (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        letter_gap: Option<i32>,

        /// Paint palette index 0 as opaque black
        #[arg(long)]
        opaque_zero: bool,

        /// Write an 8-bit palette PNG instead of RGBA
        #[arg(long)]
        indexed: bool,

        /// JSON render config; flags override its values
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a font and write it back out
    Reencode {
        /// Path to the BMF file
        #[arg(short, long)]
        font: String,

        /// Output path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _ = env_logger::builder()
        .filter_level(log_level(cli.verbose))
        .try_init();

    let result = match cli.command {
        Commands::Inspect { font, glyphs, json } => commands::inspect::run(&font, glyphs, json),
        Commands::Validate { font, json } => commands::validate::run(&font, json),
        Commands::Render {
            font,
            text,
            out,
            letter_gap,
            opaque_zero,
            indexed,
            config,
            json,
        } => {
            let options = RenderOptions {
                config,
                letter_gap,
                opaque_zero,
                indexed,
            };
            commands::render::run(&font, &text, &out, &options, json)
        }
        Commands::Reencode { font, out, json } => commands::reencode::run(&font, &out, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["bmfont", "inspect", "--font", "a.bmf", "--glyphs"]).unwrap();
        match cli.command {
            Commands::Inspect { font, glyphs, json } => {
                assert_eq!(font, "a.bmf");
                assert!(glyphs);
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parses_validate_with_json() {
        let cli = Cli::try_parse_from(["bmfont", "validate", "-f", "a.bmf", "--json"]).unwrap();
        match cli.command {
            Commands::Validate { font, json } => {
                assert_eq!(font, "a.bmf");
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "bmfont",
            "render",
            "--font",
            "a.bmf",
            "--text",
            "Hello",
            "--out",
            "hello.png",
            "--letter-gap",
            "-1",
            "--opaque-zero",
            "--indexed",
            "--config",
            "render.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                font,
                text,
                out,
                letter_gap,
                opaque_zero,
                indexed,
                config,
                json,
            } => {
                assert_eq!(font, "a.bmf");
                assert_eq!(text, "Hello");
                assert_eq!(out, "hello.png");
                assert_eq!(letter_gap, Some(-1));
                assert!(opaque_zero);
                assert!(indexed);
                assert_eq!(config.as_deref(), Some("render.json"));
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_render_requires_out() {
        assert!(Cli::try_parse_from(["bmfont", "render", "--font", "a.bmf", "--text", "x"]).is_err());
    }

    #[test]
    fn test_cli_parses_reencode() {
        let cli =
            Cli::try_parse_from(["bmfont", "reencode", "--font", "a.bmf", "--out", "b.bmf"]).unwrap();
        match cli.command {
            Commands::Reencode { font, out, json } => {
                assert_eq!(font, "a.bmf");
                assert_eq!(out, "b.bmf");
                assert!(!json);
            }
            _ => panic!("expected reencode command"),
        }
    }

    #[test]
    fn test_cli_verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["bmfont", "-vv", "validate", "--font", "a.bmf"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(log_level(cli.verbose), log::LevelFilter::Debug);
        assert_eq!(log_level(9), log::LevelFilter::Trace);
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["bmfont", "explode"]).is_err());
    }
}
