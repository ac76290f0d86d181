//! qrtool CLI - styled QR code generator.

mod commands;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser};
use qrtool_core::constants::{
    DEFAULT_BACKGROUND, DEFAULT_FILL, DEFAULT_MODULE_SIZE, DEFAULT_OUTPUT, DEFAULT_QUIET_ZONE,
};
use qrtool_core::{Color, EcLevel, Mode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "qrtool", version)]
#[command(about = "Generate QR code PNGs with an optional frame, centre logo and palette styling", long_about = None)]
struct Cli {
    /// The text, URL, phone number or email address to encode
    text: String,

    /// How to interpret the text
    #[arg(
        short,
        long,
        default_value = "auto",
        value_parser = PossibleValuesParser::new(MODE_VALUES).try_map(|s| s.parse::<ModeChoice>())
    )]
    mode: ModeChoice,

    /// Message body for --mode sms
    #[arg(long, value_name = "BODY")]
    message: Option<String>,

    /// Output PNG path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Module colour: name, palette name or hex (#RRGGBB)
    #[arg(long, value_name = "COLOR", default_value = DEFAULT_FILL)]
    fill: Color,

    /// Background colour: name, palette name or hex (#RRGGBB)
    #[arg(long, value_name = "COLOR", default_value = DEFAULT_BACKGROUND)]
    bg: Color,

    /// Pixel size of each module
    #[arg(long, default_value_t = DEFAULT_MODULE_SIZE)]
    size: u32,

    /// Quiet zone width, in modules
    #[arg(long, default_value_t = DEFAULT_QUIET_ZONE)]
    border: u32,

    /// Error-correction level (forced to high when a logo is used)
    #[arg(
        long,
        default_value = "medium",
        value_parser = PossibleValuesParser::new(EC_VALUES).try_map(|s| s.parse::<EcLevel>())
    )]
    ec: EcLevel,

    /// Logo image to place in the centre
    #[arg(long, value_name = "PATH")]
    logo: Option<PathBuf>,

    /// Pick colours from the palette based on the logo
    #[arg(long)]
    auto_style: bool,

    /// Image to sample for --auto-style instead of the logo
    #[arg(long, value_name = "PATH", requires = "auto_style")]
    style_from: Option<PathBuf>,

    /// Skip the rounded frame
    #[arg(long)]
    no_frame: bool,

    /// Also print the code to the terminal
    #[arg(long)]
    preview: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

const MODE_VALUES: [&str; 6] = ["auto", "url", "tel", "email", "sms", "text"];
const EC_VALUES: [&str; 4] = ["low", "medium", "quartile", "high"];

/// `--mode` value: a core [`Mode`], or `auto` for detection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ModeChoice(Option<Mode>);

impl ModeChoice {
    fn into_mode(self) -> Option<Mode> {
        self.0
    }
}

impl FromStr for ModeChoice {
    type Err = qrtool_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self(None));
        }
        s.parse().map(|mode| Self(Some(mode)))
    }
}

fn init_tracing(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::new("warn")
                .add_directive(format!("qrtool={level}").parse()?)
                .add_directive(format!("qrtool_core={level}").parse()?),
        )
        .init();
    Ok(())
}

/// Exit status for a failed run; core errors carry their own code.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<qrtool_core::Error>()
        .map_or(1, qrtool_core::Error::exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.quiet) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match commands::generate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}
