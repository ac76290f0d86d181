//! Generate command implementation.

use anyhow::Context;
use qrtool_core::{Generator, Request};

use crate::ui::{print_matrix, print_summary};
use crate::Cli;

/// Build the core request from parsed arguments.
fn request_from(cli: &Cli) -> Request {
    Request {
        text: cli.text.clone(),
        mode: cli.mode.into_mode(),
        sms_body: cli.message.clone(),
        module_size: cli.size,
        quiet_zone: cli.border,
        ec_level: cli.ec,
        fill: cli.fill,
        background: cli.bg,
        logo: cli.logo.clone(),
        auto_style: cli.auto_style,
        style_source: cli.style_from.clone(),
        frame: !cli.no_frame,
        output: cli.out.clone(),
    }
}

/// Generate the QR code PNG described by `cli`.
pub fn generate(cli: &Cli) -> anyhow::Result<()> {
    let request = request_from(cli);
    tracing::debug!(?request, "generating");

    let report = Generator::new()
        .generate(&request)
        .with_context(|| format!("could not create {}", request.output.display()))?;

    if cli.preview {
        print_matrix(&report.matrix);
    }
    if !cli.quiet {
        print_summary(&report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use qrtool_core::{Color, EcLevel, Mode};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("qrtool").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_request_mapping() {
        let cli = parse(&["Hello", "--mode", "text", "--no-frame", "--ec", "quartile", "--size", "3"]);
        let req = request_from(&cli);
        assert_eq!(req.mode, Some(Mode::Text));
        assert_eq!(req.ec_level, EcLevel::Quartile);
        assert_eq!(req.module_size, 3);
        assert!(!req.frame);
        assert_eq!(req.fill, Color::BLACK);
    }

    #[test]
    fn test_generate_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hello.png");
        let cli = parse(&["Hello", "--out", out.to_str().unwrap(), "-q"]);
        generate(&cli).unwrap();
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn test_generate_error_keeps_core_kind() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x.png");
        let cli = parse(&["nobody", "--mode", "tel", "--out", out.to_str().unwrap()]);
        let err = generate(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<qrtool_core::Error>(),
            Some(qrtool_core::Error::Validation(_))
        ));
        assert!(!out.exists());
    }
}
