//! Result reporting.

use qrtool_core::GenerateReport;

/// Print where the code went and what it contains.
pub fn print_summary(report: &GenerateReport) {
    println!("Saved QR code to {}", report.output.display());
    println!("{}", describe(report));
}

fn describe(report: &GenerateReport) -> String {
    let mut line = format!(
        "  version {} ({}x{} modules), ec {}, {}x{} px, fill {} on {}",
        report.matrix.version(),
        report.matrix.width(),
        report.matrix.width(),
        report.matrix.ec_level(),
        report.side,
        report.side,
        report.fill,
        report.background,
    );
    if let Some(entry) = report.palette {
        line.push_str(&format!(", palette {}", entry.name));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrtool_core::{Generator, Request};

    #[test]
    fn test_describe() {
        let (_, report) = Generator::new().build(&Request::new("Hello")).unwrap();
        let line = describe(&report);
        assert!(line.contains("version 1 (21x21 modules)"), "{line}");
        assert!(line.contains("ec medium"));
        assert!(line.contains("290x290 px"));
        assert!(line.contains("fill #000000 on #FFFFFF"));
        assert!(!line.contains("palette"));
    }
}
