//! Terminal preview of a QR matrix.

use qrtool_core::Matrix;

/// Quiet zone drawn around the preview, in modules
const PREVIEW_QUIET: usize = 2;

/// Print a QR matrix to the terminal.
///
/// Uses Unicode block characters for compact display where
/// each character represents 2 vertical modules.
pub fn print_matrix(matrix: &Matrix) {
    for line in preview_lines(matrix) {
        println!("{line}");
    }
}

fn preview_lines(matrix: &Matrix) -> Vec<String> {
    let width = matrix.width();
    let span = width + 2 * PREVIEW_QUIET;
    // shift into matrix coordinates; anything outside is quiet zone
    let dark = |x: usize, y: usize| {
        x >= PREVIEW_QUIET
            && y >= PREVIEW_QUIET
            && matrix.is_dark(x - PREVIEW_QUIET, y - PREVIEW_QUIET)
    };

    // ▀ = top dark, bottom light
    // ▄ = top light, bottom dark
    // █ = both dark
    (0..span)
        .step_by(2)
        .map(|y| {
            (0..span)
                .map(|x| match (dark(x, y), dark(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect()
        })
        .collect()
}
