//! UI utilities for terminal output.

mod qr;
mod summary;

pub use qr::print_matrix;
pub use summary::print_summary;
