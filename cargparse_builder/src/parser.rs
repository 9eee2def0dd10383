mod base;
mod interface;
mod layout;
mod printer;

pub(crate) use base::Parser;
pub use base::{ConfigError, ParseError, ParseOutcome};
#[cfg(any(test, feature = "unit_test"))]
pub use interface::recording;
pub use interface::{ConsoleDiagnostics, Diagnostic, Diagnostics};
pub(crate) use layout::*;
pub use printer::ErrorContext;
pub(crate) use printer::{print_help, Printer};
