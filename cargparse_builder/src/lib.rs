//! Builder module for `cargparse`.
//! See [documentation root](https://docs.rs/cargparse/latest/cargparse/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
#[cfg(any(test, feature = "unit_test"))]
pub use parser::recording;
pub use parser::{
    ConfigError, ConsoleDiagnostics, Diagnostic, Diagnostics, ErrorContext, ParseError,
    ParseOutcome,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
