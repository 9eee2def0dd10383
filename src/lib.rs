//! `cargparse` is a small, declarative command line parser for Rust.
//!
//! Programs declare their argument schema once at startup, parse the Cli in a single pass, and then query the results.
//! `cargparse` prioritizes the following:
//! * *A predictable grammar*:
//! Flags are matched via `-x` or `--full-name`, values are always the next token, and everything else is positional.
//! * *Positional precedence*:
//! Mandatory positionals are filled before optional ones, regardless of the order they are declared in.
//! * *Never give up early*:
//! Every token is processed, and every problem is reported (with the offending token highlighted).
//! The parser never terminates the process; that decision belongs to the caller.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/driver.rs")]
//! ```
//!
//! ```console
//! $ driver -h
//! usage: driver [-h] [-a] [-c CHECK] -t -b BAD POSITIONAL2 [POSITIONAL1]
//!
//! positional arguments:
//!  POSITIONAL1               Optional positional argument
//!  POSITIONAL2               Mandatory positional argument
//!
//! options:
//!  -h, --help                Shows this help
//!  -a, --apply               Optional argument without value
//!  -c CHECK, --check CHECK   Optional argument with value
//!  -t, --test                Mandatory argument without value
//!  -b BAD, --bad BAD         Mandatory argument with value
//!
//! $ driver -t --bad out.txt first
//! -t :
//! -b : out.txt
//! -q : first
//!
//! $ driver -a --bad
//! [Error] Expected value for argument '--bad'.
//! driver -a --bad
//!           ^^^^^
//! [Error] Missing mandatory argument '-t'/'--test'!
//! [Error] Missing mandatory argument '-b'/'--bad'!
//! [Error] Missing mandatory argument 'positional2'!
//! -a :
//! ```
//!
//! # Declarations
//! Configure `cargparse` by starting with an [`ArgumentList`] and `add`ing declarations.
//! There are two classes of declarations: [`Declaration::flag`] and [`Declaration::positional`].
//!
//! Each declaration has a single character `id`, which is both the short flag (`-x`) and the key used to query the results.
//! Adding a second declaration with the same `id` replaces the first, in place.
//!
//! * Flags start out optional and without a value.
//! Use [`Declaration::requires_value`] to consume the following token as the value, and [`Declaration::mandatory`] to require the flag.
//! * Positionals start out mandatory, and their value is the token itself.
//! Use [`Declaration::optional`] to make them optional.
//!
//! The list always starts with a default help flag (`-h`/`--help`).
//! When matched, the help message is printed and the missing mandatory errors are suppressed.
//! Declare your own `'h'` to replace it.
//!
//! # Diagnostics
//! Problems are reported through a [`Diagnostics`] sink, one report per problem:
//! * Unknown arguments (including surplus positionals) are warnings; the token is skipped.
//! * Lone `-`/`--` tokens, repeated arguments, flags missing their value, and missing mandatory arguments are errors.
//! When an argument is repeated, the first occurrence stands.
//!
//! By default, [`ConsoleDiagnostics`] writes these to stderr.
//! Provide your own sink via [`ArgumentList::build_with_diagnostics`].
//!
//! # Features
//! * `unit_test`: exposes the `recording` sink, for asserting on the diagnostics in your own tests.
//! * `tracing_debug`: emits `tracing` debug events from the parser.
pub use cargparse_builder::*;
