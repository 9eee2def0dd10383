use thiserror::Error;

use crate::matcher::*;
use crate::model::{Severity, Span};
use crate::parser::{Diagnostic, Diagnostics, ErrorContext};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A problem with the argument schema, detected when building the parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two flags share the same `--FULL_NAME`.
    #[error("Config error: cannot duplicate the full name '{0}'.")]
    DuplicateFullName(String),

    /// A flag id which can never be matched as `-ID`.
    /// Only `'-'` qualifies, since `--` is always a too short token.
    #[error("Config error: '{0}' cannot be used as a flag id.")]
    InvalidId(char),

    /// A flag without a `--FULL_NAME`.
    #[error("Config error: flag '-{0}' requires a full name.")]
    EmptyFullName(char),
}

/// A problem with the command line, reported through [`Diagnostics`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A lone `-` or `--`.
    #[error("Too short argument '{0}'.")]
    TooShortToken(String),

    /// The token matches no declaration, or no positional slot remains.
    #[error("Ignoring unknown argument '{0}'.")]
    UnknownArgument(String),

    /// The declaration was already matched by an earlier token.
    #[error("Redefinition of argument '{0}'.")]
    Redefinition(String),

    /// A flag which requires a value was the final token.
    #[error("Expected value for argument '{0}'.")]
    MissingValue(String),

    /// A mandatory declaration was never matched.
    #[error("Missing mandatory argument {0}!")]
    MissingMandatoryArgument(String),
}

impl ParseError {
    /// Unknown arguments are only warnings; everything else is an error.
    pub fn severity(&self) -> Severity {
        match self {
            ParseError::UnknownArgument(_) => Severity::Warning,
            ParseError::TooShortToken(_)
            | ParseError::Redefinition(_)
            | ParseError::MissingValue(_)
            | ParseError::MissingMandatoryArgument(_) => Severity::Error,
        }
    }
}

/// The aggregate verdict of a parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOutcome {
    missing_mandatory: bool,
    help_requested: bool,
}

impl ParseOutcome {
    /// Whether any mandatory declaration ended up unmatched.
    /// Set even when the corresponding errors were suppressed by the help flag.
    pub fn missing_mandatory(&self) -> bool {
        self.missing_mandatory
    }

    /// Whether the default `-h`/`--help` flag was matched.
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }
}

pub(crate) struct Parser<'r> {
    registry: &'r mut Registry,
    diagnostics: &'r dyn Diagnostics,
}

impl<'r> std::fmt::Debug for Parser<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'r> Parser<'r> {
    pub(crate) fn new(registry: &'r mut Registry, diagnostics: &'r dyn Diagnostics) -> Self {
        Self {
            registry,
            diagnostics,
        }
    }

    /// Walk the argv once (skipping the program name), then check the mandatory declarations.
    pub(crate) fn consume(mut self, argv: &[&str]) -> ParseOutcome {
        let mut index = 1;

        while index < argv.len() {
            index += self.feed(argv, index);
        }

        self.close()
    }

    /// Match the token at `index`, returning how many tokens it used up.
    fn feed(&mut self, argv: &[&str], index: usize) -> usize {
        let diagnostics = self.diagnostics;
        let token = argv[index];
        let token_class = Token::classify(token);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token {index} '{token}' classified as {token_class:?}.");
        }

        let (entry, positional_value) = match token_class {
            Token::TooShort => {
                report(
                    diagnostics,
                    ParseError::TooShortToken(token.to_string()),
                    argv,
                    index,
                );
                return 1;
            }
            Token::Long(name) => (self.registry.lookup_flag_by_full_name(name), None),
            Token::Short(short) => (
                short_id(short).and_then(|id| self.registry.lookup_flag_by_id(id)),
                None,
            ),
            Token::Positional(value) => (self.registry.next_positional(), Some(value)),
        };

        let entry = match entry {
            Some(entry) => entry,
            None => {
                report(
                    diagnostics,
                    ParseError::UnknownArgument(token.to_string()),
                    argv,
                    index,
                );
                return 1;
            }
        };

        if entry.is_present() {
            // The first occurrence stands.
            report(
                diagnostics,
                ParseError::Redefinition(token.to_string()),
                argv,
                index,
            );
            return 1;
        }

        if !entry.declaration().value_required() {
            entry.fill(None);
            return 1;
        }

        if let Some(value) = positional_value {
            entry.fill(Some(value.to_string()));
            return 1;
        }

        match argv.get(index + 1) {
            Some(value) => {
                // Taken verbatim, even when it looks like a flag.
                entry.fill(Some(value.to_string()));
                2
            }
            None => {
                report(
                    diagnostics,
                    ParseError::MissingValue(token.to_string()),
                    argv,
                    index,
                );
                1
            }
        }
    }

    fn close(self) -> ParseOutcome {
        let help_requested = self.registry.help_requested();
        let mut missing_mandatory = false;

        for entry in self.registry.entries() {
            let declaration = entry.declaration();

            if !declaration.is_optional() && !entry.is_present() {
                missing_mandatory = true;

                // The caller is expected to show the help instead.
                if !help_requested {
                    self.diagnostics.error(Diagnostic::new(
                        ParseError::MissingMandatoryArgument(declaration.label()),
                        None,
                    ));
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parse closed: missing_mandatory={missing_mandatory}, help_requested={help_requested}.");
        }

        ParseOutcome {
            missing_mandatory,
            help_requested,
        }
    }
}

fn report(diagnostics: &dyn Diagnostics, error: ParseError, argv: &[&str], index: usize) {
    let context = ErrorContext::new(argv, Span::token(index, argv[index]));
    let diagnostic = Diagnostic::new(error, Some(context));

    match diagnostic.severity() {
        Severity::Warning => diagnostics.warn(diagnostic),
        Severity::Error => diagnostics.error(diagnostic),
    }
}
