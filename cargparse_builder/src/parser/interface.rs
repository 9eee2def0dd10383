use crate::model::Severity;
use crate::parser::{ErrorContext, ParseError};

/// A single reported problem, along with the command line context it occurred in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    error: ParseError,
    context: Option<ErrorContext>,
}

impl Diagnostic {
    pub(crate) fn new(error: ParseError, context: Option<ErrorContext>) -> Self {
        Self { error, context }
    }

    /// What went wrong.
    pub fn parse_error(&self) -> &ParseError {
        &self.error
    }

    /// The offending token, for per-token problems.
    /// Missing mandatory arguments are reported after the scan, without a context.
    pub fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    /// See [`ParseError::severity`].
    pub fn severity(&self) -> Severity {
        self.error.severity()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity(), self.error)?;

        if let Some(context) = &self.context {
            write!(f, "\n{context}")?;
        }

        Ok(())
    }
}

/// The sink the parser reports into.
///
/// The parser calls `warn` or `error` exactly once per violation, and `print` for each line of the help message.
/// Implement this to redirect the output (ex: into a log, or a test double).
pub trait Diagnostics {
    /// Show a line of regular output, such as the help message.
    fn print(&self, message: String);

    /// Report a non-fatal problem.
    fn warn(&self, diagnostic: Diagnostic);

    /// Report a problem with the command line.
    fn error(&self, diagnostic: Diagnostic);
}

/// The default sink: help on stdout, problems on stderr.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics {}

impl Diagnostics for ConsoleDiagnostics {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn warn(&self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }

    fn error(&self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// *Available using 'unit_test' crate feature only.*</br></br>
/// A [`Diagnostics`] test double which records everything reported to it.
///
/// ### Example
/// ```
/// # use cargparse_builder as cargparse;
/// use cargparse::{recording::channel_diagnostics, ArgumentList, Declaration};
///
/// let (sender, receiver) = channel_diagnostics();
/// let parser = ArgumentList::new()
///     .add(Declaration::flag('v', "verbose"))
///     .build_with_diagnostics(Box::new(sender))
///     .unwrap();
///
/// let arguments = parser.parse_tokens(&["program", "-v", "-x"]);
///
/// assert!(arguments.is_present('v'));
/// let recorded = receiver.consume();
/// assert_eq!(recorded.warnings.len(), 1);
/// assert!(recorded.errors.is_empty());
/// ```
#[cfg(any(test, feature = "unit_test"))]
pub mod recording {
    use std::sync::mpsc;

    use super::{Diagnostic, Diagnostics};

    /// Create a connected sender (to hand to the parser) and receiver (to inspect afterwards).
    pub fn channel_diagnostics() -> (SenderDiagnostics, ReceiverDiagnostics) {
        let (message_tx, message_rx) = mpsc::channel();
        let (warning_tx, warning_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let sender = SenderDiagnostics {
            message_tx,
            warning_tx,
            error_tx,
        };
        let receiver = ReceiverDiagnostics {
            message_rx,
            warning_rx,
            error_rx,
        };
        (sender, receiver)
    }

    /// The sending half of [`channel_diagnostics`].
    #[derive(Debug)]
    pub struct SenderDiagnostics {
        message_tx: mpsc::Sender<String>,
        warning_tx: mpsc::Sender<Diagnostic>,
        error_tx: mpsc::Sender<Diagnostic>,
    }

    // Reports are dropped once the receiver is gone.
    impl Diagnostics for SenderDiagnostics {
        fn print(&self, message: String) {
            self.message_tx.send(message).ok();
        }

        fn warn(&self, diagnostic: Diagnostic) {
            self.warning_tx.send(diagnostic).ok();
        }

        fn error(&self, diagnostic: Diagnostic) {
            self.error_tx.send(diagnostic).ok();
        }
    }

    /// The receiving half of [`channel_diagnostics`].
    #[derive(Debug)]
    pub struct ReceiverDiagnostics {
        message_rx: mpsc::Receiver<String>,
        warning_rx: mpsc::Receiver<Diagnostic>,
        error_rx: mpsc::Receiver<Diagnostic>,
    }

    impl ReceiverDiagnostics {
        /// Take everything reported so far, in the order it was reported.
        pub fn consume(&self) -> Recorded {
            Recorded {
                messages: self.message_rx.try_iter().collect(),
                warnings: self.warning_rx.try_iter().collect(),
                errors: self.error_rx.try_iter().collect(),
            }
        }
    }

    /// Everything a [`SenderDiagnostics`] was given.
    #[derive(Debug, Default, PartialEq, Eq)]
    pub struct Recorded {
        /// Lines passed to [`Diagnostics::print`].
        pub messages: Vec<String>,
        /// Diagnostics passed to [`Diagnostics::warn`].
        pub warnings: Vec<Diagnostic>,
        /// Diagnostics passed to [`Diagnostics::error`].
        pub errors: Vec<Diagnostic>,
    }

    impl Recorded {
        /// Whether nothing at all was reported.
        pub fn is_empty(&self) -> bool {
            self.messages.is_empty() && self.warnings.is_empty() && self.errors.is_empty()
        }

        /// The printed lines, joined by newlines.
        pub fn message(&self) -> String {
            self.messages.join("\n")
        }
    }
}
