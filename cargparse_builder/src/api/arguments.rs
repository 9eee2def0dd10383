use crate::api::Declaration;
use crate::matcher::{Entry, Registry};
use crate::parser::{print_help, Diagnostics, ParseOutcome};

/// The result of a parse pass: which declarations were matched, and with what values.
///
/// ### Example
/// ```
/// # use cargparse_builder as cargparse;
/// use cargparse::{ArgumentList, Declaration};
///
/// let parser = ArgumentList::new()
///     .add(Declaration::flag('t', "test").requires_value())
///     .add(Declaration::flag('a', "apply"))
///     .build();
///
/// let arguments = parser.parse_tokens(&["program", "-t", "value"]);
///
/// assert!(arguments.is_present('t'));
/// assert_eq!(arguments.value('t'), Some("value"));
/// assert!(!arguments.is_present('a'));
/// assert_eq!(arguments.value('a'), None);
/// ```
pub struct Arguments {
    registry: Registry,
    diagnostics: Box<dyn Diagnostics>,
    outcome: ParseOutcome,
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arguments")
            .field("registry", &self.registry)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl Arguments {
    pub(crate) fn new(
        registry: Registry,
        diagnostics: Box<dyn Diagnostics>,
        outcome: ParseOutcome,
    ) -> Self {
        Self {
            registry,
            diagnostics,
            outcome,
        }
    }

    /// Whether the declaration with this `id` was matched.
    /// Unknown ids are never present.
    pub fn is_present(&self, id: char) -> bool {
        self.registry
            .lookup_by_id(id)
            .map(Entry::is_present)
            .unwrap_or(false)
    }

    /// The value matched for the declaration with this `id`.
    ///
    /// Only declarations which take a value have one: a flag declared via [`Declaration::requires_value`], or any positional.
    pub fn value(&self, id: char) -> Option<&str> {
        self.registry.lookup_by_id(id).and_then(Entry::value)
    }

    /// The declaration with this `id`.
    pub fn declaration(&self, id: char) -> Option<&Declaration> {
        self.registry.lookup_by_id(id).map(Entry::declaration)
    }

    /// Whether any mandatory declaration was left unmatched.
    ///
    /// The caller decides what to do about it; typically exit with an error.
    pub fn missing_mandatory(&self) -> bool {
        self.outcome.missing_mandatory()
    }

    /// Whether the default help flag was matched (and so the help message was printed).
    pub fn help_requested(&self) -> bool {
        self.outcome.help_requested()
    }

    /// The aggregate verdict of the parse pass.
    pub fn outcome(&self) -> ParseOutcome {
        self.outcome
    }

    /// Print the help message through the diagnostics sink.
    pub fn print_help(&self, program: &str) {
        print_help(&self.registry, program, &*self.diagnostics);
    }
}
