use std::env;

use crate::api::{Arguments, Declaration};
use crate::matcher::Registry;
use crate::parser::{print_help, ConfigError, ConsoleDiagnostics, Diagnostics, Parser};

/// The argument schema.
///
/// A fresh list already contains the default help flag (`-h`/`--help`).
/// Declaring your own `'h'` supersedes it.
///
/// ### Example
/// ```
/// # use cargparse_builder as cargparse;
/// use cargparse::ArgumentList;
///
/// let parser = ArgumentList::new()
///     // Configure with ArgumentList::add.
///     .build();
/// let arguments = parser.parse_tokens(&[]);
/// assert!(!arguments.missing_mandatory());
/// ```
#[derive(Debug)]
pub struct ArgumentList {
    registry: Registry,
}

impl Default for ArgumentList {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentList {
    /// Create an argument list, seeded with the default help flag.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Add a declaration to the schema.
    ///
    /// Declarations keep the order they were added in.
    /// Adding a declaration with an `id` already in the list replaces the earlier one, keeping its position.
    ///
    /// ### Example
    /// ```
    /// # use cargparse_builder as cargparse;
    /// use cargparse::{ArgumentList, Declaration};
    ///
    /// let parser = ArgumentList::new()
    ///     .add(Declaration::flag('c', "check"))
    ///     // Replaces the `'c'` declaration above.
    ///     .add(Declaration::flag('c', "check").requires_value())
    ///     .build();
    ///
    /// let arguments = parser.parse_tokens(&["program", "-c", "file.txt"]);
    /// assert_eq!(arguments.value('c'), Some("file.txt"));
    /// ```
    pub fn add(mut self, declaration: Declaration) -> Self {
        self.registry.add(declaration);
        self
    }

    /// Add a flag declaration, matched via `-ID` or `--FULL_NAME`.
    /// Shorthand for [`ArgumentList::add`] with a [`Declaration::flag`].
    ///
    /// ### Example
    /// ```
    /// # use cargparse_builder as cargparse;
    /// use cargparse::ArgumentList;
    ///
    /// let parser = ArgumentList::new()
    ///     .declare('a', "apply", "Apply the changes.", false, true)
    ///     .declare('b', "bad", "Where to report bad input.", true, false)
    ///     .build();
    ///
    /// let arguments = parser.parse_tokens(&["program", "--apply", "-b", "log.txt"]);
    /// assert!(arguments.is_present('a'));
    /// assert_eq!(arguments.value('b'), Some("log.txt"));
    /// ```
    pub fn declare(
        self,
        id: char,
        full_name: impl Into<String>,
        help: impl Into<String>,
        value_required: bool,
        optional: bool,
    ) -> Self {
        let mut declaration = Declaration::flag(id, full_name).help(help);

        if value_required {
            declaration = declaration.requires_value();
        }

        if !optional {
            declaration = declaration.mandatory();
        }

        self.add(declaration)
    }

    /// Add a positional declaration.
    /// Shorthand for [`ArgumentList::add`] with a [`Declaration::positional`].
    pub fn declare_positional(
        self,
        id: char,
        full_name: impl Into<String>,
        help: impl Into<String>,
        optional: bool,
    ) -> Self {
        let declaration = Declaration::positional(id, full_name).help(help);

        if optional {
            self.add(declaration.optional())
        } else {
            self.add(declaration)
        }
    }

    /// Build the parser, reporting through the provided diagnostics sink.
    pub fn build_with_diagnostics(
        self,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Result<ArgumentParser, ConfigError> {
        self.registry.validate()?;
        Ok(ArgumentParser {
            registry: self.registry,
            diagnostics,
        })
    }

    /// Build the parser as a Result.
    /// This finalizes the schema and checks for errors (ex: two flags with the same full name).
    pub fn build_parser(self) -> Result<ArgumentParser, ConfigError> {
        self.build_with_diagnostics(Box::new(ConsoleDiagnostics::default()))
    }

    /// Build the parser.
    /// This finalizes the schema and checks for errors (ex: two flags with the same full name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> ArgumentParser {
        match self.build_parser() {
            Ok(parser) => parser,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// A validated schema, ready for exactly one parse pass.
pub struct ArgumentParser {
    registry: Registry,
    diagnostics: Box<dyn Diagnostics>,
}

impl std::fmt::Debug for ArgumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("registry", &self.registry)
            .finish()
    }
}

impl ArgumentParser {
    /// Run the parser against the provided argv.
    /// The first token is the program name, and is never matched.
    ///
    /// Every token is processed; problems are reported through the diagnostics sink as they are found.
    /// Afterwards, each mandatory declaration that was not matched is reported.
    /// The process is never terminated: check [`Arguments::missing_mandatory`] and act accordingly.
    ///
    /// If the default help flag is matched, the help message is printed and the missing mandatory errors are suppressed.
    ///
    /// ### Example
    /// ```
    /// # use cargparse_builder as cargparse;
    /// use cargparse::{ArgumentList, Declaration};
    ///
    /// let parser = ArgumentList::new()
    ///     .add(Declaration::positional('p', "positional1").optional())
    ///     .add(Declaration::positional('q', "positional2"))
    ///     .build();
    ///
    /// let arguments = parser.parse_tokens(&["program", "first"]);
    ///
    /// // Mandatory positionals are filled first.
    /// assert_eq!(arguments.value('q'), Some("first"));
    /// assert!(!arguments.is_present('p'));
    /// assert!(!arguments.missing_mandatory());
    /// ```
    pub fn parse_tokens(self, argv: &[&str]) -> Arguments {
        let ArgumentParser {
            mut registry,
            diagnostics,
        } = self;
        let outcome = Parser::new(&mut registry, &*diagnostics).consume(argv);
        let arguments = Arguments::new(registry, diagnostics, outcome);

        if outcome.help_requested() {
            arguments.print_help(argv.first().copied().unwrap_or_default());
        }

        arguments
    }

    /// Run the parser against the Cli [`env::args`].
    /// See [`ArgumentParser::parse_tokens`].
    pub fn parse(self) -> Arguments {
        let argv: Vec<String> = env::args().collect();
        self.parse_tokens(
            argv.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Print the help message through the diagnostics sink.
    pub fn print_help(&self, program: &str) {
        print_help(&self.registry, program, &*self.diagnostics);
    }
}
