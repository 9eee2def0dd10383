/// One entry in the argument schema.
/// Added to an [`ArgumentList`](./struct.ArgumentList.html) via [`ArgumentList::add`](./struct.ArgumentList.html#method.add).
///
/// There are two classes of declarations:
/// * [`Declaration::flag`]: matched via `-ID` or `--FULL_NAME` on the Cli.
/// * [`Declaration::positional`]: matched purely by its position amongst the non-flag tokens.
///
/// The `id` is both the short flag letter and the key used to query the results after parsing.
/// It must be unique within an `ArgumentList`; adding a second declaration with the same `id` replaces the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    id: char,
    full_name: String,
    help: Option<String>,
    value_required: bool,
    optional: bool,
    positional: bool,
}

impl Declaration {
    /// Create a flag declaration.
    ///
    /// Flags start out optional and without a value.
    /// Use [`Declaration::requires_value`] and [`Declaration::mandatory`] to change this.
    ///
    /// ### Example
    /// ```
    /// # use cargparse_builder as cargparse;
    /// use cargparse::Declaration;
    ///
    /// // Matches `-v` or `--verbose`.
    /// let verbose = Declaration::flag('v', "verbose");
    /// assert!(verbose.is_optional());
    /// assert!(!verbose.value_required());
    /// ```
    pub fn flag(id: char, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            help: None,
            value_required: false,
            optional: true,
            positional: false,
        }
    }

    /// Create a positional declaration.
    ///
    /// Positionals start out mandatory, and always take the matched token as their value.
    /// Mandatory positionals are filled before optional ones, regardless of the order they are declared in.
    ///
    /// ### Example
    /// ```
    /// # use cargparse_builder as cargparse;
    /// use cargparse::Declaration;
    ///
    /// let input = Declaration::positional('i', "input_file");
    /// assert!(!input.is_optional());
    /// assert!(input.value_required());
    /// ```
    pub fn positional(id: char, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            help: None,
            value_required: true,
            optional: false,
            positional: true,
        }
    }

    /// Document the help message for this declaration.
    /// If repeated, only the final help message will apply.
    ///
    /// ### Example
    /// ```
    /// # use cargparse_builder as cargparse;
    /// use cargparse::Declaration;
    ///
    /// let check = Declaration::flag('c', "check")
    ///     .help("--this will get discarded--")
    ///     .help("Check the given file.");
    /// assert_eq!(check.help_text(), Some("Check the given file."));
    /// ```
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Require a value for this flag.
    /// The value is always the *next* token on the Cli, taken verbatim (`--check file.txt`).
    ///
    /// Positional declarations always carry a value, so this is a no-op for them.
    pub fn requires_value(mut self) -> Self {
        self.value_required = true;
        self
    }

    /// Make this declaration optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Make this declaration mandatory: its absence after parsing is reported as an error.
    pub fn mandatory(mut self) -> Self {
        self.optional = false;
        self
    }

    /// The short name, which also identifies this declaration in the results.
    pub fn id(&self) -> char {
        self.id
    }

    /// The `--FULL_NAME` of a flag, or the display name of a positional.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The help message, if documented.
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Whether this declaration consumes a value.
    pub fn value_required(&self) -> bool {
        self.value_required
    }

    /// Whether this declaration may be absent after parsing.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether this declaration is matched by position rather than by `-`/`--`.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    /// How the declaration is named in diagnostics.
    /// Ex: `'input_file'` or `'-c'/'--check'`.
    pub(crate) fn label(&self) -> String {
        if self.positional {
            format!("'{}'", self.full_name)
        } else {
            format!("'-{}'/'--{}'", self.id, self.full_name)
        }
    }

    /// The placeholder shown for the value in the help message.
    pub(crate) fn metavar(&self) -> String {
        self.full_name.to_ascii_uppercase().replace('-', "_")
    }
}
