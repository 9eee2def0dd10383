use std::collections::HashSet;

use crate::api::Declaration;
use crate::constant::*;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A declaration together with its parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    declaration: Declaration,
    present: bool,
    value: Option<String>,
}

impl Entry {
    fn new(declaration: Declaration) -> Self {
        Self {
            declaration,
            present: false,
            value: None,
        }
    }

    pub(crate) fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub(crate) fn is_present(&self) -> bool {
        self.present
    }

    pub(crate) fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn fill(&mut self, value: Option<String>) {
        assert!(
            !self.present,
            "internal error - an entry may only be filled once"
        );
        self.present = true;
        self.value = value;
    }
}

/// The ordered set of declarations.
///
/// Insertion order is meaningful: it decides positional precedence and the help message layout.
#[derive(Debug)]
pub(crate) struct Registry {
    entries: Vec<Entry>,
    default_help: bool,
}

impl Registry {
    pub(crate) fn new() -> Self {
        let mut registry = Self {
            entries: Vec::default(),
            default_help: false,
        };
        registry.add(
            Declaration::flag(HELP_ID, HELP_NAME)
                .help(HELP_MESSAGE)
                .optional(),
        );
        registry.default_help = true;
        registry
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            entries: Vec::default(),
            default_help: false,
        }
    }

    /// Insert the declaration, or replace the one with the same id in place.
    pub(crate) fn add(&mut self, declaration: Declaration) {
        if declaration.id() == HELP_ID {
            self.default_help = false;
        }

        match self
            .entries
            .iter_mut()
            .find(|entry| entry.declaration.id() == declaration.id())
        {
            Some(entry) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Replacing declaration '{}' ({:?}) with {:?}.",
                        declaration.id(),
                        entry.declaration,
                        declaration
                    );
                }

                *entry = Entry::new(declaration);
            }
            None => self.entries.push(Entry::new(declaration)),
        }
    }

    pub(crate) fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter().map(|entry| &entry.declaration)
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn lookup_by_id(&self, id: char) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.declaration.id() == id)
    }

    /// Resolve a `-X` token; positional declarations are never eligible.
    pub(crate) fn lookup_flag_by_id(&mut self, id: char) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| !entry.declaration.is_positional() && entry.declaration.id() == id)
    }

    /// Resolve a `--NAME` token (exact match only); positional declarations are never eligible.
    pub(crate) fn lookup_flag_by_full_name(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| {
            !entry.declaration.is_positional() && entry.declaration.full_name() == name
        })
    }

    /// The slot for the next positional token.
    ///
    /// Unfilled mandatory positionals take precedence over unfilled optional ones, each in declaration order.
    pub(crate) fn next_positional(&mut self) -> Option<&mut Entry> {
        let index = self
            .entries
            .iter()
            .position(|entry| {
                entry.declaration.is_positional() && !entry.declaration.is_optional() && !entry.present
            })
            .or_else(|| {
                self.entries
                    .iter()
                    .position(|entry| entry.declaration.is_positional() && !entry.present)
            })?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Selected positional slot '{}'.",
                self.entries[index].declaration.full_name()
            );
        }

        self.entries.get_mut(index)
    }

    /// Whether the auto-inserted help flag was matched.
    /// A user supplied `-h` declaration never counts.
    pub(crate) fn help_requested(&self) -> bool {
        self.default_help
            && self
                .lookup_by_id(HELP_ID)
                .map(Entry::is_present)
                .unwrap_or(false)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let mut full_names = HashSet::new();

        for declaration in self.declarations().filter(|d| !d.is_positional()) {
            if declaration.id() == '-' {
                return Err(ConfigError::InvalidId(declaration.id()));
            }

            if declaration.full_name().is_empty() {
                return Err(ConfigError::EmptyFullName(declaration.id()));
            }

            if !full_names.insert(declaration.full_name()) {
                return Err(ConfigError::DuplicateFullName(
                    declaration.full_name().to_string(),
                ));
            }
        }

        Ok(())
    }
}
