use terminal_size::{terminal_size, Width};

use crate::api::Declaration;
use crate::matcher::Registry;
use crate::model::Span;
use crate::parser::Diagnostics;
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, TotalWidth};

pub(crate) struct Printer<'r> {
    declarations: Vec<&'r Declaration>,
    terminal_width: Option<usize>,
}

const DEFAULT_MIDDLE_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

impl<'r> Printer<'r> {
    pub(crate) fn terminal(declarations: impl Iterator<Item = &'r Declaration>) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(declarations.collect(), terminal_width)
    }

    pub(crate) fn new(declarations: Vec<&'r Declaration>, terminal_width: Option<usize>) -> Self {
        Self {
            declarations,
            terminal_width,
        }
    }

    pub(crate) fn print_help(&self, program: &str, diagnostics: &(impl Diagnostics + ?Sized)) {
        // Optional positionals are filled last, so they are shown last.
        let (trailing, leading): (Vec<&Declaration>, Vec<&Declaration>) = self
            .declarations
            .iter()
            .copied()
            .partition(|d| d.is_positional() && d.is_optional());
        let summary: Vec<String> = leading
            .iter()
            .chain(trailing.iter())
            .map(|d| summary(d))
            .collect();

        let mut left_column_width = 0;
        let mut middle_column_width = 0;

        for declaration in &self.declarations {
            left_column_width =
                std::cmp::max(left_column_width, grammar(declaration).chars().count());
            let help_width = declaration
                .help_text()
                .map(|help| help.chars().count())
                .unwrap_or(0);
            middle_column_width = std::cmp::max(middle_column_width, help_width + MAIN_INDENT);
        }

        let column_renderer = match &self.terminal_width {
            Some(tw) => ColumnRenderer::guided(
                PaddingWidth::new(PADDING_WIDTH),
                LeftWidth::new(left_column_width),
                MiddleWidth::new(middle_column_width),
                TotalWidth(*tw),
            ),
            None => ColumnRenderer::new(
                PaddingWidth::new(PADDING_WIDTH),
                LeftWidth::new(left_column_width),
                MiddleWidth::new(std::cmp::min(middle_column_width, DEFAULT_MIDDLE_WIDTH)),
            ),
        };

        diagnostics.print(
            format!("usage: {program} {}", summary.join(" "))
                .trim_end()
                .to_string(),
        );

        let (positionals, flags): (Vec<&Declaration>, Vec<&Declaration>) =
            self.declarations.iter().copied().partition(|d| d.is_positional());

        for (title, section) in [("positional arguments:", positionals), ("options:", flags)] {
            if section.is_empty() {
                continue;
            }

            diagnostics.print("".to_string());
            diagnostics.print(title.to_string());

            for declaration in section {
                for line in column_renderer.render(
                    MAIN_INDENT,
                    &grammar(declaration),
                    declaration.help_text().unwrap_or_default(),
                ) {
                    diagnostics.print(line);
                }
            }
        }
    }
}

/// Print the help message for the registry, sized to the terminal.
pub(crate) fn print_help(registry: &Registry, program: &str, diagnostics: &dyn Diagnostics) {
    Printer::terminal(registry.declarations()).print_help(program, diagnostics);
}

/// How the declaration appears in the usage line.
/// Ex: `[-c CHECK]`, `-t`, `POSITIONAL2`
fn summary(declaration: &Declaration) -> String {
    let core = if declaration.is_positional() {
        declaration.metavar()
    } else if declaration.value_required() {
        format!("-{} {}", declaration.id(), declaration.metavar())
    } else {
        format!("-{}", declaration.id())
    };

    if declaration.is_optional() {
        format!("[{core}]")
    } else {
        core
    }
}

/// How the declaration appears in its section of the help message.
/// Ex: `-c CHECK, --check CHECK`, `POSITIONAL2`
fn grammar(declaration: &Declaration) -> String {
    if declaration.is_positional() {
        return declaration.metavar();
    }

    let value = if declaration.value_required() {
        format!(" {}", declaration.metavar())
    } else {
        "".to_string()
    };
    format!(
        "-{id}{value}, --{name}{value}",
        id = declaration.id(),
        name = declaration.full_name()
    )
}

/// The command line a diagnostic was raised against, with the offending span highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    tokens: Vec<String>,
    span: Span,
}

impl ErrorContext {
    pub(crate) fn new(tokens: &[&str], span: Span) -> Self {
        Self {
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
            span,
        }
    }

    /// The full argv, including the program name.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The highlighted region.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        // Each preceding token is followed by a single space.
        let column = self
            .tokens
            .iter()
            .take(self.span.index())
            .map(|token| token.chars().count() + 1)
            .sum::<usize>()
            + self.span.start();
        let carets = std::cmp::max(self.span.end().saturating_sub(self.span.start()), 1);

        write!(f, "{projection}\n{:column$}{}", "", "^".repeat(carets))
    }
}
