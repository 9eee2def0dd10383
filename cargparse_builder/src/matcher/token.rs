/// The shape of a single command line token, before it is resolved against the registry.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// A lone `-` or `--`.
    TooShort,
    /// `--NAME`, holding the text after the `--`.
    Long(&'t str),
    /// `-X..`, holding the text after the `-`.
    /// Only a single character resolves; anything longer is an unknown argument.
    Short(&'t str),
    /// Anything not starting with `-`.
    Positional(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        // Find a 'long' flag, such as:
        //  --initial
        // Find a 'short' flag, such as:
        //  -i
        // Otherwise, this is a positional value.
        if let Some(name) = token.strip_prefix("--") {
            if name.is_empty() {
                Token::TooShort
            } else {
                Token::Long(name)
            }
        } else if let Some(short) = token.strip_prefix('-') {
            if short.is_empty() {
                Token::TooShort
            } else {
                Token::Short(short)
            }
        } else {
            Token::Positional(token)
        }
    }
}

/// The id named by a short flag, when it names precisely one.
pub(crate) fn short_id(short: &str) -> Option<char> {
    let mut characters = short.chars();

    match (characters.next(), characters.next()) {
        (Some(id), None) => Some(id),
        _ => None,
    }
}
