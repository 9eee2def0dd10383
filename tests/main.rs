use cargparse::recording::{channel_diagnostics, Recorded};
use cargparse::{ArgumentList, Arguments, ParseError, Severity};
use rstest::rstest;

fn parse(list: ArgumentList, argv: &[&str]) -> (Arguments, Recorded) {
    let (sender, receiver) = channel_diagnostics();
    let arguments = list
        .build_with_diagnostics(Box::new(sender))
        .unwrap()
        .parse_tokens(argv);
    (arguments, receiver.consume())
}

fn errors(recorded: &Recorded) -> Vec<ParseError> {
    recorded
        .errors
        .iter()
        .map(|d| d.parse_error().clone())
        .collect()
}

fn warnings(recorded: &Recorded) -> Vec<ParseError> {
    recorded
        .warnings
        .iter()
        .map(|d| d.parse_error().clone())
        .collect()
}

fn reference() -> ArgumentList {
    ArgumentList::new()
        .declare('a', "apply", "Optional argument without value", false, true)
        .declare('c', "check", "Optional argument with value", true, true)
        .declare('t', "test", "Mandatory argument without value", false, false)
        .declare('b', "bad", "Mandatory argument with value", true, false)
        .declare_positional('p', "positional1", "Optional positional argument", true)
        .declare_positional('q', "positional2", "Mandatory positional argument", false)
}

#[rstest]
#[case(&["prog"])]
#[case(&["prog", "-t"])]
#[case(&["prog", "first", "--apply"])]
fn untouched_declarations(#[case] argv: &[&str]) {
    let (arguments, _) = parse(reference(), argv);

    assert!(!arguments.is_present('c'));
    assert_eq!(arguments.value('c'), None);
    assert!(!arguments.is_present('b'));
    assert_eq!(arguments.value('b'), None);
    assert!(!arguments.is_present('p'));
    assert_eq!(arguments.value('p'), None);
}

#[test]
fn declare_twice_replaces() {
    let list = ArgumentList::new()
        .declare('x', "extra", "First.", false, false)
        .declare('x', "excess", "Second.", true, true);

    let (arguments, recorded) = parse(list, &["prog", "--excess", "value"]);

    assert_eq!(arguments.value('x'), Some("value"));
    assert_eq!(arguments.declaration('x').unwrap().full_name(), "excess");
    assert!(!arguments.missing_mandatory());
    assert!(recorded.is_empty());

    let list = ArgumentList::new()
        .declare('x', "extra", "First.", false, false)
        .declare('x', "excess", "Second.", true, true);

    let (arguments, recorded) = parse(list, &["prog", "--extra"]);

    assert!(!arguments.is_present('x'));
    assert_eq!(
        warnings(&recorded),
        vec![ParseError::UnknownArgument("--extra".to_string())]
    );
}

#[rstest]
#[case(&["prog", "-c", "first", "-c", "second"], "-c")]
#[case(&["prog", "-c", "first", "--check", "second"], "--check")]
#[case(&["prog", "--check", "first", "-c", "second"], "-c")]
fn redefinition_first_wins(#[case] argv: &[&str], #[case] repeated: &str) {
    let list = ArgumentList::new().declare('c', "check", "", true, true);

    let (arguments, recorded) = parse(list, argv);

    assert_eq!(arguments.value('c'), Some("first"));
    // The second value is no longer consumed, so it lands as an unknown positional.
    assert_eq!(
        errors(&recorded),
        vec![ParseError::Redefinition(repeated.to_string())]
    );
    assert_eq!(
        warnings(&recorded),
        vec![ParseError::UnknownArgument("second".to_string())]
    );
}

#[test]
fn positional_mandatory_first() {
    let list = ArgumentList::new()
        .declare_positional('p', "p1", "", true)
        .declare_positional('q', "p2", "", false);

    let (arguments, recorded) = parse(list, &["prog", "only"]);

    assert_eq!(arguments.value('q'), Some("only"));
    assert!(!arguments.is_present('p'));
    assert!(!arguments.missing_mandatory());
    assert!(recorded.is_empty());
}

#[test]
fn positional_surplus() {
    let list = ArgumentList::new()
        .declare_positional('p', "p1", "", true)
        .declare_positional('q', "p2", "", false);

    let (arguments, recorded) = parse(list, &["prog", "one", "two", "three"]);

    assert_eq!(arguments.value('q'), Some("one"));
    assert_eq!(arguments.value('p'), Some("two"));
    assert_eq!(
        warnings(&recorded),
        vec![ParseError::UnknownArgument("three".to_string())]
    );
    assert!(recorded.errors.is_empty());
}

#[test]
fn value_round_trip() {
    let list = ArgumentList::new().declare('t', "test", "", true, true);

    let (arguments, recorded) = parse(list, &["prog", "-t", "value"]);

    assert!(arguments.is_present('t'));
    assert_eq!(arguments.value('t'), Some("value"));
    assert!(recorded.is_empty());
}

#[test]
fn value_missing() {
    let list = ArgumentList::new().declare('t', "test", "", true, true);

    let (arguments, recorded) = parse(list, &["prog", "-t"]);

    assert!(!arguments.is_present('t'));
    assert_eq!(
        errors(&recorded),
        vec![ParseError::MissingValue("-t".to_string())]
    );
    assert!(!arguments.missing_mandatory());
}

#[rstest]
#[case("-a")]
#[case("--test")]
#[case("-")]
#[case("positional")]
fn value_taken_verbatim(#[case] value: &str) {
    let (arguments, recorded) = parse(reference(), &["prog", "-c", value]);

    assert_eq!(arguments.value('c'), Some(value));
    assert!(!arguments.is_present('a'));
    assert!(!arguments.is_present('q'));
    assert!(recorded.warnings.is_empty());
}

#[test]
fn no_value_flag_leaves_next_token() {
    let (arguments, recorded) = parse(reference(), &["prog", "-a", "first", "-t", "-b", "x"]);

    assert!(arguments.is_present('a'));
    assert_eq!(arguments.value('a'), None);
    assert_eq!(arguments.value('q'), Some("first"));
    assert!(!arguments.missing_mandatory());
    assert!(recorded.is_empty());
}

#[test]
fn missing_value_and_mandatory_both_reported() {
    let list = ArgumentList::new().declare('b', "bad", "", true, false);

    let (arguments, recorded) = parse(list, &["prog", "--bad"]);

    assert!(!arguments.is_present('b'));
    assert!(arguments.missing_mandatory());
    assert_eq!(
        errors(&recorded),
        vec![
            ParseError::MissingValue("--bad".to_string()),
            ParseError::MissingMandatoryArgument("'-b'/'--bad'".to_string()),
        ]
    );
}

#[test]
fn end_to_end() {
    let list = ArgumentList::new()
        .declare('a', "apply", "", false, true)
        .declare('b', "bad", "", true, false)
        .declare_positional('p', "positional1", "", true)
        .declare_positional('q', "positional2", "", false);

    let (arguments, recorded) = parse(list, &["prog", "-a", "--bad"]);

    assert!(arguments.is_present('a'));
    assert!(arguments.missing_mandatory());
    assert!(!arguments.help_requested());
    assert_eq!(
        errors(&recorded),
        vec![
            ParseError::MissingValue("--bad".to_string()),
            ParseError::MissingMandatoryArgument("'-b'/'--bad'".to_string()),
            ParseError::MissingMandatoryArgument("'positional2'".to_string()),
        ]
    );
    assert!(recorded.warnings.is_empty());
    assert_eq!(
        recorded.errors[0].to_string(),
        r#"[Error] Expected value for argument '--bad'.
prog -a --bad
        ^^^^^"#
    );
    assert!(recorded.errors[1].context().is_none());
}

#[rstest]
#[case("-", Some(ParseError::TooShortToken("-".to_string())), None)]
#[case("--", Some(ParseError::TooShortToken("--".to_string())), None)]
#[case("-z", None, Some(ParseError::UnknownArgument("-z".to_string())))]
#[case("-at", None, Some(ParseError::UnknownArgument("-at".to_string())))]
#[case("--app", None, Some(ParseError::UnknownArgument("--app".to_string())))]
#[case("--check=x", None, Some(ParseError::UnknownArgument("--check=x".to_string())))]
#[case("--positional1", None, Some(ParseError::UnknownArgument("--positional1".to_string())))]
#[case("-p", None, Some(ParseError::UnknownArgument("-p".to_string())))]
fn malformed_tokens(
    #[case] token: &str,
    #[case] error: Option<ParseError>,
    #[case] warning: Option<ParseError>,
) {
    let (arguments, recorded) = parse(reference(), &["prog", token, "-t", "-b", "x", "first"]);

    // Nothing aborts the scan.
    assert!(arguments.is_present('t'));
    assert_eq!(arguments.value('b'), Some("x"));
    assert_eq!(arguments.value('q'), Some("first"));
    assert!(!arguments.missing_mandatory());
    assert_eq!(errors(&recorded), error.into_iter().collect::<Vec<_>>());
    assert_eq!(warnings(&recorded), warning.into_iter().collect::<Vec<_>>());

    for diagnostic in recorded.errors.iter().chain(recorded.warnings.iter()) {
        let context = diagnostic.context().unwrap();
        assert_eq!(context.span().index(), 1);
        assert_eq!(context.span().end(), token.chars().count());
    }
}

#[test]
fn severities() {
    let (_, recorded) = parse(reference(), &["prog", "-", "-z"]);

    assert_eq!(recorded.errors[0].severity(), Severity::Error);
    assert_eq!(recorded.warnings[0].severity(), Severity::Warning);
    assert_eq!(
        recorded.warnings[0].to_string(),
        r#"[Warning] Ignoring unknown argument '-z'.
prog - -z
       ^^"#
    );
}

#[rstest]
#[case("-h")]
#[case("--help")]
fn help_suppresses_mandatory_errors(#[case] token: &str) {
    let (arguments, recorded) = parse(reference(), &["prog", token]);

    assert!(arguments.help_requested());
    assert!(arguments.missing_mandatory());
    assert!(recorded.errors.is_empty());
    assert!(recorded.messages[0].starts_with("usage: prog [-h] [-a] [-c CHECK] -t -b BAD"));
}

#[test]
fn help_still_reports_token_errors() {
    let (arguments, recorded) = parse(reference(), &["prog", "-h", "-h", "-"]);

    assert!(arguments.help_requested());
    assert_eq!(
        errors(&recorded),
        vec![
            ParseError::Redefinition("-h".to_string()),
            ParseError::TooShortToken("-".to_string()),
        ]
    );
}

#[test]
fn user_help_replaces_default() {
    let list = reference().declare('h', "hold", "", false, false);

    let (arguments, recorded) = parse(list, &["prog", "-h"]);

    assert!(arguments.is_present('h'));
    assert!(!arguments.help_requested());
    assert!(recorded.messages.is_empty());
    assert_eq!(
        errors(&recorded),
        vec![
            ParseError::MissingMandatoryArgument("'-t'/'--test'".to_string()),
            ParseError::MissingMandatoryArgument("'-b'/'--bad'".to_string()),
            ParseError::MissingMandatoryArgument("'positional2'".to_string()),
        ]
    );

    let list = reference().declare('h', "hold", "", false, false);
    let (_, recorded) = parse(list, &["prog", "--help"]);

    assert_eq!(
        warnings(&recorded),
        vec![ParseError::UnknownArgument("--help".to_string())]
    );
}

#[test]
fn independent_parsers() {
    let (first, _) = parse(reference(), &["prog", "-a"]);
    let (second, _) = parse(reference(), &["prog", "-c", "x"]);

    assert!(first.is_present('a'));
    assert!(!first.is_present('c'));
    assert!(!second.is_present('a'));
    assert_eq!(second.value('c'), Some("x"));
}

#[test]
fn help_token_consumed_as_value() {
    let (arguments, recorded) = parse(reference(), &["prog", "-c", "-h"]);

    assert_eq!(arguments.value('c'), Some("-h"));
    assert!(!arguments.is_present('h'));
    assert!(!arguments.help_requested());
    assert!(recorded.messages.is_empty());
    assert_eq!(recorded.errors.len(), 3);
}

#[test]
fn empty_argv() {
    let (arguments, recorded) = parse(reference(), &[]);

    assert!(arguments.missing_mandatory());
    assert_eq!(recorded.errors.len(), 3);
    assert!(recorded.warnings.is_empty());
}

#[test]
fn unicode_and_empty_values() {
    let (arguments, recorded) = parse(reference(), &["prog", "-t", "-b", "", "größe"]);

    assert_eq!(arguments.value('b'), Some(""));
    assert_eq!(arguments.value('q'), Some("größe"));
    assert!(recorded.is_empty());
}
