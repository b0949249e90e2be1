use crate::config::Settings;
use crate::syntax::brackets::{normalize, BracketMode};
use crate::*;

const EXACT: Settings = Settings {
    strict: true,
    quick_brackets: false,
};

fn modes() -> [Settings; 2] {
    [Settings::default(), EXACT]
}

fn read_text(source: &str, settings: &Settings) -> String {
    match read(source, settings) {
        Ok(expr) => expr.to_string(),
        Err(errors) => panic!("'{}' failed: {:?}", source, errors),
    }
}

fn first_error(source: &str) -> Diagnostic {
    match parse(source, &Settings::default()) {
        Ok(term) => panic!("'{}' parsed as {}", source, term),
        Err(mut errors) => errors.remove(0),
    }
}

#[test]
fn test_implicit_apply_prefix() {
    for settings in modes() {
        assert_eq!(read_text("[42 [4 0 1]]", &settings), "*[42 [4 [0 1]]]");
        assert_eq!(read_text("+7", &settings), "+7");
    }
}

#[test]
fn test_normalizes_long_groups() {
    for settings in modes() {
        assert_eq!(read_text("?[1 2 3 4]", &settings), "?[1 [2 [3 4]]]");
        assert_eq!(
            read_text("[42 [8 [1 0] 8 [1 6 [5 [0 7] 4 0 6] [0 6] 9 2 [0 2] [4 0 6] 0 7] 9 2 0 1]]", &settings),
            "*[42 [8 [[1 0] [8 [[1 [6 [[5 [[0 7] [4 [0 6]]]] [[0 6] [9 [2 [[0 2] [[4 [0 6]] [0 7]]]]]]]]] [9 [2 [0 1]]]]]]]]",
        );
    }
}

#[test]
fn test_normalizing_twice_changes_nothing() {
    for settings in modes() {
        let once = read("?[1 2 3 4]", &settings).unwrap();
        for mode in [BracketMode::Exact, BracketMode::Quick] {
            assert_eq!(normalize(&once, mode).unwrap().to_string(), once.to_string());
        }
    }
}

#[test]
fn test_dotted_atoms() {
    assert_eq!(read_text("+1.000.000", &Settings::default()), "+1000000");
}

#[test]
fn test_unmatched_brackets_are_syntax_errors() {
    assert!(first_error("*[1 2").message.contains("unclosed"));
    assert!(first_error("*[1 2]]").message.contains("unmatched"));
    assert!(first_error("]").message.contains("unmatched"));
}

#[test]
fn test_leftover_tokens() {
    let err = first_error("+1 2");
    assert!(err.message.contains("after the expression"));
    assert_eq!(err.span, span::Span::new(3, 4));
}

#[test]
fn test_short_groups_are_rejected() {
    for settings in modes() {
        assert!(parse("*[1 [2]]", &settings).is_err());
        assert!(parse("?[]", &settings).is_err());
    }
}

#[test]
fn test_empty_and_invalid_input() {
    assert!(first_error("").message.contains("end of input"));
    assert!(first_error("   ").message.contains("end of input"));
    assert!(first_error("+").message.contains("no operand"));
    assert!(first_error("*[1 a]").message.contains("unexpected character 'a'"));
}
