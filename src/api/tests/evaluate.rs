use crate::config::Settings;
use crate::*;

fn product(source: &str, settings: &Settings) -> String {
    match evaluate_with(source, settings) {
        Ok(evaluation) => evaluation.to_string(),
        Err(errors) => panic!("'{}' failed: {:?}", source, errors),
    }
}

#[test]
fn test_evaluate_with_defaults() {
    assert_eq!(evaluate("[42 [4 0 1]]").unwrap().to_string(), "43");
    assert_eq!(evaluate("+[1 2]").unwrap(), Evaluation::Crash(Crash::IncrementOfCell));
}

#[test]
fn test_settings_do_not_change_products() {
    let relaxed = Settings {
        strict: false,
        quick_brackets: false,
    };
    for source in [
        "[42 [6 [1 0] [4 0 1] [1 233]]]",
        "[42 [7 [4 0 1] [4 0 1]]]",
        "[42 [8 [4 0 1] [0 1]]]",
        "[[132 19] [10 37 [4 0 3]]]",
    ] {
        assert_eq!(
            product(source, &Settings::default()),
            product(source, &relaxed),
            "{}",
            source
        );
    }
}

#[test]
fn test_syntax_errors_come_before_reduction() {
    let errors = evaluate("*[42 [4 0 1]").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unclosed"));
}

#[test]
fn test_every_lexer_error_is_reported() {
    let errors = evaluate("*[a 1 b]").unwrap_err();
    assert_eq!(errors.len(), 2);
}
