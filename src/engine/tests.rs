use super::*;
use crate::api::parse;

const MODES: [Settings; 4] = [
    Settings { strict: true, quick_brackets: true },
    Settings { strict: true, quick_brackets: false },
    Settings { strict: false, quick_brackets: true },
    Settings { strict: false, quick_brackets: false },
];

const STRICT: Settings = Settings { strict: true, quick_brackets: false };
const RELAXED: Settings = Settings { strict: false, quick_brackets: true };

const DECREMENT: &str =
    "*[42 [8 [1 0] 8 [1 6 [5 [0 7] 4 0 6] [0 6] 9 2 [0 2] [4 0 6] 0 7] 9 2 0 1]]";

fn run(source: &str, settings: Settings) -> Evaluation {
    let term = parse(source, &settings)
        .unwrap_or_else(|errors| panic!("'{}' did not parse: {:?}", source, errors));
    Engine::new(settings).evaluate(term)
}

fn crash(source: &str, settings: Settings) -> Crash {
    match run(source, settings) {
        Evaluation::Crash(reason) => reason,
        Evaluation::Product(noun) => panic!("'{}' produced {}", source, noun),
    }
}

/// Assert the same product under every mode.
fn check(source: &str, expected: &str) {
    for settings in MODES {
        assert_eq!(
            run(source, settings).to_string(),
            expected,
            "{} under {:?}",
            source,
            settings
        );
    }
}

// --- Primitive operators ---

#[test]
fn test_cell_test() {
    check("?5", "1");
    check("?[1 2]", "0");
    check("?[1 2 3]", "0");
}

#[test]
fn test_increment() {
    check("+41", "42");
    check("+18446744073709551615", "18446744073709551616");
    for settings in MODES {
        assert_eq!(crash("+[1 2]", settings), Crash::IncrementOfCell);
    }
}

#[test]
fn test_equality() {
    check("=[7 7]", "0");
    check("=[7 8]", "1");
    check("=[[1 2] [1 2]]", "0");
    check("=[[1 2] 1 2]", "0");
    check("=[[1 2] 1 3]", "1");
}

#[test]
fn test_slot() {
    check("/[1 [4 5]]", "[4 5]");
    check("/[2 [4 5]]", "4");
    check("/[3 [4 5]]", "5");
    check("/[7 [4 5 6]]", "6");
    check("/[6 [4 5 6]]", "5");
    check("/[5 [[4 5] 6]]", "5");
    for settings in MODES {
        assert_eq!(crash("/[0 [4 5]]", settings), Crash::AxisZero);
        assert_eq!(crash("/[4 [4 5]]", settings), Crash::SlotIntoAtom);
    }
}

#[test]
fn test_nested_operators_reduce_inside_out() {
    check("+?5", "2");
    check("?+5", "1");
    check("=[+1 2]", "0");
    check("*[[+1 +2] 0 1]", "[2 3]");
}

// --- Formula axioms ---

#[test]
fn test_axioms_0_through_5() {
    check("*[57 [0 1]]", "57");
    check("*[[132 19] [0 3]]", "19");
    check("*[42 [1 153 218]]", "[153 218]");
    check("*[77 [2 [1 42] [1 1 153 218]]]", "[153 218]");
    check("*[42 [3 0 1]]", "1");
    check("*[42 [4 0 1]]", "43");
    check("*[[1 1] [5 0 1]]", "0");
}

#[test]
fn test_implicit_composition() {
    check("*[42 [[4 0 1] [3 0 1]]]", "[43 1]");
    check("*[42 [4 0 1] [3 0 1]]", "[43 1]");
}

#[test]
fn test_if_then_else() {
    check("*[42 [6 [1 0] [4 0 1] [1 233]]]", "43");
    check("*[42 [6 [1 1] [4 0 1] [1 233]]]", "233");
}

#[test]
fn test_compose_and_push() {
    check("*[42 [7 [4 0 1] [4 0 1]]]", "44");
    check("*[42 [8 [4 0 1] [0 1]]]", "[43 42]");
}

#[test]
fn test_core_arm() {
    // The core [[4 0 3] 7] fires its battery on the payload.
    check("*[0 [9 2 [1 [4 0 3] 7]]]", "8");
}

#[test]
fn test_hints_are_transparent() {
    check("*[[132 19] [10 37 [4 0 3]]]", "20");
    check("*[[132 19] [10 [1 [1 5]] [4 0 3]]]", "20");
}

#[test]
fn test_decrement_in_both_modes() {
    check(DECREMENT, "41");
}

// --- Crashes ---

#[test]
fn test_unknown_opcode() {
    for settings in MODES {
        assert_eq!(
            crash("*[42 [11 0 1]]", settings),
            Crash::UnknownOpcode(11u32.into())
        );
    }
    let huge = crash("*[42 [18446744073709551616 0 1]]", STRICT);
    assert!(matches!(huge, Crash::UnknownOpcode(_)));
}

#[test]
fn test_application_crashes() {
    assert_eq!(crash("*42", STRICT), Crash::ApplyToAtom);
    assert_eq!(crash("*[42 7]", STRICT), Crash::FormulaIsAtom);
    assert_eq!(crash("*[42 [2 1]]", STRICT), Crash::MalformedOperands { opcode: 2 });
    assert_eq!(crash("*[42 [7 1]]", RELAXED), Crash::MalformedOperands { opcode: 7 });
    assert_eq!(crash("*[42 [6 1 2]]", RELAXED), Crash::MalformedOperands { opcode: 6 });
    assert_eq!(crash("*[42 [10 1]]", STRICT), Crash::MalformedOperands { opcode: 10 });
}

#[test]
fn test_non_boolean_branch() {
    let source = "*[42 [6 [1 2] [1 3] [1 4]]]";
    assert_eq!(crash(source, RELAXED), Crash::BranchNotBoolean(Noun::atom(2u32)));
    // The strict expansion addresses past the pair of branches instead.
    assert_eq!(crash(source, STRICT), Crash::SlotIntoAtom);
}

#[test]
fn test_crash_renders_as_crash() {
    assert_eq!(run("+[1 2]", STRICT).to_string(), "CRASH");
    assert!(run("+[1 2]", STRICT).is_crash());
    assert_eq!(run("+1", STRICT).product(), Some(&Noun::atom(2u32)));
}

// --- Driving loop ---

#[test]
fn test_engine_keeps_its_settings() {
    let engine = Engine::new(RELAXED);
    assert!(!engine.settings().strict);
    assert!(Engine::default().settings().strict);
}

#[test]
fn test_reduce_pairs_cells_left_to_right() {
    let term = Term::cell(
        Term::op(Operator::Increment, Noun::atom(1u32)),
        Term::op(Operator::CellTest, Noun::atom(1u32)),
    );
    let noun = Engine::default().reduce(term);
    assert_eq!(noun, Ok(Noun::cell(Noun::atom(2u32), Noun::atom(1u32))));
}

#[test]
fn test_first_crash_wins() {
    let term = Term::cell(
        Term::op(Operator::Increment, Noun::cell(Noun::atom(1u32), Noun::atom(2u32))),
        Term::op(Operator::Equals, Noun::atom(1u32)),
    );
    assert_eq!(Engine::default().reduce(term), Err(Crash::IncrementOfCell));
}

#[test]
fn test_arm_that_reapplies_itself_makes_no_progress() {
    // The core [[9 2 0 1] 0] holds its own formula as arm 2.
    let source = "*[[[9 2 0 1] 0] [9 2 0 1]]";
    assert_eq!(crash(source, RELAXED), Crash::NoProgress);
    assert_eq!(
        crash(source, Settings { strict: false, quick_brackets: false }),
        Crash::NoProgress
    );
}
