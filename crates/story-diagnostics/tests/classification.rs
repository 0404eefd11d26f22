// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! End-to-end classification and rendering.

use proptest::prelude::*;
use rstest::rstest;
use story_ast::{CompilerError, ErrorCode, Token, Tree};
use story_desugar::Synthesizer;
use story_diagnostics::{Failure, Location, RenderConfig, StoryError};

fn token(line: usize, column: usize, expected: &[&str]) -> Failure {
    Failure::UnexpectedToken {
        location: Location::new(line, column),
        token: "$END".to_string(),
        expected: expected.iter().map(|s| s.to_string()).collect(),
    }
}

fn characters(line: usize, column: usize) -> Failure {
    Failure::UnexpectedCharacters {
        location: Location::new(line, column),
        allowed: None,
    }
}

#[rstest]
#[case("a =", token(1, 4, &["NAME"]), "E0007")]
#[case("if a == 1:\n  x = 2", token(1, 10, &["NAME"]), "E0005")]
#[case("if a\nx = 1", token(2, 1, &["_INDENT"]), "E0004")]
#[case("x = 1\n  foo bar", characters(2, 7), "E0003")]
#[case("funtion foo returns int", characters(1, 1), "E0006")]
#[case("x = 1 @", characters(1, 7), "E0002")]
#[case("a b c", token(1, 3, &["EQUALS"]), "E0008")]
fn scenarios(#[case] source: &str, #[case] failure: Failure, #[case] code: &str) {
    let error = StoryError::new(failure, source);
    assert_eq!(error.code().code(), code);
    assert!(error.short_message().starts_with(code));
}

#[test]
fn error_on_hoisted_value_points_at_source_line() {
    let statement = Tree::new("line", vec![Token::new("NAME", "say", 12, 1, 4).into()]);
    let mut block = Tree::new("block", vec![statement.into()]);
    let value = Tree::new("entity", vec![Token::new("NAME", "f", 12, 5, 6).into()]);

    let mut synth = Synthesizer::new(&mut block).unwrap();
    let assignment = synth.inject_assignment(value).unwrap();
    assert_eq!(assignment.line().unwrap().to_string(), "12.1");

    // The synthetic path has no column; the hoisted value keeps its own.
    let hoisted = assignment.node("assignment_fragment.entity").unwrap();
    assert_eq!(hoisted.line().unwrap().to_string(), "12.1");
    let failure = CompilerError::new(ErrorCode::UnidentifiedError).at(hoisted);
    let error = StoryError::new(failure, "x = 1\n".repeat(11) + "say f")
        .with_config(RenderConfig::plain());
    assert_eq!(error.failure().location(), Some(Location::new(12, 5).with_end_column(6)));
    assert!(error.message().contains("12|    say f"));
}

#[test]
fn duplicate_function_is_semantic() {
    let first = Tree::new("function", vec![Token::new("NAME", "greet", 1, 10, 15).into()]);
    let second = Tree::new("function", vec![Token::new("NAME", "greet", 4, 10, 15).into()]);
    let previous = first.line().unwrap().clone();
    let failure = CompilerError::function_already_declared("greet", previous).at(&second);

    let source = "function greet\n  say hi\n\nfunction greet\n  say bye";
    let error = StoryError::new(failure, source).with_config(RenderConfig::plain());
    assert_eq!(error.code(), ErrorCode::FunctionAlreadyDeclared);
    assert_eq!(
        error.message(),
        "Error: syntax error in story at line 4, column 10\n\n\
         4|    function greet\n               ^^^^^\n\n\
         E0009: Function `greet` has already been declared at line 1"
    );
}

fn failure_strategy() -> impl Strategy<Value = Failure> {
    let location = (0usize..8, 0usize..40).prop_map(|(line, column)| Location::new(line, column));
    let names = prop::collection::vec("[_A-Z]{1,8}", 0..4);
    prop_oneof![
        (location.clone(), "[^\n]{0,4}", names.clone()).prop_map(|(location, token, expected)| {
            Failure::UnexpectedToken {
                location,
                token,
                expected,
            }
        }),
        (location, prop::option::of(names))
            .prop_map(|(location, allowed)| Failure::UnexpectedCharacters { location, allowed }),
        "[^\n]{0,20}".prop_map(Failure::Message),
    ]
}

proptest! {
    #[test]
    fn every_failure_gets_a_code(source in "[ -~\n]{0,80}", failure in failure_strategy()) {
        let error = StoryError::new(failure, source).with_config(RenderConfig::plain());
        prop_assert!(ErrorCode::ALL.contains(&error.code()));
        let message = error.message();
        if error.failure().location().is_some() {
            prop_assert!(message.contains(error.code().code()));
        }
        prop_assert!(error.short_message().starts_with(error.code().code()));
    }
}
