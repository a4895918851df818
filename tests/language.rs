use std::fs;

use lexcalc::{
    EvalError, Token, TokenKind,
    error::{ParseError, RuntimeError},
    evaluate,
    interpreter::evaluator::Evaluator,
};
use num_bigint::BigUint;
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = evaluate(&expression);
            match expected.as_str() {
                "error" => assert!(result.is_err(),
                                   "Case {} in {:?} succeeded but was expected to fail: {}",
                                   i + 1,
                                   path,
                                   expression),
                value => {
                    let value: f64 = value.parse()
                                          .unwrap_or_else(|e| panic!("Bad expectation {value:?}: {e}"));
                    match result {
                        Ok(actual) => assert_eq!(actual,
                                                 value,
                                                 "Case {} in {:?}: {}",
                                                 i + 1,
                                                 path,
                                                 expression),
                        Err(e) => panic!("Case {} in {:?} failed:\n{}\nError: {:?}",
                                         i + 1,
                                         path,
                                         expression,
                                         e),
                    }
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(expression, expected)| (expression.to_string(), expected.trim().to_string()))
           .collect()
}

fn assert_result(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn single_operations() {
    assert_result("3+5", 8.0);
    assert_result("9-4", 5.0);
    assert_result("6*7", 42.0);
    assert_result("7/2", 3.5);
    assert_result("42", 42.0);
}

#[test]
fn subtraction_can_go_negative() {
    assert_result("3-5", -2.0);
    assert_result("0-1-1", -2.0);
}

#[test]
fn left_to_right_without_precedence() {
    assert_result("2+3*4", 20.0);
    assert_result("10-2-3", 5.0);
    assert_result("8/2/2", 2.0);
    assert_result("1+2*3-4/5", 1.0);
}

#[test]
fn division_is_real_valued_from_then_on() {
    assert_result("1/2", 0.5);
    assert_result("1/2*3", 1.5);
    assert_result("1/4+1", 1.25);
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(evaluate(" 3   +   4 ").unwrap(), evaluate("3+4").unwrap());
    assert_result("\t12 *\t2\n", 24.0);
}

#[test]
fn multi_digit_literals() {
    assert_result("12+345", 357.0);
    assert_result("007+1", 8.0);
    assert_result("9007199254740991", 9_007_199_254_740_991.0);
}

#[test]
fn invalid_character_reports_position() {
    assert_eq!(assert_failure("3+x"),
               EvalError::Parse(ParseError::InvalidCharacter { character: 'x',
                                                               position:  3, }));
    assert_eq!(assert_failure("  $"),
               EvalError::Parse(ParseError::InvalidCharacter { character: '$',
                                                               position:  3, }));
}

#[test]
fn invalid_character_position_counts_characters() {
    assert_eq!(assert_failure("é"),
               EvalError::Parse(ParseError::InvalidCharacter { character: 'é',
                                                               position:  1, }));
    assert_eq!(assert_failure("1 + ü"),
               EvalError::Parse(ParseError::InvalidCharacter { character: 'ü',
                                                               position:  5, }));
}

#[test]
fn missing_operand_is_unexpected_token() {
    assert_eq!(assert_failure("3+"),
               EvalError::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    TokenKind::EndOfInput,
                                                              position: 3, }));
    assert_eq!(assert_failure("3+*4"),
               EvalError::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    TokenKind::Star,
                                                              position: 3, }));
}

#[test]
fn missing_first_operand_is_unexpected_token() {
    assert_eq!(assert_failure("-3"),
               EvalError::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    TokenKind::Minus,
                                                              position: 1, }));
    assert_eq!(assert_failure(""),
               EvalError::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    TokenKind::EndOfInput,
                                                              position: 1, }));
    assert_eq!(assert_failure("   ").position(), 4);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("1/0"),
               EvalError::Runtime(RuntimeError::DivisionByZero { position: 2 }));
    assert_eq!(assert_failure("5 - 5 / 0").position(), 7);
    assert_result("0/5", 0.0);
}

#[test]
fn large_literals_are_accepted() {
    assert_result("9007199254740993", 9_007_199_254_740_993.0);
    assert_result("9007199254740992 + 1", 9_007_199_254_740_992.0 + 1.0);
    assert_result("18446744073709551615", 18_446_744_073_709_551_615.0);
    assert_result("18446744073709551616 - 1", 18_446_744_073_709_551_616.0 - 1.0);
    assert_result("100000000000000000000000000000 / 10", 1e29 / 10.0);
}

#[test]
fn literals_beyond_f64_range_become_infinite() {
    let digits = "9".repeat(400);
    assert_result(&digits, f64::INFINITY);
    assert_result(&format!("1/{digits}"), 0.0);
}

#[test]
fn results_after_division_are_real() {
    let divided = evaluate("8/2/2").unwrap();
    assert!(divided.is_real());
    assert_eq!(divided.to_string(), "2.0");
    assert_eq!(evaluate("1/4+1").unwrap().to_string(), "1.25");
    assert_eq!(evaluate("6/3*2+1").unwrap().to_string(), "5.0");

    let whole = evaluate("2+3*4").unwrap();
    assert!(!whole.is_real());
    assert_eq!(whole.to_string(), "20");
    assert_eq!(f64::from(whole), 20.0);
}

#[test]
fn trailing_input_after_complete_expression_is_ignored() {
    assert_result("3+4abc", 7.0);
    assert_result("3x", 3.0);
    assert_result("3 4", 3.0);
    assert_result("1+1 2+2", 2.0);
}

#[test]
fn calls_share_no_state() {
    assert_result("1+1", 2.0);
    assert_failure("3+");
    assert_failure("1/0");
    assert_result("2+2", 4.0);
    assert_result("1+1", 2.0);
}

#[test]
fn error_messages_name_position() {
    assert_eq!(assert_failure("3+x").to_string(),
               "Error at position 3: Invalid character 'x'.");
    assert_eq!(assert_failure("3+").to_string(),
               "Error at position 3: Expected INTEGER, found EOF.");
    assert_eq!(assert_failure("4/0").to_string(),
               "Error at position 2: Division by zero.");
}

#[test]
fn eat_integer_checks_kind_before_consuming() {
    let mut evaluator = Evaluator::new("+ 5");
    assert_eq!(evaluator.eat_integer(),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                 found:    TokenKind::Plus,
                                                 position: 1, }));
    assert_eq!(evaluator.eat(TokenKind::Plus), Ok(Token::Plus));
    assert_eq!(evaluator.eat_integer(), Ok(BigUint::from(5u32)));
    assert_eq!(evaluator.eat(TokenKind::EndOfInput), Ok(Token::EndOfInput));
}

#[test]
fn eat_integer_reports_pending_scan_error() {
    let mut evaluator = Evaluator::new("?");
    assert_eq!(evaluator.eat_integer(),
               Err(ParseError::InvalidCharacter { character: '?',
                                                  position:  1, }));
}
