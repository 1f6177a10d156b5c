//! verbose 模式测试
//!
//! 步骤记录与普通求值的一致性

mod common;
use common::{calc, calc_verbose};
use pretty_assertions::assert_eq;
use rpn_core::{evaluate, CalculationError, Operator, Step};

#[test]
fn test_steps_for_simple_addition() {
    let (result, steps) = calc_verbose("3 4 +").unwrap();
    assert_eq!(result, 7.0);
    assert_eq!(
        steps,
        vec![
            Step::Push {
                token: "3".to_string(),
                value: 3.0,
                stack: vec![3.0],
            },
            Step::Push {
                token: "4".to_string(),
                value: 4.0,
                stack: vec![3.0, 4.0],
            },
            Step::Operation {
                operator: Operator::Add,
                operands: [3.0, 4.0],
                result: 7.0,
                stack: vec![7.0],
            },
        ]
    );
}

#[test]
fn test_push_step_keeps_original_token_text() {
    let (_, steps) = calc_verbose("+2.50 1e1 *").unwrap();
    match &steps[0] {
        Step::Push { token, value, .. } => {
            assert_eq!(token, "+2.50");
            assert_eq!(*value, 2.5);
        }
        other => panic!("expected push, got {other:?}"),
    }
}

#[test]
fn test_one_step_per_token() {
    let expr = "5 1 2 + 4 * + 3 -";
    let (_, steps) = calc_verbose(expr).unwrap();
    assert_eq!(steps.len(), expr.split_whitespace().count());
}

#[test]
fn test_snapshots_track_stack_depth() {
    let (_, steps) = calc_verbose("5 1 2 + 4 * + 3 -").unwrap();
    let depths: Vec<usize> = steps.iter().map(|s| s.stack().len()).collect();
    assert_eq!(depths, vec![1, 2, 3, 2, 3, 2, 1, 2, 1]);
    assert_eq!(steps.last().unwrap().stack(), &[14.0]);
}

#[test]
fn test_verbose_and_plain_results_match() {
    for expr in [
        "3 4 +",
        "5 1 2 + 4 * + 3 -",
        "2 3 ^",
        "15 7 1 1 + - / 3 * 2 1 1 + + -",
        "10 3 /",
        "-8 0.5 ^",
    ] {
        let plain = calc(expr).unwrap();
        let (verbose, _) = calc_verbose(expr).unwrap();
        assert!(
            plain == verbose || (plain.is_nan() && verbose.is_nan()),
            "mismatch for '{expr}': {plain} vs {verbose}"
        );
    }
}

#[test]
fn test_verbose_surfaces_same_errors() {
    for expr in ["", "3 4 invalid", "+", "3 + +", "3 +", "1 + 2", "5 0 /", "3 4 5 +"] {
        let plain = evaluate(expr, false).unwrap_err();
        let verbose = evaluate(expr, true).unwrap_err();
        assert_eq!(plain, verbose, "error mismatch for '{expr}'");
    }
}

#[test]
fn test_verbose_insufficient_operands_is_an_error() {
    assert_eq!(
        evaluate("1 + 2", true).unwrap_err(),
        CalculationError::InsufficientOperands(Operator::Add)
    );
}

#[test]
fn test_step_display_trace() {
    let (_, steps) = calc_verbose("10 4 /").unwrap();
    let lines: Vec<String> = steps.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec!["push 10 -> [10]", "push 4 -> [10, 4]", "10 / 4 = 2.5 -> [2.5]"]
    );
}
