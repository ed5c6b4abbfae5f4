//! Unit tests for the performable runners and the failure rule.

use rstest::rstest;

use super::*;

#[derive(Debug, thiserror::Error)]
#[error("access denied")]
struct Denied;

fn equals(_: &(), actual: Option<&i32>, expected: &i32) -> bool {
    actual == Some(expected)
}

fn always_true(_: &(), _: Option<&i32>, _: &i32) -> bool {
    true
}

fn between(_: &(), actual: Option<&i32>, start: &i32, end: &i32) -> bool {
    actual.is_some_and(|value| value >= start && value <= end)
}

fn positive(_: &(), actual: Option<&i32>) -> bool {
    actual.is_some_and(|value| *value > 0)
}

fn assertion_message<C>(
    check: &impl Performable<C>,
    actor: &C,
    diagnostics: &mut DiagnosticBuffer,
) -> String {
    match check.perform_as(actor, diagnostics) {
        Err(EnsureError::AssertionFailed { message }) => message,
        Err(other) => panic!("expected a generated assertion message, got {other}"),
        Ok(()) => panic!("expected the check to fail"),
    }
}

#[rstest]
#[case(true, false, false)]
#[case(false, false, true)]
#[case(true, true, true)]
#[case(false, true, false)]
fn failure_rule_covers_all_polarities(
    #[case] result: bool,
    #[case] negated: bool,
    #[case] fails: bool,
) {
    assert_eq!(is_a_failure(result, negated), fails);
}

#[test]
fn matching_value_passes() {
    let equal_to = Expectation::new("equal to", equals);
    let check = PerformableExpectation::new(Some(4), &equal_to, 4, false, "the total");
    let mut diagnostics = DiagnosticBuffer::new();
    assert!(check.perform_as(&(), &mut diagnostics).is_ok());
}

#[test]
fn mismatching_value_fails_with_comparison_message() {
    let equal_to = Expectation::new("equal to", equals);
    let check = PerformableExpectation::new(Some(3), &equal_to, 4, false, "the total");
    let mut diagnostics = DiagnosticBuffer::new();
    assert_eq!(
        assertion_message(&check, &(), &mut diagnostics),
        "Expected the total that is equal to <4> but was <3>",
    );
}

#[test]
fn negated_check_inverts_polarity() {
    let equal_to = Expectation::new("equal to", equals);
    let mut diagnostics = DiagnosticBuffer::new();

    let differs = PerformableExpectation::new(Some(3), &equal_to, 4, true, "the total");
    assert!(differs.perform_as(&(), &mut diagnostics).is_ok());

    let matches = PerformableExpectation::new(Some(4), &equal_to, 4, true, "the total");
    assert_eq!(
        assertion_message(&matches, &(), &mut diagnostics),
        "Expected the total that is not equal to <4> but was <4>",
    );
}

#[test]
fn always_true_check_fails_when_negated() {
    // The failure rule is applied verbatim, so a constant-true check reports
    // failure under negation.
    let truthy = Expectation::new("anything", always_true);
    let mut diagnostics = DiagnosticBuffer::new();
    let check = PerformableExpectation::new(Some(1), &truthy, 1, true, "a value");
    assert!(check.perform_as(&(), &mut diagnostics).is_err());
}

#[test]
fn missing_actual_is_passed_through_to_the_check() {
    let equal_to = Expectation::new("equal to", equals);
    let check = PerformableExpectation::new(None, &equal_to, 4, false, "the total");
    let mut diagnostics = DiagnosticBuffer::new();
    assert_eq!(
        assertion_message(&check, &(), &mut diagnostics),
        "Expected the total that is equal to <4> but was a missing value",
    );
}

#[test]
fn diagnostics_reset_before_every_evaluation() {
    let equal_to = Expectation::new("equal to", equals);
    let mut diagnostics = DiagnosticBuffer::new();
    diagnostics.record("context from a previous check");

    let passing = PerformableExpectation::new(Some(4), &equal_to, 4, false, "the total");
    assert!(passing.perform_as(&(), &mut diagnostics).is_ok());
    assert!(diagnostics.is_empty());

    diagnostics.record("context from a previous check");
    let failing = PerformableExpectation::new(Some(3), &equal_to, 4, false, "the total");
    assert!(failing.perform_as(&(), &mut diagnostics).is_err());
    assert!(diagnostics.is_empty());
}

#[test]
fn description_reflects_negation() {
    let equal_to = Expectation::new("equal to", equals);
    let check = PerformableExpectation::new(Some(3), &equal_to, 4, true, "the total");
    assert_eq!(check.description(), "the total that is not equal to <4>");
}

#[test]
fn range_check_accepts_values_within_bounds() {
    let in_range = RangeExpectation::new("between", between);
    let mut diagnostics = DiagnosticBuffer::new();

    let inside = PerformableRange::new(Some(5), &in_range, 1, 10, false, "the total");
    assert!(inside.perform_as(&(), &mut diagnostics).is_ok());

    let outside = PerformableRange::new(Some(12), &in_range, 1, 10, false, "the total");
    assert_eq!(
        assertion_message(&outside, &(), &mut diagnostics),
        "Expected the total that is between <1> and <10> but was <12>",
    );
}

#[test]
fn predicate_check_reports_generated_message_by_default() {
    let is_positive = PredicateExpectation::new("positive", positive);
    let check = PerformablePredicate::new(Some(-2), &is_positive, false, "the balance");
    let mut diagnostics = DiagnosticBuffer::new();
    assert_eq!(
        assertion_message(&check, &(), &mut diagnostics),
        "Expected the balance that is positive but was <-2>",
    );
}

#[test]
fn or_else_throw_surfaces_the_supplied_error() {
    let is_positive = PredicateExpectation::new("positive", positive);
    let check = PerformablePredicate::new(Some(-2), &is_positive, false, "the balance")
        .or_else_throw(Denied);
    let mut diagnostics = DiagnosticBuffer::new();
    match check.perform_as(&(), &mut diagnostics) {
        Err(EnsureError::Overridden(error)) => assert_eq!(error.to_string(), "access denied"),
        Err(other) => panic!("expected the override error, got {other}"),
        Ok(()) => panic!("expected the check to fail"),
    }
}

#[test]
fn or_else_throw_leaves_the_original_runner_unchanged() {
    let is_positive = PredicateExpectation::new("positive", positive);
    let original = PerformablePredicate::new(Some(-2), &is_positive, false, "the balance");
    let overridden = original.or_else_throw(Denied);
    let mut diagnostics = DiagnosticBuffer::new();

    assert!(matches!(
        overridden.perform_as(&(), &mut diagnostics),
        Err(EnsureError::Overridden(_)),
    ));
    assert!(matches!(
        original.perform_as(&(), &mut diagnostics),
        Err(EnsureError::AssertionFailed { .. }),
    ));
}

#[test]
fn placeholders_never_fail() {
    let mut diagnostics = DiagnosticBuffer::new();
    let single = PerformableExpectation::<(), i32, i32>::placeholder();
    assert!(single.perform_as(&(), &mut diagnostics).is_ok());
    let range = PerformableRange::<(), i32, i32>::placeholder();
    assert!(range.perform_as(&(), &mut diagnostics).is_ok());
    let predicate = PerformablePredicate::<(), i32>::placeholder();
    assert!(predicate.perform_as(&(), &mut diagnostics).is_ok());
}
