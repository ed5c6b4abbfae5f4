//! Expectation shapes applied by the performable runners.
//!
//! An expectation is a named, immutable check constructed once and reused
//! across invocations. Three shapes exist, matching the three runner
//! variants: single-value ([`Expectation`]), range ([`RangeExpectation`]) and
//! predicate ([`PredicateExpectation`]). Each shape pairs its apply function
//! with two message generators: `describe` renders the human-readable check
//! description and `compare` renders the failure message contrasting the
//! actual value with what was expected. Default generators are derived from
//! the expectation name; callers may replace either through the builder
//! methods.

use std::fmt;

type ApplyFn<C, A, E> = Box<dyn Fn(&C, Option<&A>, &E) -> bool + Send + Sync>;
type DescribeFn<E> = Box<dyn Fn(&E, bool, &str) -> String + Send + Sync>;
type CompareFn<A, E> = Box<dyn Fn(Option<&A>, &E, bool, &str) -> String + Send + Sync>;

type RangeApplyFn<C, A, E> = Box<dyn Fn(&C, Option<&A>, &E, &E) -> bool + Send + Sync>;
type RangeDescribeFn<E> = Box<dyn Fn(&E, &E, bool, &str) -> String + Send + Sync>;
type RangeCompareFn<A, E> = Box<dyn Fn(Option<&A>, &E, &E, bool, &str) -> String + Send + Sync>;

type PredicateApplyFn<C, A> = Box<dyn Fn(&C, Option<&A>) -> bool + Send + Sync>;
type PredicateDescribeFn = Box<dyn Fn(bool, &str) -> String + Send + Sync>;
type PredicateCompareFn<A> = Box<dyn Fn(Option<&A>, bool, &str) -> String + Send + Sync>;

fn negation(negated: bool) -> &'static str {
    if negated { "not " } else { "" }
}

fn format_actual<A: fmt::Debug>(actual: Option<&A>) -> String {
    actual.map_or_else(
        || String::from("a missing value"),
        |value| format!("<{value:?}>"),
    )
}

/// A named check comparing an actual value against a single expected value.
///
/// The apply function receives the actor context, the (possibly missing)
/// actual value, and the expected value.
///
/// # Examples
///
/// ```
/// use bdd_ensure::Expectation;
///
/// fn equals(_: &(), actual: Option<&i32>, expected: &i32) -> bool {
///     actual == Some(expected)
/// }
///
/// let equal_to = Expectation::new("equal to", equals);
/// assert!(equal_to.apply(&(), Some(&4), &4));
/// assert_eq!(
///     equal_to.describe(&4, false, "a value"),
///     "a value that is equal to <4>",
/// );
/// ```
pub struct Expectation<C, A, E> {
    name: String,
    apply: ApplyFn<C, A, E>,
    describer: DescribeFn<E>,
    comparator: CompareFn<A, E>,
}

impl<C, A, E> Expectation<C, A, E>
where
    A: fmt::Debug,
    E: fmt::Debug,
{
    /// Create an expectation with default message generators derived from
    /// `name`.
    ///
    /// The name reads as a predicate phrase completing "a value that is
    /// ...", for example `"equal to"` or `"greater than"`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        apply: impl Fn(&C, Option<&A>, &E) -> bool + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        let describer: DescribeFn<E> = {
            let name = name.clone();
            Box::new(move |expected: &E, negated: bool, expected_description: &str| {
                format!(
                    "{expected_description} that is {}{name} <{expected:?}>",
                    negation(negated),
                )
            })
        };
        let comparator: CompareFn<A, E> = {
            let name = name.clone();
            Box::new(
                move |actual: Option<&A>, expected: &E, negated: bool, expected_description: &str| {
                    format!(
                        "Expected {expected_description} that is {}{name} <{expected:?}> but was {}",
                        negation(negated),
                        format_actual(actual),
                    )
                },
            )
        };
        Self {
            name,
            apply: Box::new(apply),
            describer,
            comparator,
        }
    }
}

impl<C, A, E> Expectation<C, A, E> {
    /// The expectation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the description generator.
    #[must_use]
    pub fn with_describer(
        mut self,
        describer: impl Fn(&E, bool, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.describer = Box::new(describer);
        self
    }

    /// Replace the comparison-message generator.
    #[must_use]
    pub fn with_comparator(
        mut self,
        comparator: impl Fn(Option<&A>, &E, bool, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Evaluate the check against the actor context and stored values.
    pub fn apply(&self, actor: &C, actual: Option<&A>, expected: &E) -> bool {
        (self.apply)(actor, actual, expected)
    }

    /// Render the human-readable description of the check.
    #[must_use]
    pub fn describe(&self, expected: &E, negated: bool, expected_description: &str) -> String {
        (self.describer)(expected, negated, expected_description)
    }

    /// Render the failure message contrasting actual and expected values.
    #[must_use]
    pub fn compare(
        &self,
        actual: Option<&A>,
        expected: &E,
        negated: bool,
        expected_description: &str,
    ) -> String {
        (self.comparator)(actual, expected, negated, expected_description)
    }
}

impl<C, A, E> fmt::Debug for Expectation<C, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named check comparing an actual value against a start and end bound.
///
/// # Examples
///
/// ```
/// use bdd_ensure::RangeExpectation;
///
/// fn between(_: &(), actual: Option<&i32>, start: &i32, end: &i32) -> bool {
///     actual.is_some_and(|value| value >= start && value <= end)
/// }
///
/// let in_range = RangeExpectation::new("between", between);
/// assert!(in_range.apply(&(), Some(&5), &1, &10));
/// assert_eq!(
///     in_range.describe(&1, &10, false, "a value"),
///     "a value that is between <1> and <10>",
/// );
/// ```
pub struct RangeExpectation<C, A, E> {
    name: String,
    apply: RangeApplyFn<C, A, E>,
    describer: RangeDescribeFn<E>,
    comparator: RangeCompareFn<A, E>,
}

impl<C, A, E> RangeExpectation<C, A, E>
where
    A: fmt::Debug,
    E: fmt::Debug,
{
    /// Create a range expectation with default message generators derived
    /// from `name`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        apply: impl Fn(&C, Option<&A>, &E, &E) -> bool + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        let describer: RangeDescribeFn<E> = {
            let name = name.clone();
            Box::new(
                move |start: &E, end: &E, negated: bool, expected_description: &str| {
                    format!(
                        "{expected_description} that is {}{name} <{start:?}> and <{end:?}>",
                        negation(negated),
                    )
                },
            )
        };
        let comparator: RangeCompareFn<A, E> = {
            let name = name.clone();
            Box::new(
                move |actual: Option<&A>,
                      start: &E,
                      end: &E,
                      negated: bool,
                      expected_description: &str| {
                    format!(
                        "Expected {expected_description} that is {}{name} <{start:?}> and <{end:?}> but was {}",
                        negation(negated),
                        format_actual(actual),
                    )
                },
            )
        };
        Self {
            name,
            apply: Box::new(apply),
            describer,
            comparator,
        }
    }
}

impl<C, A, E> RangeExpectation<C, A, E> {
    /// The expectation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the description generator.
    #[must_use]
    pub fn with_describer(
        mut self,
        describer: impl Fn(&E, &E, bool, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.describer = Box::new(describer);
        self
    }

    /// Replace the comparison-message generator.
    #[must_use]
    pub fn with_comparator(
        mut self,
        comparator: impl Fn(Option<&A>, &E, &E, bool, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Evaluate the check against the actor context and stored values.
    pub fn apply(&self, actor: &C, actual: Option<&A>, start: &E, end: &E) -> bool {
        (self.apply)(actor, actual, start, end)
    }

    /// Render the human-readable description of the check.
    #[must_use]
    pub fn describe(&self, start: &E, end: &E, negated: bool, expected_description: &str) -> String {
        (self.describer)(start, end, negated, expected_description)
    }

    /// Render the failure message contrasting actual value and bounds.
    #[must_use]
    pub fn compare(
        &self,
        actual: Option<&A>,
        start: &E,
        end: &E,
        negated: bool,
        expected_description: &str,
    ) -> String {
        (self.comparator)(actual, start, end, negated, expected_description)
    }
}

impl<C, A, E> fmt::Debug for RangeExpectation<C, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeExpectation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named check evaluating the actual value on its own, without an expected
/// value.
///
/// # Examples
///
/// ```
/// use bdd_ensure::PredicateExpectation;
///
/// fn empty(_: &(), actual: Option<&String>) -> bool {
///     actual.is_some_and(String::is_empty)
/// }
///
/// let is_empty = PredicateExpectation::new("empty", empty);
/// assert!(is_empty.apply(&(), Some(&String::new())));
/// assert_eq!(is_empty.describe(true, "a value"), "a value that is not empty");
/// ```
pub struct PredicateExpectation<C, A> {
    name: String,
    apply: PredicateApplyFn<C, A>,
    describer: PredicateDescribeFn,
    comparator: PredicateCompareFn<A>,
}

impl<C, A> PredicateExpectation<C, A>
where
    A: fmt::Debug,
{
    /// Create a predicate expectation with default message generators
    /// derived from `name`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        apply: impl Fn(&C, Option<&A>) -> bool + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        let describer: PredicateDescribeFn = {
            let name = name.clone();
            Box::new(move |negated: bool, expected_description: &str| {
                format!(
                    "{expected_description} that is {}{name}",
                    negation(negated),
                )
            })
        };
        let comparator: PredicateCompareFn<A> = {
            let name = name.clone();
            Box::new(
                move |actual: Option<&A>, negated: bool, expected_description: &str| {
                    format!(
                        "Expected {expected_description} that is {}{name} but was {}",
                        negation(negated),
                        format_actual(actual),
                    )
                },
            )
        };
        Self {
            name,
            apply: Box::new(apply),
            describer,
            comparator,
        }
    }
}

impl<C, A> PredicateExpectation<C, A> {
    /// The expectation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the description generator.
    #[must_use]
    pub fn with_describer(
        mut self,
        describer: impl Fn(bool, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.describer = Box::new(describer);
        self
    }

    /// Replace the comparison-message generator.
    #[must_use]
    pub fn with_comparator(
        mut self,
        comparator: impl Fn(Option<&A>, bool, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Evaluate the check against the actor context and stored value.
    pub fn apply(&self, actor: &C, actual: Option<&A>) -> bool {
        (self.apply)(actor, actual)
    }

    /// Render the human-readable description of the check.
    #[must_use]
    pub fn describe(&self, negated: bool, expected_description: &str) -> String {
        (self.describer)(negated, expected_description)
    }

    /// Render the failure message for the actual value.
    #[must_use]
    pub fn compare(&self, actual: Option<&A>, negated: bool, expected_description: &str) -> String {
        (self.comparator)(actual, negated, expected_description)
    }
}

impl<C, A> fmt::Debug for PredicateExpectation<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateExpectation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equals(_: &(), actual: Option<&i32>, expected: &i32) -> bool {
        actual == Some(expected)
    }

    #[test]
    fn default_messages_include_polarity_and_values() {
        let equal_to = Expectation::new("equal to", equals);
        assert_eq!(
            equal_to.describe(&4, true, "the total"),
            "the total that is not equal to <4>",
        );
        assert_eq!(
            equal_to.compare(Some(&3), &4, false, "the total"),
            "Expected the total that is equal to <4> but was <3>",
        );
    }

    #[test]
    fn missing_actual_is_reported_in_comparison() {
        let equal_to = Expectation::new("equal to", equals);
        assert_eq!(
            equal_to.compare(None, &4, false, "a value"),
            "Expected a value that is equal to <4> but was a missing value",
        );
    }

    #[test]
    fn custom_generators_replace_the_defaults() {
        let equal_to = Expectation::new("equal to", equals)
            .with_describer(|expected, _, _| format!("exactly {expected}"))
            .with_comparator(|_, expected, _, _| format!("wanted {expected}"));
        assert_eq!(equal_to.describe(&4, false, "a value"), "exactly 4");
        assert_eq!(equal_to.compare(Some(&3), &4, false, "a value"), "wanted 4");
    }

    #[test]
    fn range_messages_render_both_bounds() {
        fn between(_: &(), actual: Option<&i32>, start: &i32, end: &i32) -> bool {
            actual.is_some_and(|value| value >= start && value <= end)
        }
        let in_range = RangeExpectation::new("between", between);
        assert!(in_range.apply(&(), Some(&5), &1, &10));
        assert!(!in_range.apply(&(), None, &1, &10));
        assert_eq!(
            in_range.compare(Some(&12), &1, &10, false, "a value"),
            "Expected a value that is between <1> and <10> but was <12>",
        );
    }

    #[test]
    fn predicate_messages_omit_expected_values() {
        fn empty(_: &(), actual: Option<&String>) -> bool {
            actual.is_some_and(String::is_empty)
        }
        let is_empty = PredicateExpectation::new("empty", empty);
        assert_eq!(is_empty.describe(false, "a value"), "a value that is empty");
        assert_eq!(
            is_empty.compare(Some(&String::from("x")), true, "a value"),
            "Expected a value that is not empty but was <\"x\">",
        );
    }
}
