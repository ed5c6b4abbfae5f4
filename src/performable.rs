//! Performable runners binding values to expectations.
//!
//! A runner is built immediately before a check executes and discarded
//! afterwards. Executing it resets the injected diagnostic buffer, applies
//! the expectation against the actor context, and surfaces a failure when the
//! polarity-adjusted result indicates one. Failures always propagate; there
//! is no retry or recovery at this layer.

use std::error::Error;
use std::sync::Arc;

use crate::diagnostics::DiagnosticBuffer;
use crate::expectation::{Expectation, PredicateExpectation, RangeExpectation};

/// Failure surfaced by a performable runner.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EnsureError {
    /// The expectation's polarity-adjusted result indicated failure; carries
    /// the generated comparison message.
    #[error("{message}")]
    AssertionFailed {
        /// Message produced by the expectation's comparison generator.
        message: String,
    },
    /// A caller-supplied error attached via
    /// [`PerformablePredicate::or_else_throw`], surfaced verbatim in place of
    /// the generated message.
    #[error(transparent)]
    Overridden(Arc<dyn Error + Send + Sync>),
}

/// An action bound to input data that an actor can execute.
pub trait Performable<C> {
    /// Execute the action against the actor context.
    ///
    /// The diagnostic buffer is reset before every evaluation so that error
    /// context from a previous check does not leak into this one.
    ///
    /// # Errors
    /// Returns [`EnsureError`] when the check fails.
    fn perform_as(
        &self,
        actor: &C,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<(), EnsureError>;
}

/// Failure rule shared by every runner. An always-true check combined with
/// `negated` therefore reports failure.
pub(crate) const fn is_a_failure(result: bool, negated: bool) -> bool {
    (!negated && !result) || (negated && result)
}

const PLACEHOLDER_DESCRIPTION: &str = "a placeholder check";

#[derive(Debug)]
enum Check<'a, C, A, E> {
    Active {
        expectation: &'a Expectation<C, A, E>,
        expected: E,
    },
    // Framework instantiation hook; evaluates to a constant pass.
    Placeholder,
}

/// Runner comparing an actual value against a single expected value.
///
/// # Examples
///
/// ```
/// use bdd_ensure::{DiagnosticBuffer, Expectation, Performable, PerformableExpectation};
///
/// fn equals(_: &(), actual: Option<&i32>, expected: &i32) -> bool {
///     actual == Some(expected)
/// }
///
/// let equal_to = Expectation::new("equal to", equals);
/// let check = PerformableExpectation::new(Some(4), &equal_to, 4, false, "the total");
/// let mut diagnostics = DiagnosticBuffer::new();
/// assert!(check.perform_as(&(), &mut diagnostics).is_ok());
/// ```
#[derive(Debug)]
pub struct PerformableExpectation<'a, C, A, E> {
    actual: Option<A>,
    check: Check<'a, C, A, E>,
    negated: bool,
    expected_description: String,
}

impl<'a, C, A, E> PerformableExpectation<'a, C, A, E> {
    /// Bind an actual value, an expectation and an expected value into an
    /// executable check.
    #[must_use]
    pub fn new(
        actual: Option<A>,
        expectation: &'a Expectation<C, A, E>,
        expected: E,
        negated: bool,
        expected_description: impl Into<String>,
    ) -> Self {
        Self {
            actual,
            check: Check::Active {
                expectation,
                expected,
            },
            negated,
            expected_description: expected_description.into(),
        }
    }

    /// Internal use only. Trivially-passing runner kept for framework
    /// instantiation; not part of the public contract.
    #[doc(hidden)]
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            actual: None,
            check: Check::Placeholder,
            negated: false,
            expected_description: String::from(PLACEHOLDER_DESCRIPTION),
        }
    }

    /// Human-readable description of the check, computed on demand.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.check {
            Check::Active {
                expectation,
                expected,
            } => expectation.describe(expected, self.negated, &self.expected_description),
            Check::Placeholder => String::from(PLACEHOLDER_DESCRIPTION),
        }
    }
}

impl<C, A, E> Performable<C> for PerformableExpectation<'_, C, A, E> {
    fn perform_as(
        &self,
        actor: &C,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<(), EnsureError> {
        diagnostics.reset();
        let result = match &self.check {
            Check::Active {
                expectation,
                expected,
            } => expectation.apply(actor, self.actual.as_ref(), expected),
            Check::Placeholder => true,
        };
        if is_a_failure(result, self.negated) {
            let message = match &self.check {
                Check::Active {
                    expectation,
                    expected,
                } => expectation.compare(
                    self.actual.as_ref(),
                    expected,
                    self.negated,
                    &self.expected_description,
                ),
                Check::Placeholder => String::from(PLACEHOLDER_DESCRIPTION),
            };
            log::debug!("expectation failed: {message}");
            return Err(EnsureError::AssertionFailed { message });
        }
        Ok(())
    }
}

#[derive(Debug)]
enum RangeCheck<'a, C, A, E> {
    Active {
        expectation: &'a RangeExpectation<C, A, E>,
        start: E,
        end: E,
    },
    Placeholder,
}

/// Runner comparing an actual value against a start and end bound.
///
/// # Examples
///
/// ```
/// use bdd_ensure::{DiagnosticBuffer, Performable, PerformableRange, RangeExpectation};
///
/// fn between(_: &(), actual: Option<&i32>, start: &i32, end: &i32) -> bool {
///     actual.is_some_and(|value| value >= start && value <= end)
/// }
///
/// let in_range = RangeExpectation::new("between", between);
/// let check = PerformableRange::new(Some(5), &in_range, 1, 10, false, "the total");
/// let mut diagnostics = DiagnosticBuffer::new();
/// assert!(check.perform_as(&(), &mut diagnostics).is_ok());
/// ```
#[derive(Debug)]
pub struct PerformableRange<'a, C, A, E> {
    actual: Option<A>,
    check: RangeCheck<'a, C, A, E>,
    negated: bool,
    expected_description: String,
}

impl<'a, C, A, E> PerformableRange<'a, C, A, E> {
    /// Bind an actual value, a range expectation and both bounds into an
    /// executable check.
    #[must_use]
    pub fn new(
        actual: Option<A>,
        expectation: &'a RangeExpectation<C, A, E>,
        start: E,
        end: E,
        negated: bool,
        expected_description: impl Into<String>,
    ) -> Self {
        Self {
            actual,
            check: RangeCheck::Active {
                expectation,
                start,
                end,
            },
            negated,
            expected_description: expected_description.into(),
        }
    }

    /// Internal use only. Trivially-passing runner kept for framework
    /// instantiation; not part of the public contract.
    #[doc(hidden)]
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            actual: None,
            check: RangeCheck::Placeholder,
            negated: false,
            expected_description: String::from(PLACEHOLDER_DESCRIPTION),
        }
    }

    /// Human-readable description of the check, computed on demand.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.check {
            RangeCheck::Active {
                expectation,
                start,
                end,
            } => expectation.describe(start, end, self.negated, &self.expected_description),
            RangeCheck::Placeholder => String::from(PLACEHOLDER_DESCRIPTION),
        }
    }
}

impl<C, A, E> Performable<C> for PerformableRange<'_, C, A, E> {
    fn perform_as(
        &self,
        actor: &C,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<(), EnsureError> {
        diagnostics.reset();
        let result = match &self.check {
            RangeCheck::Active {
                expectation,
                start,
                end,
            } => expectation.apply(actor, self.actual.as_ref(), start, end),
            RangeCheck::Placeholder => true,
        };
        if is_a_failure(result, self.negated) {
            let message = match &self.check {
                RangeCheck::Active {
                    expectation,
                    start,
                    end,
                } => expectation.compare(
                    self.actual.as_ref(),
                    start,
                    end,
                    self.negated,
                    &self.expected_description,
                ),
                RangeCheck::Placeholder => String::from(PLACEHOLDER_DESCRIPTION),
            };
            log::debug!("range expectation failed: {message}");
            return Err(EnsureError::AssertionFailed { message });
        }
        Ok(())
    }
}

#[derive(Debug)]
enum PredicateCheck<'a, C, A> {
    Active {
        expectation: &'a PredicateExpectation<C, A>,
    },
    Placeholder,
}

/// Runner evaluating a predicate over the actual value alone.
///
/// # Examples
///
/// ```
/// use bdd_ensure::{DiagnosticBuffer, Performable, PerformablePredicate, PredicateExpectation};
///
/// fn positive(_: &(), actual: Option<&i32>) -> bool {
///     actual.is_some_and(|value| *value > 0)
/// }
///
/// let is_positive = PredicateExpectation::new("positive", positive);
/// let check = PerformablePredicate::new(Some(3), &is_positive, false, "the balance");
/// let mut diagnostics = DiagnosticBuffer::new();
/// assert!(check.perform_as(&(), &mut diagnostics).is_ok());
/// ```
#[derive(Debug)]
pub struct PerformablePredicate<'a, C, A> {
    actual: Option<A>,
    check: PredicateCheck<'a, C, A>,
    negated: bool,
    expected_description: String,
    override_error: Option<Arc<dyn Error + Send + Sync>>,
}

impl<'a, C, A> PerformablePredicate<'a, C, A> {
    /// Bind an actual value and a predicate expectation into an executable
    /// check.
    #[must_use]
    pub fn new(
        actual: Option<A>,
        expectation: &'a PredicateExpectation<C, A>,
        negated: bool,
        expected_description: impl Into<String>,
    ) -> Self {
        Self {
            actual,
            check: PredicateCheck::Active { expectation },
            negated,
            expected_description: expected_description.into(),
            override_error: None,
        }
    }

    /// Internal use only. Trivially-passing runner kept for framework
    /// instantiation; not part of the public contract.
    #[doc(hidden)]
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            actual: None,
            check: PredicateCheck::Placeholder,
            negated: false,
            expected_description: String::from(PLACEHOLDER_DESCRIPTION),
            override_error: None,
        }
    }

    /// Return an otherwise-identical runner that surfaces `error` on failure
    /// instead of the generated message. The original runner is unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_ensure::{DiagnosticBuffer, Performable, PerformablePredicate, PredicateExpectation};
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("access denied")]
    /// struct Denied;
    ///
    /// fn granted(_: &(), actual: Option<&bool>) -> bool {
    ///     actual.copied().unwrap_or(false)
    /// }
    ///
    /// let access = PredicateExpectation::new("granted", granted);
    /// let check = PerformablePredicate::new(Some(false), &access, false, "access")
    ///     .or_else_throw(Denied);
    /// let mut diagnostics = DiagnosticBuffer::new();
    /// let error = check.perform_as(&(), &mut diagnostics).unwrap_err();
    /// assert_eq!(error.to_string(), "access denied");
    /// ```
    #[must_use]
    pub fn or_else_throw(&self, error: impl Error + Send + Sync + 'static) -> Self
    where
        A: Clone,
    {
        let check = match &self.check {
            PredicateCheck::Active { expectation } => PredicateCheck::Active { expectation },
            PredicateCheck::Placeholder => PredicateCheck::Placeholder,
        };
        Self {
            actual: self.actual.clone(),
            check,
            negated: self.negated,
            expected_description: self.expected_description.clone(),
            override_error: Some(Arc::new(error)),
        }
    }

    /// Human-readable description of the check, computed on demand.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.check {
            PredicateCheck::Active { expectation } => {
                expectation.describe(self.negated, &self.expected_description)
            }
            PredicateCheck::Placeholder => String::from(PLACEHOLDER_DESCRIPTION),
        }
    }
}

impl<C, A> Performable<C> for PerformablePredicate<'_, C, A> {
    fn perform_as(
        &self,
        actor: &C,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<(), EnsureError> {
        diagnostics.reset();
        let result = match &self.check {
            PredicateCheck::Active { expectation } => {
                expectation.apply(actor, self.actual.as_ref())
            }
            PredicateCheck::Placeholder => true,
        };
        if is_a_failure(result, self.negated) {
            if let Some(error) = &self.override_error {
                return Err(EnsureError::Overridden(Arc::clone(error)));
            }
            let message = match &self.check {
                PredicateCheck::Active { expectation } => {
                    expectation.compare(self.actual.as_ref(), self.negated, &self.expected_description)
                }
                PredicateCheck::Placeholder => String::from(PLACEHOLDER_DESCRIPTION),
            };
            log::debug!("predicate expectation failed: {message}");
            return Err(EnsureError::AssertionFailed { message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
