//! Support library for behaviour-driven tests.
//!
//! The crate provides two independent utilities consumed by a larger
//! execution and reporting pipeline:
//!
//! - Performable expectation runners ([`PerformableExpectation`],
//!   [`PerformableRange`], [`PerformablePredicate`]) that bind a value and an
//!   expectation-checking function into an action an actor can execute,
//!   surfacing descriptive failures through [`EnsureError`].
//! - A per-feature results summary ([`reporting::FeatureResults`]) that
//!   groups test outcomes by their user story and collects linked issues and
//!   failing-scenario summaries.

pub mod diagnostics;
pub mod expectation;
pub mod performable;
pub mod reporting;

pub use diagnostics::DiagnosticBuffer;
pub use expectation::{Expectation, PredicateExpectation, RangeExpectation};
pub use performable::{
    EnsureError, Performable, PerformableExpectation, PerformablePredicate, PerformableRange,
};
