//! Per-feature summaries of test outcomes.
//!
//! The module turns a flat collection of test outcomes into one summary per
//! feature: the feature name, the distinct linked issues, and a
//! failing-scenario summary per outcome. Summaries are derived read-only
//! views; summarization is pure, so the same input always yields the same
//! grouping, de-duplication and order.

/// JSON writer for feature summaries.
#[cfg(feature = "json-report")]
pub mod json;

/// A feature reference used to group test outcomes.
///
/// Grouping identity follows the implementor's `PartialEq`; `name` supplies
/// the grouping display name.
pub trait UserStory: PartialEq {
    /// Display name of the feature.
    fn name(&self) -> &str;
}

/// A recorded test outcome associated with a feature and linked issues.
pub trait TestOutcome {
    /// Feature reference type used as the grouping key.
    type Story: UserStory;

    /// The feature this outcome belongs to.
    fn user_story(&self) -> &Self::Story;

    /// Issue identifiers linked to this outcome, e.g. ticket references.
    fn issues(&self) -> &[String];
}

/// Summary of the outcomes recorded against one feature.
///
/// `S` is the per-scenario failure summary produced by the derivation
/// supplied to [`FeatureResults::from_outcomes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureResults<S> {
    feature_name: String,
    issues: Vec<String>,
    scenarios: Vec<S>,
}

impl<S> FeatureResults<S> {
    /// Construct a summary from prepared parts.
    #[must_use]
    pub fn new(
        feature_name: impl Into<String>,
        issues: Vec<String>,
        scenarios: Vec<S>,
    ) -> Self {
        Self {
            feature_name: feature_name.into(),
            issues,
            scenarios,
        }
    }

    /// Group outcomes by feature and summarize each group.
    ///
    /// Issues are flattened and de-duplicated preserving first-seen order;
    /// scenarios keep the input iteration order of the outcomes belonging to
    /// each feature. The result is sorted by feature name, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_ensure::reporting::{FeatureResults, TestOutcome, UserStory};
    ///
    /// #[derive(PartialEq)]
    /// struct Story(&'static str);
    ///
    /// impl UserStory for Story {
    ///     fn name(&self) -> &str {
    ///         self.0
    ///     }
    /// }
    ///
    /// struct Outcome(Story, Vec<String>);
    ///
    /// impl TestOutcome for Outcome {
    ///     type Story = Story;
    ///     fn user_story(&self) -> &Story {
    ///         &self.0
    ///     }
    ///     fn issues(&self) -> &[String] {
    ///         &self.1
    ///     }
    /// }
    ///
    /// let outcomes = [
    ///     Outcome(Story("Login"), vec!["BUG-1".into()]),
    ///     Outcome(Story("Checkout"), Vec::new()),
    /// ];
    /// let results = FeatureResults::from_outcomes(&outcomes, |_| "failing scenario");
    /// let names: Vec<_> = results.iter().map(FeatureResults::feature_name).collect();
    /// assert_eq!(names, ["Checkout", "Login"]);
    /// ```
    pub fn from_outcomes<O, F>(outcomes: &[O], failing_scenario: F) -> Vec<Self>
    where
        O: TestOutcome,
        F: Fn(&O) -> S,
    {
        let mut stories: Vec<&O::Story> = Vec::new();
        for outcome in outcomes {
            let story = outcome.user_story();
            if !stories.iter().any(|candidate| *candidate == story) {
                stories.push(story);
            }
        }
        let mut results: Vec<Self> = stories
            .into_iter()
            .map(|story| {
                let members: Vec<&O> = outcomes
                    .iter()
                    .filter(|outcome| outcome.user_story() == story)
                    .collect();
                Self {
                    feature_name: story.name().to_owned(),
                    issues: issues_in(&members),
                    scenarios: members
                        .into_iter()
                        .map(|outcome| failing_scenario(outcome))
                        .collect(),
                }
            })
            .collect();
        // Stable sort; features sharing a name keep first-seen order.
        results.sort_by(|a, b| a.feature_name.cmp(&b.feature_name));
        log::debug!(
            "summarized {} outcomes into {} features",
            outcomes.len(),
            results.len(),
        );
        results
    }

    /// The feature display name.
    #[must_use]
    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    /// Distinct issue identifiers in first-seen order.
    #[must_use]
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Per-scenario failure summaries in input iteration order.
    #[must_use]
    pub fn scenarios(&self) -> &[S] {
        &self.scenarios
    }

    /// The feature name, followed by the parenthesized comma-joined issue
    /// list when issues are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_ensure::reporting::FeatureResults;
    ///
    /// let summary: FeatureResults<String> =
    ///     FeatureResults::new("Login", vec!["BUG-1".into(), "BUG-2".into()], Vec::new());
    /// assert_eq!(summary.description(), "Login (BUG-1,BUG-2)");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        if self.issues.is_empty() {
            self.feature_name.clone()
        } else {
            format!("{} ({})", self.feature_name, self.issues.join(","))
        }
    }
}

fn issues_in<O: TestOutcome>(outcomes: &[&O]) -> Vec<String> {
    let mut issues = Vec::new();
    for outcome in outcomes {
        for issue in outcome.issues() {
            if !issues.contains(issue) {
                issues.push(issue.clone());
            }
        }
    }
    issues
}
