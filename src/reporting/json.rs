//! JSON writer for feature summaries.
//!
//! The writer serializes summaries into a predictable, machine-readable
//! shape for downstream report tooling. The rendered description matches
//! [`FeatureResults::description`] so consumers need not re-derive it.

use std::io::Write;

use serde::Serialize;

use super::FeatureResults;

#[derive(Serialize)]
struct JsonReport<'a, S> {
    features: Vec<JsonFeature<'a, S>>,
}

#[derive(Serialize)]
struct JsonFeature<'a, S> {
    feature_name: &'a str,
    issues: &'a [String],
    scenarios: &'a [S],
    description: String,
}

impl<'a, S> From<&'a [FeatureResults<S>]> for JsonReport<'a, S> {
    fn from(results: &'a [FeatureResults<S>]) -> Self {
        let features = results.iter().map(JsonFeature::from).collect();
        Self { features }
    }
}

impl<'a, S> From<&'a FeatureResults<S>> for JsonFeature<'a, S> {
    fn from(results: &'a FeatureResults<S>) -> Self {
        Self {
            feature_name: results.feature_name(),
            issues: results.issues(),
            scenarios: results.scenarios(),
            description: results.description(),
        }
    }
}

/// Serialize the provided feature summaries into the supplied writer.
///
/// # Examples
/// ```rust
/// use bdd_ensure::reporting::{FeatureResults, json};
///
/// let results: Vec<FeatureResults<String>> =
///     vec![FeatureResults::new("Login", vec!["BUG-1".into()], Vec::new())];
/// let mut buffer = Vec::new();
/// json::write(&mut buffer, &results).unwrap();
/// let output = String::from_utf8(buffer).unwrap();
/// assert!(output.contains("\"feature_name\":\"Login\""));
/// ```
///
/// # Errors
/// Returns an error when serialization of the provided summaries fails.
pub fn write<W: Write, S: Serialize>(
    writer: &mut W,
    results: &[FeatureResults<S>],
) -> serde_json::Result<()> {
    serde_json::to_writer(writer, &JsonReport::from(results))
}

/// Produce a JSON string representation of the provided feature summaries.
///
/// # Examples
/// ```rust
/// use bdd_ensure::reporting::{FeatureResults, json};
///
/// let results: Vec<FeatureResults<String>> =
///     vec![FeatureResults::new("Checkout", Vec::new(), Vec::new())];
/// let json = json::to_string(&results).unwrap();
/// assert!(json.contains("\"description\":\"Checkout\""));
/// ```
///
/// # Errors
/// Returns an error when serializing the provided summaries fails.
pub fn to_string<S: Serialize>(results: &[FeatureResults<S>]) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport::from(results))
}
