//! Diagnostic capture buffer shared by nested expectation evaluators.
//!
//! Nested evaluators record context lines while a check runs so a failure can
//! report what was inspected along the way. The buffer is a single mutable
//! slot passed explicitly to each runner; it carries no synchronization, so
//! concurrent checks against one buffer require external coordination.

/// Accumulates diagnostic lines emitted while an expectation evaluates.
///
/// Runners reset the buffer before every evaluation so context from a
/// previous check never leaks into the next one.
///
/// # Examples
///
/// ```
/// use bdd_ensure::DiagnosticBuffer;
///
/// let mut diagnostics = DiagnosticBuffer::new();
/// diagnostics.record("resolved the login form");
/// assert_eq!(diagnostics.entries(), ["resolved the login form"]);
/// diagnostics.reset();
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    entries: Vec<String>,
}

impl DiagnosticBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic line to the buffer.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// Access the accumulated diagnostic lines in recording order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether no diagnostics have been recorded since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all accumulated diagnostics.
    ///
    /// Idempotent; resetting an empty buffer has no effect.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_in_order() {
        let mut diagnostics = DiagnosticBuffer::new();
        diagnostics.record("first");
        diagnostics.record("second");
        assert_eq!(diagnostics.entries(), ["first", "second"]);
    }

    #[test]
    fn reset_clears_entries_and_is_idempotent() {
        let mut diagnostics = DiagnosticBuffer::new();
        diagnostics.record("stale");
        diagnostics.reset();
        assert!(diagnostics.is_empty());
        diagnostics.reset();
        assert!(diagnostics.is_empty());
    }
}
