//! Non-fatal advisories raised while escaping.
//!
//! Advisories never change the result of a call. They are routed through an
//! [`AdvisorySink`] so callers decide where they end up.

use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

/// Kind of advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// Identifier reads like a number (`1234`, `1234e`) and only works quoted.
    NumeralAmbiguity,
}

/// A single advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    /// Identifier as it stood when the advisory was raised
    pub identifier: String,
    pub message: String,
}

impl Advisory {
    pub(crate) fn numeral_ambiguity(identifier: &str) -> Self {
        Self {
            kind: AdvisoryKind::NumeralAmbiguity,
            identifier: identifier.to_string(),
            message: format!(
                "identifier {identifier:?} looks like a numeric literal and is only valid when quoted"
            ),
        }
    }
}

/// Receiver of advisories.
pub trait AdvisorySink: Send + Sync {
    fn advise(&self, advisory: &Advisory);
}

/// Emits advisories as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAdvisorySink;

impl AdvisorySink for TracingAdvisorySink {
    fn advise(&self, advisory: &Advisory) {
        warn!(kind = ?advisory.kind, "{}", advisory.message);
    }
}

/// Discards advisories.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAdvisorySink;

impl AdvisorySink for NoopAdvisorySink {
    fn advise(&self, _advisory: &Advisory) {}
}

/// Keeps every advisory in memory.
#[derive(Debug, Default)]
pub struct CollectingAdvisorySink {
    advisories: Mutex<Vec<Advisory>>,
}

impl CollectingAdvisorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories received so far.
    pub fn advisories(&self) -> Vec<Advisory> {
        self.advisories.lock().clone()
    }

    /// Remove and return the advisories received so far.
    pub fn take(&self) -> Vec<Advisory> {
        std::mem::take(&mut *self.advisories.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.advisories.lock().is_empty()
    }
}

impl AdvisorySink for CollectingAdvisorySink {
    fn advise(&self, advisory: &Advisory) {
        self.advisories.lock().push(advisory.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingAdvisorySink::new();
        assert!(sink.is_empty());

        sink.advise(&Advisory::numeral_ambiguity("1234"));
        sink.advise(&Advisory::numeral_ambiguity("1e"));
        assert_eq!(sink.advisories().len(), 2);

        let taken = sink.take();
        assert_eq!(taken[0].identifier, "1234");
        assert_eq!(taken[1].kind, AdvisoryKind::NumeralAmbiguity);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_advisory_serializes() {
        let json = serde_json::to_value(Advisory::numeral_ambiguity("12")).unwrap();
        assert_eq!(json["kind"], "numeral_ambiguity");
        assert_eq!(json["identifier"], "12");
    }
}
