//! Report envelope encoder
//!
//! Wraps a finished [`PerformanceReport`] in a producer/provenance envelope
//! for telemetry export or storage by a collaborator. The envelope is the
//! only layer that touches wall-clock time or randomness; the report itself
//! stays a pure function of the input.

use crate::error::AnalysisError;
use crate::types::{PerformanceReport, ReportEnvelope, ReportProducer};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Envelope encoder carrying a stable per-process instance id
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create an encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Wrap a report in an export envelope
    pub fn encode(&self, report: &PerformanceReport) -> ReportEnvelope {
        ReportEnvelope {
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            generated_at_utc: Utc::now().to_rfc3339(),
            report: report.clone(),
        }
    }

    /// Encode to pretty JSON
    pub fn encode_to_json(&self, report: &PerformanceReport) -> Result<String, AnalysisError> {
        let envelope = self.encode(report);
        serde_json::to_string_pretty(&envelope).map_err(AnalysisError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::generate_performance_report;
    use crate::types::AnalysisInput;

    fn make_report() -> PerformanceReport {
        let input = AnalysisInput {
            transcript: "The main point is the rollout went cleanly end to end.".to_string(),
            words: Vec::new(),
            volume_history: Vec::new(),
            duration_ms: 5_000,
            eye_contact_percentage: 70.0,
            posture_score: 80.0,
            stuttering_report: None,
        };
        generate_performance_report(&input)
    }

    #[test]
    fn test_envelope_carries_producer() {
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let envelope = encoder.encode(&make_report());

        assert_eq!(envelope.producer.name, "orate");
        assert_eq!(envelope.producer.version, ENGINE_VERSION);
        assert_eq!(envelope.producer.instance_id, "test-instance");
    }

    #[test]
    fn test_wrapped_report_unchanged() {
        let report = make_report();
        let encoder = ReportEncoder::new();
        let envelope = encoder.encode(&report);
        assert_eq!(envelope.report, report);
    }

    #[test]
    fn test_encode_to_json() {
        let encoder = ReportEncoder::with_instance_id("abc".to_string());
        let json = encoder.encode_to_json(&make_report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["producer"]["name"], "orate");
        assert!(value["generated_at_utc"].is_string());
        assert!(value["report"]["summary"]["overall_score"].is_number());
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let encoder = ReportEncoder::new();
        let envelope = encoder.encode(&make_report());
        assert!(chrono::DateTime::parse_from_rfc3339(&envelope.generated_at_utc).is_ok());
    }
}
