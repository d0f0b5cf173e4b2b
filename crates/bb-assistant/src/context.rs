//! Diagnosis context store — the latest classification for one session.

/// A recorded classification result.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    /// Condition name exactly as the classifier reported it.
    pub label: String,
    /// Percent confidence, rounded to two decimals.
    pub confidence: f64,
}

/// Holds at most one diagnosis. Each update overwrites the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosisContext {
    current: Option<Diagnosis>,
}

impl DiagnosisContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classification. The label is not checked against the
    /// knowledge base; unknown labels are stored as-is.
    pub fn update(&mut self, label: impl Into<String>, confidence: f64) {
        let diagnosis = Diagnosis {
            label: label.into(),
            confidence: round2(confidence),
        };
        tracing::debug!(
            label = %diagnosis.label,
            confidence = diagnosis.confidence,
            "diagnosis context updated"
        );
        self.current = Some(diagnosis);
    }

    /// Label and confidence, both `None` until the first update.
    pub fn read(&self) -> (Option<&str>, Option<f64>) {
        match &self.current {
            Some(d) => (Some(d.label.as_str()), Some(d.confidence)),
            None => (None, None),
        }
    }

    pub fn current(&self) -> Option<&Diagnosis> {
        self.current.as_ref()
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
