pub mod input;
pub mod signatures;
pub mod sink;

pub use input::{ErrorInput, HostValue};
pub use signatures::{DEFAULT_RECORD, FailureKind, RecordTemplate, SIGNATURES, Signature};
pub use sink::{ErrorSink, TracingSink};

/// What the caller should do with a caught error.
///
/// Show `message` to the user iff `display_error`; report the original,
/// unmodified error iff `log`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub display_error: bool,
    pub log: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub record: ErrorRecord,
    pub kind: FailureKind,
    /// The signature that matched, `None` when the default record was used.
    pub pattern: Option<&'static str>,
}

pub struct ErrorClassifier {
    signatures: &'static [Signature],
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(SIGNATURES)
    }
}

impl ErrorClassifier {
    pub fn new(signatures: &'static [Signature]) -> Self {
        Self { signatures }
    }

    pub fn signatures(&self) -> &'static [Signature] {
        self.signatures
    }

    pub fn inspect(&self, input: &ErrorInput<'_>) -> Classification {
        let message = input.message();
        match self
            .signatures
            .iter()
            .find(|sig| message.contains(sig.pattern))
        {
            Some(sig) => {
                tracing::debug!(pattern = sig.pattern, kind = %sig.kind, "matched error signature");
                Classification {
                    record: sig.template.to_record(),
                    kind: sig.kind,
                    pattern: Some(sig.pattern),
                }
            }
            None => {
                tracing::debug!(%message, "no error signature matched");
                Classification {
                    record: DEFAULT_RECORD.to_record(),
                    kind: FailureKind::Unclassified,
                    pattern: None,
                }
            }
        }
    }

    pub fn classify<'a>(&self, input: impl Into<ErrorInput<'a>>) -> ErrorRecord {
        self.inspect(&input.into()).record
    }

    /// Classify `input` and route it to `sink` according to the record's flags.
    pub fn dispatch<'a>(
        &self,
        input: impl Into<ErrorInput<'a>>,
        sink: &dyn ErrorSink,
    ) -> ErrorRecord {
        let input = input.into();
        let classification = self.inspect(&input);
        if classification.record.display_error {
            sink.display(&classification.record.message, classification.kind);
        }
        if classification.record.log {
            sink.report(&input);
        }
        classification.record
    }
}

/// Classify with the built-in signature table.
pub fn classify<'a>(input: impl Into<ErrorInput<'a>>) -> ErrorRecord {
    ErrorClassifier::default().classify(input)
}

/// [`ErrorClassifier::dispatch`] with the built-in signature table.
pub fn dispatch<'a>(input: impl Into<ErrorInput<'a>>, sink: &dyn ErrorSink) -> ErrorRecord {
    ErrorClassifier::default().dispatch(input, sink)
}
