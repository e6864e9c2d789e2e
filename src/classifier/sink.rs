use super::{ErrorInput, FailureKind};

/// Where classified errors end up: a notification surface for the user and a
/// diagnostic log for the original error.
pub trait ErrorSink {
    fn display(&self, message: &str, kind: FailureKind);

    /// Receives the original error, never the sanitized message.
    fn report(&self, original: &ErrorInput<'_>);
}

/// Routes both outputs through `tracing`.
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn display(&self, message: &str, kind: FailureKind) {
        tracing::info!(%kind, "{message}");
    }

    fn report(&self, original: &ErrorInput<'_>) {
        match original {
            ErrorInput::Native(error) => {
                let mut chain = Vec::new();
                let mut source = error.source();
                while let Some(cause) = source {
                    chain.push(cause.to_string());
                    source = cause.source();
                }
                tracing::error!(error = %error, causes = ?chain, "unclassified error");
            }
            ErrorInput::MessageCarrier(message) | ErrorInput::RawText(message) => {
                tracing::error!(error = %message, "unclassified error");
            }
        }
    }
}
