use super::ErrorRecord;

/// Why a failure happened, as far as the user-facing layer cares.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The user cancelled on purpose.
    UserAction,
    /// No wallet, wrong chain, or a refused connection.
    WalletMisconfiguration,
    /// The Loketh contract reverted on one of its own rules.
    BusinessRule,
    Unclassified,
}

/// Static form of an [`ErrorRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTemplate {
    pub display_error: bool,
    pub log: bool,
    pub message: &'static str,
}

impl RecordTemplate {
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            display_error: self.display_error,
            log: self.log,
            message: self.message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Matched as a substring of the normalized error message.
    pub pattern: &'static str,
    pub kind: FailureKind,
    pub template: RecordTemplate,
}

const fn signature(
    pattern: &'static str,
    kind: FailureKind,
    display_error: bool,
    message: &'static str,
) -> Signature {
    Signature {
        pattern,
        kind,
        template: RecordTemplate {
            display_error,
            log: false,
            message,
        },
    }
}

/// Known wallet, provider and contract failures. First match wins.
pub static SIGNATURES: &[Signature] = &[
    signature(
        "You have no Metamask installed",
        FailureKind::WalletMisconfiguration,
        true,
        "You have no Metamask installed.",
    ),
    signature(
        "You are connected to the wrong network",
        FailureKind::WalletMisconfiguration,
        true,
        "You are connected to the wrong network.",
    ),
    signature(
        "User rejected the request",
        FailureKind::WalletMisconfiguration,
        true,
        "You rejected the connect request.",
    ),
    signature(
        "User denied transaction signature",
        FailureKind::UserAction,
        false,
        "MetaMask Tx Signature: User denied transaction signature.",
    ),
    signature(
        "Loketh: Organizer can not buy their own event",
        FailureKind::BusinessRule,
        true,
        "You can not buy a ticket from your own event.",
    ),
    signature(
        "Loketh: Participant already bought the ticket",
        FailureKind::BusinessRule,
        true,
        "You are already buy this ticket.",
    ),
];

/// Returned when no signature matches.
pub const DEFAULT_RECORD: RecordTemplate = RecordTemplate {
    display_error: true,
    log: true,
    message: "Something went wrong.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_preserves_declared_order() {
        let patterns: Vec<&str> = SIGNATURES.iter().map(|s| s.pattern).collect();
        assert_eq!(
            patterns,
            vec![
                "You have no Metamask installed",
                "You are connected to the wrong network",
                "User rejected the request",
                "User denied transaction signature",
                "Loketh: Organizer can not buy their own event",
                "Loketh: Participant already bought the ticket",
            ]
        );
    }

    #[test]
    fn only_the_default_is_logged() {
        assert!(SIGNATURES.iter().all(|s| !s.template.log));
        assert!(DEFAULT_RECORD.log);
        assert!(DEFAULT_RECORD.display_error);
    }

    #[test]
    fn signature_denial_is_the_only_silent_entry() {
        let silent: Vec<FailureKind> = SIGNATURES
            .iter()
            .filter(|s| !s.template.display_error)
            .map(|s| s.kind)
            .collect();
        assert_eq!(silent, vec![FailureKind::UserAction]);
    }

    #[test]
    fn failure_kind_names() {
        assert_eq!(
            FailureKind::WalletMisconfiguration.to_string(),
            "wallet_misconfiguration"
        );
        assert_eq!(
            "business_rule".parse::<FailureKind>().ok(),
            Some(FailureKind::BusinessRule)
        );
        assert_eq!("network".parse::<FailureKind>().ok(), None);
    }
}
