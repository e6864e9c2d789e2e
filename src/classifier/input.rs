use std::borrow::Cow;

/// An error value as handed over by the wallet, provider or contract layer.
#[derive(Debug)]
pub enum ErrorInput<'a> {
    /// A typed Rust error; its `Display` output is the message.
    Native(&'a (dyn std::error::Error + 'a)),
    /// An unstructured object that carries a `message` field.
    MessageCarrier(Cow<'a, str>),
    /// Anything else, already coerced to text.
    RawText(Cow<'a, str>),
}

impl<'a> ErrorInput<'a> {
    pub fn native(error: &'a (dyn std::error::Error + 'a)) -> Self {
        Self::Native(error)
    }

    /// The text the signature table is matched against.
    pub fn message(&self) -> Cow<'a, str> {
        match self {
            Self::Native(error) => Cow::Owned(error.to_string()),
            Self::MessageCarrier(message) | Self::RawText(message) => message.clone(),
        }
    }

    /// Normalize a JSON error payload.
    ///
    /// Objects with a `message` field become carriers, strings are taken as-is,
    /// everything else (including `null`) is coerced to its textual form.
    pub fn from_json(value: &'a serde_json::Value) -> Self {
        if let Some(message) = value.as_object().and_then(|obj| obj.get("message")) {
            return Self::MessageCarrier(text_of(message));
        }
        Self::RawText(text_of(value))
    }
}

/// What could be read off a value thrown inside a dynamic host such as a JS
/// engine. `None` marks a read or string coercion that itself failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue {
    Text(String),
    /// An object exposing a `message` property.
    Message(Option<String>),
    /// Anything else, with its string coercion.
    Other(Option<String>),
}

impl ErrorInput<'static> {
    /// Normalize a host value. When reading or coercing it failed, the text
    /// becomes `type_name` (e.g. the `typeof` of the value).
    pub fn from_host(value: HostValue, type_name: &str) -> Self {
        match value {
            HostValue::Text(text) | HostValue::Other(Some(text)) => Self::from(text),
            HostValue::Message(Some(message)) => Self::MessageCarrier(Cow::Owned(message)),
            HostValue::Message(None) | HostValue::Other(None) => {
                tracing::debug!(type_name, "host error value could not be read");
                Self::from(type_name.to_string())
            }
        }
    }
}

fn text_of(value: &serde_json::Value) -> Cow<'_, str> {
    match value {
        serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

impl<'a> From<&'a str> for ErrorInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::RawText(Cow::Borrowed(text))
    }
}

impl From<String> for ErrorInput<'static> {
    fn from(text: String) -> Self {
        Self::RawText(Cow::Owned(text))
    }
}

impl<'a> From<&'a String> for ErrorInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::RawText(Cow::Borrowed(text.as_str()))
    }
}

impl<'a> From<&'a serde_json::Value> for ErrorInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        Self::from_json(value)
    }
}
