use serde::Serialize;

/// Answers collected for one run, substituted verbatim into the template.
///
/// Field names serialize as `Application` and `Registry` to match the
/// placeholders in the embedded templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    #[serde(rename = "Application")]
    pub application: String,
    #[serde(rename = "Registry")]
    pub registry: String,
}

impl Configuration {
    pub fn new(application: impl Into<String>, registry: impl Into<String>) -> Self {
        Self { application: application.into(), registry: registry.into() }
    }
}
