use serde::Deserialize;

/// Analyzer configuration, mirroring the rule's JSON schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AnalyzerOptions {
    /// Accept any call that receives the bound error as a logging call,
    /// instead of only `console.log/info/error/warn`. Off by default.
    pub custom_loggers: bool,
}
