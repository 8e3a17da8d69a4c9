use crate::error::ProcessError;

/// Decodes plain-text bytes verbatim. Invalid UTF-8 is a hard failure.
pub fn decode(name: &str, bytes: &[u8]) -> Result<String, ProcessError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ProcessError::TextDecode {
            name: crate::sanitize::redact_name(name),
            source: e,
        })
}
