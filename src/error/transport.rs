use thiserror::Error;

/// Failures of the fetch + decode collaborator.
///
/// These are surfaced exactly as produced; a failed fetch yields no entities
/// for the call that issued it.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status code.
    #[error("OGame API returned status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// The response body is not well-formed XML.
    #[error("Failed to decode OGame API response: {0}")]
    Xml(#[from] quick_xml::Error),
    /// The document decoded but its root element is not the requested category.
    #[error("OGame API response is missing the <{category}> root element")]
    MissingRoot { category: String },
}
