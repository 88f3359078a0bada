//! Ingestion error types for flux-ingest.

/// Errors raised while parsing transaction logs and catalog seed files.
///
/// Every variant aborts the run. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A transaction line with fewer than the six required comma fields.
    #[error("Unexpected data structure at line {line_no}: got {fields} comma-separated fields, need 6")]
    MalformedLine { line_no: usize, fields: usize },

    /// The embedded JSON payload of a transaction line failed to decode.
    #[error("JSON parsing error in line: {line}")]
    PayloadDecode {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    /// A present, non-null `qty` value that is not a JSON integer.
    #[error("Quantity at line {line_no} is not an integer: {value}")]
    QtyType { line_no: usize, value: String },

    /// A catalog seed line that does not split into exactly three tab fields.
    #[error("Malformed catalog line {line_no}: got {fields} tab-separated fields, need 3")]
    MalformedCatalogLine { line_no: usize, fields: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
