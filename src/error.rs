use thiserror::Error;

/// Everything that can go wrong while ingesting one upload.
///
/// The caller never sees these: the handler collapses every variant into the
/// fixed 500 response and logs the detail instead.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("request body is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("request carried no body")]
    EmptyBody,

    #[error("storage backend write failed: {0}")]
    Backend(#[source] anyhow::Error),
}
