use thiserror::Error;

/// Errors surfaced by backend calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never reached the backend.
    #[error("could not reach the server at {base} (is the backend running?)")]
    Unreachable {
        base: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend rejected the bearer token. The session has already been
    /// cleared by the time this is returned.
    #[error("unauthorized")] Unauthorized,
    /// No post with the requested id. Only produced by local mutations; a
    /// backend 404 comes through as `Status`.
    #[error("not found")] NotFound,
    /// Non-2xx status, carrying the backend's error message when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx response whose body was not the expected shape.
    #[error("malformed response: {0}")] Malformed(String),
}
