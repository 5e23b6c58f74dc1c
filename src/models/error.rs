#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport-level failure (DNS, refused connection, timeout).
    #[error("failed to connect: {0}")]
    Connect(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body was not the JSON shape we expected.
    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("data error: {0}")]
    Data(String),
}
