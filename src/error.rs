use thiserror::Error;

/// Open115Error represents all possible failures that can occur during a
/// client request.
#[derive(Error, Debug)]
pub enum Open115Error {
    /// No response was received: connection, TLS, or timeout failure.
    #[error("encountered an error while sending a request")]
    SendRequest(#[from] reqwest::Error),

    /// The server responded with a non-2xx status.
    #[error("API request failed: {status} {message}")]
    Api {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// The vendor's error message when the body parsed, otherwise the raw body.
        message: String,
    },

    /// Encountered an error handling the received response.
    #[error("encountered an error handling the response: {msg}")]
    HandleResponse {
        /// The error message.
        msg: String,
    },

    /// A device-code exchange was attempted with no device-auth attempt in
    /// flight, so there is no code verifier to pair it with.
    #[error("no device-code attempt in flight: call auth_device_code first")]
    MissingCodeVerifier,

    /// The configured base URL (or an endpoint joined against it) failed to parse.
    #[error("invalid URL")]
    InvalidUrl(#[from] url::ParseError),
}
