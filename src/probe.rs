//! Smoke probe for a running gateway.
//!
//! The probe performs a single GET request against a gateway endpoint and
//! verifies two properties of the response: the status code is 200 and the
//! body text is exactly the greeting. Assertion failures and transport
//! failures are reported as distinct error variants so callers can tell a
//! misbehaving gateway apart from an unreachable one.

use std::time::Duration;

use reqwest::{IntoUrl, StatusCode};

/// Endpoint a locally running gateway is expected to listen on.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

/// Body text a healthy gateway answers with.
pub const EXPECTED_BODY: &str = "Hello world";

/// How long the probe waits for the response before giving up.
///
/// Pinned here so the outcome does not depend on the HTTP client's own
/// default, which can vary between platforms and client versions. A request
/// exceeding this is reported as a transport failure.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Ways a probe can fail.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    /// The gateway answered with a status other than 200
    #[error("Expected status code {expected}, but got {actual}")]
    UnexpectedStatus {
        /// Status code a healthy gateway answers with
        expected: u16,
        /// Status code the gateway actually answered with
        actual: u16,
    },
    /// The gateway answered 200 but with an unexpected body
    #[error("Expected response text '{expected}', but got {actual}")]
    UnexpectedBody {
        /// Body text a healthy gateway answers with
        expected: &'static str,
        /// Body text the gateway actually answered with
        actual: String,
    },
    /// The request could not be completed at all
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Probe result type.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Perform one GET request against `endpoint` and validate the response.
///
/// Succeeds iff the gateway answers 200 with body [`EXPECTED_BODY`]. No
/// retries; every invocation makes exactly one outbound call and carries no
/// state over from previous invocations.
pub async fn check(endpoint: impl IntoUrl) -> ProbeResult<()> {
    let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;

    let response = client.get(endpoint).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ProbeError::UnexpectedStatus {
            expected: StatusCode::OK.as_u16(),
            actual: status.as_u16(),
        });
    }

    let body = response.text().await?;
    if body != EXPECTED_BODY {
        return Err(ProbeError::UnexpectedBody {
            expected: EXPECTED_BODY,
            actual: body,
        });
    }

    Ok(())
}
