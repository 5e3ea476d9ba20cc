//! Shared `ureq` agent and size-capped body reading for the prediction client.

use std::io::Read;
use std::time::Duration;

/// Connect/read/write timeouts applied to every request made by an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub read: Duration,
    pub write: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            read: Duration::from_secs(30),
            write: Duration::from_secs(30),
        }
    }
}

/// Build an agent with the given timeouts. Clones share one connection pool.
pub fn agent(timeouts: HttpTimeouts) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(timeouts.connect)
        .timeout_read(timeouts.read)
        .timeout_write(timeouts.write)
        .build()
}

#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("Response body exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("Failed to read response body: {0}")]
    Read(#[from] std::io::Error),
    #[error("Response body is not UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Read the body as text, refusing more than `limit` bytes whether declared
/// in `Content-Length` or actually received.
pub(crate) fn read_text(response: ureq::Response, limit: usize) -> Result<String, BodyError> {
    let declared = response
        .header("Content-Length")
        .and_then(|length| length.trim().parse::<u64>().ok());
    if declared.is_some_and(|length| length > limit as u64) {
        return Err(BodyError::TooLarge { limit });
    }
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)?;
    if bytes.len() > limit {
        return Err(BodyError::TooLarge { limit });
    }
    Ok(String::from_utf8(bytes)?)
}
