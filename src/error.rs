use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

/// Anything that stops a provisioning run. Nothing is retried.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{endpoint}: request failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint}: HTTP {status}: {}", describe_body(.status, .body))]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Label {0} was not created on the board")]
    UnresolvedLabel(String),
}

/// Pretty-prints a JSON error payload, falls back to the raw text.
fn describe_body(status: &u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("no response body (status {status})");
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) if value.is_object() || value.is_array() => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| trimmed.to_string())
        }
        _ => trimmed.to_string(),
    }
}
