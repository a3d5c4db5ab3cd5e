//! Response envelope of the remote analyzer and its validation.

use serde::{Deserialize, Serialize};
use visage_core::errors::RemoteError;
use visage_core::Profile;

/// Header carrying the per-call request id, echoed in logs on both sides.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest slice of a rejected body quoted in an error.
const MAX_QUOTED_BODY: usize = 200;

/// Envelope for every `/api/analyze` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    /// The profile, present when `success` is true.
    #[serde(default)]
    pub analysis: Option<serde_json::Value>,
    /// Error message when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Turn an HTTP status and body into a profile, or the reason it is unusable.
///
/// Any deviation from the contract is an error: a non-2xx status, a body that
/// is not the envelope, `success: false`, or an `analysis` that is not a
/// complete profile.
pub fn parse_response(status: u16, body: &str) -> Result<Profile, RemoteError> {
    if !(200..300).contains(&status) {
        return Err(RemoteError::Status { status });
    }

    let envelope: AnalyzeResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::Malformed {
            reason: format!("invalid envelope ({e}): {}", quote(body)),
        })?;

    if !envelope.success {
        return Err(RemoteError::Rejected {
            reason: envelope
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "no reason given".to_string()),
        });
    }

    let analysis = envelope.analysis.ok_or_else(|| RemoteError::Malformed {
        reason: "success without analysis".to_string(),
    })?;

    serde_json::from_value::<Profile>(analysis).map_err(|e| RemoteError::Malformed {
        reason: format!("analysis is not a profile: {e}"),
    })
}

fn quote(body: &str) -> &str {
    let mut end = body.len().min(MAX_QUOTED_BODY);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
