use std::future::Future;

use crate::errors::RemoteError;
use crate::models::{Profile, SignalBag};

/// A remote equivalent of the local pipeline (`POST <base>/api/analyze`).
///
/// Implementations report every deviation from the contract as a
/// [`RemoteError`]; the orchestrator applies its own timeout on top.
pub trait IRemoteAnalyzer: Send + Sync {
    /// Short name used in logs and degradation events.
    fn name(&self) -> &str;

    /// Analyze a bag remotely, returning a profile that satisfies the
    /// output contract.
    fn analyze(&self, bag: &SignalBag) -> impl Future<Output = Result<Profile, RemoteError>> + Send;
}

/// Stand-in used when no remote collaborator is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRemote;

impl IRemoteAnalyzer for DisabledRemote {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn analyze(&self, _bag: &SignalBag) -> Result<Profile, RemoteError> {
        Err(RemoteError::Disabled)
    }
}
