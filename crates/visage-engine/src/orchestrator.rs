//! Orchestrator: session cache, then the remote analyzer under a bounded
//! timeout, then the local pipeline.

use std::time::Duration;

use tracing::Instrument;
use visage_core::config::VisageConfig;
use visage_core::errors::RemoteError;
use visage_core::traits::{DisabledRemote, IRemoteAnalyzer};
use visage_core::{DegradationEvent, Profile, SignalBag, VisageResult};
use visage_insights::summarize;
use visage_remote::HttpAnalyzer;
use visage_scoring::is_valid_label;

use crate::assembler::ProfileAssembler;
use crate::cache::ProfileCache;
use crate::{profile_span, remote_span};

/// Where a profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Remote,
    Local,
    Cache,
}

impl ProfileSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
            Self::Cache => "cache",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileOutcome {
    pub profile: Profile,
    pub source: ProfileSource,
    /// Remote fallback and per-scorer degradations, in the order they happened.
    pub degradations: Vec<DegradationEvent>,
}

/// Computes profiles for settled signal bags.
#[derive(Debug)]
pub struct ProfileEngine<R: IRemoteAnalyzer = DisabledRemote> {
    remote: Option<R>,
    remote_timeout: Duration,
    assembler: ProfileAssembler,
    cache: Option<ProfileCache>,
    max_insights: usize,
}

impl ProfileEngine<DisabledRemote> {
    /// Local pipeline only.
    pub fn local(config: &VisageConfig) -> Self {
        Self::build(config, None)
    }
}

impl ProfileEngine<HttpAnalyzer> {
    /// Engine for a loaded config: the HTTP analyzer when `remote.enabled`,
    /// local only otherwise.
    pub fn from_config(config: &VisageConfig) -> VisageResult<Self> {
        VisageConfig::validate(config)?;
        let remote = if config.remote.effective_enabled() {
            Some(HttpAnalyzer::from_config(&config.remote)?)
        } else {
            None
        };
        Ok(Self::build(config, remote))
    }
}

impl<R: IRemoteAnalyzer> ProfileEngine<R> {
    /// Engine that always attempts `remote` first.
    pub fn with_remote(config: &VisageConfig, remote: R) -> Self {
        Self::build(config, Some(remote))
    }

    fn build(config: &VisageConfig, remote: Option<R>) -> Self {
        Self {
            remote,
            remote_timeout: Duration::from_millis(config.remote.effective_timeout_ms()),
            assembler: ProfileAssembler::new(config),
            cache: ProfileCache::from_config(&config.cache),
            max_insights: config.insights.effective_max_insights(),
        }
    }

    pub fn remote(&self) -> Option<&R> {
        self.remote.as_ref()
    }

    pub fn cache(&self) -> Option<&ProfileCache> {
        self.cache.as_ref()
    }

    /// Compute the profile for a settled bag. Never fails.
    pub async fn compute(&self, bag: &SignalBag) -> ProfileOutcome {
        let bag_hash = bag.content_hash();
        let span = profile_span!(bag_hash);
        let outcome = self.compute_inner(bag, bag_hash).instrument(span.clone()).await;
        span.record("source", outcome.source.name());
        outcome
    }

    async fn compute_inner(&self, bag: &SignalBag, bag_hash: String) -> ProfileOutcome {
        if let Some(profile) = self.cache.as_ref().and_then(|c| c.get(&bag_hash)) {
            tracing::debug!("profile served from session cache");
            return ProfileOutcome {
                profile,
                source: ProfileSource::Cache,
                degradations: Vec::new(),
            };
        }

        let mut degradations = Vec::new();
        if let Some(remote) = &self.remote {
            match self.try_remote(remote, bag).await {
                Ok(profile) => {
                    self.remember(bag_hash, &profile);
                    return ProfileOutcome {
                        profile,
                        source: ProfileSource::Remote,
                        degradations,
                    };
                }
                Err(error) => {
                    tracing::warn!(
                        event = "degradation_triggered",
                        analyzer = remote.name(),
                        error = %error,
                        "remote analysis failed, falling back to local pipeline"
                    );
                    degradations.push(DegradationEvent::now(
                        format!("remote.{}", remote.name()),
                        error.to_string(),
                        "local pipeline",
                    ));
                }
            }
        }

        let assembly = self.assembler.assemble(bag);
        if !degradations.is_empty() {
            tracing::info!("local fallback profile adopted");
        }
        degradations.extend(assembly.degradations);
        self.remember(bag_hash, &assembly.profile);
        ProfileOutcome {
            profile: assembly.profile,
            source: ProfileSource::Local,
            degradations,
        }
    }

    async fn try_remote(&self, remote: &R, bag: &SignalBag) -> Result<Profile, RemoteError> {
        let timeout_ms = u64::try_from(self.remote_timeout.as_millis()).unwrap_or(u64::MAX);
        let span = remote_span!(remote.name(), timeout_ms);
        let result = tokio::time::timeout(self.remote_timeout, remote.analyze(bag))
            .instrument(span)
            .await
            .unwrap_or(Err(RemoteError::Timeout { timeout_ms }));
        result.map(|mut profile| {
            profile.sanitize(self.max_insights, is_valid_label);
            if profile.insights.is_empty() {
                profile.insights.push(summarize(&profile));
            }
            tracing::info!(analyzer = remote.name(), "remote profile adopted");
            profile
        })
    }

    fn remember(&self, bag_hash: String, profile: &Profile) {
        if let Some(cache) = &self.cache {
            cache.insert(bag_hash, profile.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_engine_computes_and_caches() {
        let engine = ProfileEngine::local(&VisageConfig::default());
        let mut bag = SignalBag::default();
        bag.hardware.cpu_cores = Some(8);

        let first = engine.compute(&bag).await;
        assert_eq!(first.source, ProfileSource::Local);
        let second = engine.compute(&bag).await;
        assert_eq!(second.source, ProfileSource::Cache);
        assert_eq!(first.profile, second.profile);
    }

    #[test]
    fn disabled_remote_config_builds_local_engine() {
        let engine = ProfileEngine::from_config(&VisageConfig::default()).unwrap();
        assert!(engine.remote.is_none());
    }

    #[test]
    fn enabled_remote_config_builds_http_engine() {
        let config = VisageConfig::from_toml(
            "[remote]\nenabled = true\nbase_url = \"http://127.0.0.1:9\"\n",
        )
        .unwrap();
        let engine = ProfileEngine::from_config(&config).unwrap();
        assert_eq!(
            engine.remote.as_ref().map(|r| r.endpoint()),
            Some("http://127.0.0.1:9/api/analyze")
        );
    }
}
