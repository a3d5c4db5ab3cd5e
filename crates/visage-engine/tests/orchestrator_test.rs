//! Remote-first orchestration with in-process fake analyzers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use visage_core::errors::RemoteError;
use visage_core::traits::IRemoteAnalyzer;
use visage_core::{BucketedAttribute, Profile, SignalBag, VisageConfig};
use visage_engine::{compute_profile, ProfileEngine, ProfileSource};
use visage_scoring::is_valid_label;

enum Behavior {
    Succeed(Profile),
    Fail(RemoteError),
    Hang,
}

struct FakeRemote {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl FakeRemote {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }
}

impl IRemoteAnalyzer for FakeRemote {
    fn name(&self) -> &str {
        "fake"
    }

    async fn analyze(&self, _bag: &SignalBag) -> Result<Profile, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Succeed(profile) => Ok(profile.clone()),
            Behavior::Fail(error) => Err(error.clone()),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(RemoteError::Network {
                    reason: "unreachable".into(),
                })
            }
        }
    }
}

fn config(toml: &str) -> VisageConfig {
    VisageConfig::from_toml(toml).unwrap()
}

fn remote_profile() -> Profile {
    let mut profile = Profile::unknown();
    profile.age = BucketedAttribute::new("28-34", 70, vec!["+1 remote".into()]);
    profile.overall_confidence = 64;
    profile.insights = vec!["remote insight".into()];
    profile
}

#[tokio::test]
async fn remote_success_is_adopted() {
    let engine = ProfileEngine::with_remote(
        &VisageConfig::default(),
        FakeRemote::new(Behavior::Succeed(remote_profile())),
    );
    let outcome = engine.compute(&test_fixtures::load_signal_bag("developer_workstation")).await;
    assert_eq!(outcome.source, ProfileSource::Remote);
    assert_eq!(outcome.profile, remote_profile());
    assert!(outcome.degradations.is_empty());
}

#[tokio::test]
async fn remote_failure_falls_back_to_local() {
    let bag = test_fixtures::load_signal_bag("developer_workstation");
    let engine = ProfileEngine::with_remote(
        &VisageConfig::default(),
        FakeRemote::new(Behavior::Fail(RemoteError::Status { status: 502 })),
    );
    let outcome = engine.compute(&bag).await;
    assert_eq!(outcome.source, ProfileSource::Local);
    assert_eq!(outcome.profile, compute_profile(&bag));
    assert_eq!(outcome.degradations.len(), 1);
    assert_eq!(outcome.degradations[0].component, "remote.fake");
    assert_eq!(outcome.degradations[0].fallback_used, "local pipeline");
    assert!(outcome.degradations[0].failure.contains("502"));
}

#[tokio::test]
async fn malformed_remote_payload_falls_back() {
    let bag = test_fixtures::load_signal_bag("saudi_arabia_only");
    let engine = ProfileEngine::with_remote(
        &VisageConfig::default(),
        FakeRemote::new(Behavior::Fail(RemoteError::Malformed {
            reason: "analysis is not a profile".into(),
        })),
    );
    let outcome = engine.compute(&bag).await;
    assert_eq!(outcome.source, ProfileSource::Local);
    assert_eq!(outcome.profile.lifestyle_habits.drinks_alcohol.value, "Unlikely");
}

#[tokio::test]
async fn hanging_remote_times_out() {
    let engine = ProfileEngine::with_remote(
        &config("[remote]\ntimeout_ms = 100\n"),
        FakeRemote::new(Behavior::Hang),
    );
    let outcome = engine.compute(&SignalBag::default()).await;
    assert_eq!(outcome.source, ProfileSource::Local);
    assert!(outcome.degradations[0].failure.contains("timed out after 100ms"));
}

#[tokio::test]
async fn remote_profile_is_sanitized() {
    let mut dirty = remote_profile();
    dirty.income = BucketedAttribute {
        value: String::new(),
        confidence: 200,
        reasoning: vec![],
        detail: None,
    };
    dirty.insights = vec!["a".into(), "a".into(), "b".into(), "c".into(), "d".into(), "e".into(), "f".into()];
    let engine = ProfileEngine::with_remote(
        &VisageConfig::default(),
        FakeRemote::new(Behavior::Succeed(dirty)),
    );
    let profile = engine.compute(&SignalBag::default()).await.profile;
    assert!(profile.income.is_unknown());
    assert_eq!(profile.income.confidence, 0);
    assert_eq!(profile.insights, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn remote_profile_is_held_to_the_output_contract() {
    let mut dirty = remote_profile();
    dirty.age = BucketedAttribute::new("banana", 90, vec![]);
    dirty.income = BucketedAttribute::new("Unknown", 80, vec![]);
    dirty.insights = vec![];
    let engine = ProfileEngine::with_remote(
        &VisageConfig::default(),
        FakeRemote::new(Behavior::Succeed(dirty)),
    );
    let outcome = engine
        .compute(&test_fixtures::load_signal_bag("developer_workstation"))
        .await;

    assert_eq!(outcome.source, ProfileSource::Remote);
    let profile = outcome.profile;
    assert!(profile.age.is_unknown());
    assert_eq!(profile.age.confidence, 0);
    assert_eq!(profile.income.confidence, 0);
    for (dimension, attr) in profile.attributes() {
        assert!(is_valid_label(dimension, &attr.value), "{dimension}: {}", attr.value);
    }
    assert_eq!(profile.insights.len(), 1);
}

#[tokio::test]
async fn identical_snapshot_hits_cache_without_calling_remote() {
    let engine = ProfileEngine::with_remote(
        &VisageConfig::default(),
        FakeRemote::new(Behavior::Fail(RemoteError::Network {
            reason: "refused".into(),
        })),
    );
    let bag = test_fixtures::load_signal_bag("family_suburb");

    let first = engine.compute(&bag).await;
    let second = engine.compute(&bag.clone()).await;
    assert_eq!(first.source, ProfileSource::Local);
    assert_eq!(second.source, ProfileSource::Cache);
    assert_eq!(first.profile, second.profile);
    assert!(second.degradations.is_empty());
}

#[tokio::test]
async fn disabled_cache_recomputes() {
    let remote = FakeRemote::new(Behavior::Succeed(remote_profile()));
    let engine = ProfileEngine::with_remote(&config("[cache]\nenabled = false\n"), remote);
    let bag = SignalBag::default();
    assert_eq!(engine.compute(&bag).await.source, ProfileSource::Remote);
    assert_eq!(engine.compute(&bag).await.source, ProfileSource::Remote);
    assert!(engine.cache().is_none());
}

#[tokio::test]
async fn local_engine_never_calls_out() {
    let engine = ProfileEngine::local(&VisageConfig::default());
    let outcome = engine.compute(&test_fixtures::load_signal_bag("crypto_night_owl")).await;
    assert_eq!(outcome.source, ProfileSource::Local);
    assert!(outcome.degradations.is_empty());
}

#[tokio::test]
async fn remote_is_called_once_per_fresh_snapshot() {
    let remote = FakeRemote::new(Behavior::Succeed(remote_profile()));
    let engine = ProfileEngine::with_remote(&VisageConfig::default(), remote);
    let mut bag = SignalBag::default();
    engine.compute(&bag).await;
    engine.compute(&bag).await;
    bag.hardware.cpu_cores = Some(4);
    engine.compute(&bag).await;

    let calls = engine.remote().map(|r| r.calls.load(Ordering::SeqCst));
    assert_eq!(calls, Some(2));
}

#[tokio::test]
async fn engine_honours_project_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("visage.toml"),
        "[insights]\nmax_insights = 2\nmin_insights = 1\n",
    )
    .unwrap();
    let config = VisageConfig::load_with_env(dir.path(), |_| None).unwrap();
    let engine = ProfileEngine::from_config(&config).unwrap();
    assert!(engine.remote().is_none());

    let outcome = engine
        .compute(&test_fixtures::load_signal_bag("crypto_night_owl"))
        .await;
    assert_eq!(outcome.profile.insights.len(), 2);
}
