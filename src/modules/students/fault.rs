//! Unreliable store wrapper for load and chaos testing.
//!
//! Every call sleeps for one to four delay steps, then resolves to one of
//! four equally likely outcomes: not found, a retrieval failure, or (twice)
//! the wrapped store's answer.

use async_trait::async_trait;
use metrics::counter;
use rand::Rng;
use rollcall_config::FaultConfig;
use rollcall_models::ClassroomId;
use std::time::Duration;
use tracing::debug;

use super::service::{StoreError, StoreResult, StudentsStore};

pub const DELAY_BUCKETS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultOutcome {
    NotFound,
    Failure,
    Delegate,
}

impl FaultOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            FaultOutcome::NotFound => "not_found",
            FaultOutcome::Failure => "failure",
            FaultOutcome::Delegate => "delegate",
        }
    }
}

/// Outcome and delay for a single call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaultPlan {
    pub outcome: FaultOutcome,
    pub delay: Duration,
}

impl FaultPlan {
    /// Category and delay bucket are drawn independently, each from `0..4`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, delay_step: Duration) -> Self {
        let outcome = match rng.random_range(0..4u8) {
            0 => FaultOutcome::NotFound,
            1 => FaultOutcome::Failure,
            _ => FaultOutcome::Delegate,
        };
        let bucket = rng.random_range(0..DELAY_BUCKETS);

        Self {
            outcome,
            delay: delay_step * (bucket + 1),
        }
    }
}

pub struct FaultInjectingStore<S> {
    inner: S,
    delay_step: Duration,
}

impl<S: StudentsStore> FaultInjectingStore<S> {
    pub fn new(inner: S, config: &FaultConfig) -> Self {
        Self {
            inner,
            delay_step: config.delay_step,
        }
    }
}

#[async_trait]
impl<S: StudentsStore> StudentsStore for FaultInjectingStore<S> {
    async fn get_students(&self, classroom_id: ClassroomId) -> StoreResult {
        // Thread-local rng is not Send; it must be gone before the first await.
        let plan = FaultPlan::draw(&mut rand::rng(), self.delay_step);

        tokio::time::sleep(plan.delay).await;

        if plan.outcome != FaultOutcome::Delegate {
            debug!(
                classroom_id = %classroom_id,
                fault = plan.outcome.as_str(),
                delay_ms = plan.delay.as_millis() as u64,
                "Injecting fault"
            );
            counter!("student_api_injected_faults_total", "kind" => plan.outcome.as_str())
                .increment(1);
        }

        match plan.outcome {
            FaultOutcome::NotFound => Ok(None),
            FaultOutcome::Failure => Err(StoreError::Retrieval(format!(
                "injected failure for classroom {classroom_id}"
            ))),
            FaultOutcome::Delegate => self.inner.get_students(classroom_id).await,
        }
    }

    fn describe(&self) -> String {
        format!("FaultInjectingStore({})", self.inner.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::students::service::test_support::{Scripted, ScriptedStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    const STEP: Duration = Duration::from_millis(500);

    #[test]
    fn test_outcome_distribution() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let draws = 10_000;
        let mut counts: HashMap<FaultOutcome, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(FaultPlan::draw(&mut rng, STEP).outcome).or_default() += 1;
        }

        let share = |o: FaultOutcome| counts.get(&o).copied().unwrap_or(0) as f64 / draws as f64;
        assert!((share(FaultOutcome::NotFound) - 0.25).abs() < 0.05);
        assert!((share(FaultOutcome::Failure) - 0.25).abs() < 0.05);
        assert!((share(FaultOutcome::Delegate) - 0.50).abs() < 0.05);
    }

    #[test]
    fn test_delays_fall_in_four_buckets() {
        let mut rng = StdRng::seed_from_u64(42);
        let delays: HashSet<Duration> = (0..1_000)
            .map(|_| FaultPlan::draw(&mut rng, STEP).delay)
            .collect();

        let expected: HashSet<Duration> = [500, 1000, 1500, 2000]
            .into_iter()
            .map(Duration::from_millis)
            .collect();
        assert_eq!(delays, expected);
    }

    #[test]
    fn test_delay_scales_with_step() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let delay = FaultPlan::draw(&mut rng, Duration::from_millis(10)).delay;
            assert!(delay >= Duration::from_millis(10) && delay <= Duration::from_millis(40));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_produces_every_outcome() {
        let store = FaultInjectingStore::new(
            ScriptedStore::new(Scripted::Roster),
            &FaultConfig::default(),
        );
        let id = ClassroomId::from_u128(1);

        let (mut found, mut missing, mut failed) = (0, 0, 0);
        for _ in 0..200 {
            match store.get_students(id).await {
                Ok(Some(_)) => found += 1,
                Ok(None) => missing += 1,
                Err(StoreError::Retrieval(_)) => failed += 1,
            }
        }

        assert!(found > 0 && missing > 0 && failed > 0);
        assert_eq!(store.inner.calls(), found);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_before_answering() {
        let store = FaultInjectingStore::new(
            ScriptedStore::new(Scripted::Roster),
            &FaultConfig::default(),
        );

        let start = tokio::time::Instant::now();
        let _ = store.get_students(ClassroomId::from_u128(2)).await;
        let waited = start.elapsed();

        assert!(waited >= Duration::from_millis(500));
        assert!(waited <= Duration::from_millis(2_100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_passes_inner_failure_through() {
        let store = FaultInjectingStore::new(
            ScriptedStore::new(Scripted::Fail),
            &FaultConfig::default(),
        );

        for _ in 0..50 {
            if let Ok(Some(_)) = store.get_students(ClassroomId::from_u128(3)).await {
                panic!("inner store never returns a roster");
            }
        }
    }

    #[test]
    fn test_describe_names_inner_store() {
        let store = FaultInjectingStore::new(
            ScriptedStore::new(Scripted::Missing),
            &FaultConfig::default(),
        );
        assert_eq!(store.describe(), "FaultInjectingStore(ScriptedStore)");
    }
}
