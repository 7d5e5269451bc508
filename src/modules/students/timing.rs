//! Latency tracking wrapper.

use async_trait::async_trait;
use metrics::Histogram;
use rollcall_models::ClassroomId;
use std::time::Instant;

use super::service::{StoreResult, StudentsStore};

/// Records elapsed seconds into a histogram when dropped.
///
/// Dropping also happens on early return, panic, or when the request future
/// is abandoned, so every call yields exactly one sample.
#[must_use = "the timer records when dropped"]
pub struct HistogramTimer<'a> {
    histogram: &'a Histogram,
    start: Instant,
}

impl<'a> HistogramTimer<'a> {
    pub fn start(histogram: &'a Histogram) -> Self {
        Self {
            histogram,
            start: Instant::now(),
        }
    }
}

impl Drop for HistogramTimer<'_> {
    fn drop(&mut self) {
        self.histogram.record(self.start.elapsed().as_secs_f64());
    }
}

pub struct TimedStudentsStore<S> {
    inner: S,
    histogram: Histogram,
}

impl<S: StudentsStore> TimedStudentsStore<S> {
    /// `histogram` is registered once at startup, see
    /// [`crate::metrics::store_duration_histogram`].
    pub fn new(inner: S, histogram: Histogram) -> Self {
        Self { inner, histogram }
    }
}

#[async_trait]
impl<S: StudentsStore> StudentsStore for TimedStudentsStore<S> {
    async fn get_students(&self, classroom_id: ClassroomId) -> StoreResult {
        let _timer = HistogramTimer::start(&self.histogram);
        self.inner.get_students(classroom_id).await
    }

    fn describe(&self) -> String {
        format!("TimedStudentsStore({})", self.inner.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::students::service::StoreError;
    use crate::modules::students::service::test_support::{Scripted, ScriptedStore};
    use metrics::HistogramFn;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct Samples(Mutex<Vec<f64>>);

    impl HistogramFn for Samples {
        fn record(&self, value: f64) {
            self.0.lock().unwrap().push(value);
        }
    }

    impl Samples {
        fn len(&self) -> usize {
            self.0.lock().unwrap().len()
        }
    }

    fn timed(outcome: Scripted) -> (TimedStudentsStore<ScriptedStore>, Arc<Samples>) {
        let samples = Arc::new(Samples::default());
        let store = TimedStudentsStore::new(
            ScriptedStore::new(outcome),
            Histogram::from_arc(samples.clone()),
        );
        (store, samples)
    }

    #[tokio::test]
    async fn test_records_on_success() {
        let (store, samples) = timed(Scripted::Roster);
        let result = store.get_students(ClassroomId::from_u128(1)).await;
        assert_eq!(result.unwrap().unwrap().len(), 1);
        assert_eq!(samples.len(), 1);
    }

    #[tokio::test]
    async fn test_records_on_absence() {
        let (store, samples) = timed(Scripted::Missing);
        assert!(store.get_students(ClassroomId::from_u128(1)).await.unwrap().is_none());
        assert_eq!(samples.len(), 1);
    }

    #[tokio::test]
    async fn test_records_on_failure() {
        let (store, samples) = timed(Scripted::Fail);
        let err = store.get_students(ClassroomId::from_u128(1)).await.unwrap_err();
        assert!(matches!(err, StoreError::Retrieval(_)));
        assert_eq!(samples.len(), 1);
    }

    #[tokio::test]
    async fn test_one_sample_per_call() {
        let (store, samples) = timed(Scripted::Roster);
        for _ in 0..5 {
            let _ = store.get_students(ClassroomId::from_u128(9)).await;
        }
        assert_eq!(samples.len(), 5);
        assert_eq!(store.inner.calls(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_records_when_call_is_abandoned() {
        use crate::modules::students::fault::FaultInjectingStore;
        use rollcall_config::FaultConfig;

        let samples = Arc::new(Samples::default());
        let slow = FaultInjectingStore::new(
            ScriptedStore::new(Scripted::Roster),
            &FaultConfig {
                enabled: true,
                delay_step: Duration::from_secs(60),
            },
        );
        let store = TimedStudentsStore::new(slow, Histogram::from_arc(samples.clone()));

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            store.get_students(ClassroomId::from_u128(4)),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_timer_records_elapsed_seconds() {
        let samples = Arc::new(Samples::default());
        let histogram = Histogram::from_arc(samples.clone());
        {
            let _timer = HistogramTimer::start(&histogram);
            std::thread::sleep(Duration::from_millis(5));
        }
        let recorded = samples.0.lock().unwrap()[0];
        assert!(recorded >= 0.005);
    }

    #[test]
    fn test_describe() {
        let (store, _) = timed(Scripted::Roster);
        assert_eq!(store.describe(), "TimedStudentsStore(ScriptedStore)");
    }
}
