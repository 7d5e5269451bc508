use metrics::Histogram;
use rollcall_config::FaultConfig;
use std::fmt;
use std::sync::Arc;

use crate::modules::students::fault::FaultInjectingStore;
use crate::modules::students::generator::GeneratedStudentsStore;
use crate::modules::students::service::StudentsStore;
use crate::modules::students::timing::TimedStudentsStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentsStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StudentsStore>) -> Self {
        Self { store }
    }

    /// State backed by the bare generator, with no faults and no timing.
    pub fn reliable() -> Self {
        Self::new(Arc::new(GeneratedStudentsStore))
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.describe())
            .finish()
    }
}

/// Compose the store chain: timer outermost, then the fault injector, then
/// the generator. Either wrapper is skipped when not configured.
pub fn build_store(fault: &FaultConfig, histogram: Option<Histogram>) -> Arc<dyn StudentsStore> {
    let base = GeneratedStudentsStore;

    let inner: Arc<dyn StudentsStore> = if fault.enabled {
        Arc::new(FaultInjectingStore::new(base, fault))
    } else {
        Arc::new(base)
    };

    match histogram {
        Some(histogram) => Arc::new(TimedStudentsStore::new(inner, histogram)),
        None => inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_chain() {
        let store = build_store(&FaultConfig::default(), Some(Histogram::noop()));
        assert_eq!(
            store.describe(),
            "TimedStudentsStore(FaultInjectingStore(GeneratedStudentsStore))"
        );
    }

    #[test]
    fn test_chain_without_faults() {
        let store = build_store(&FaultConfig::disabled(), Some(Histogram::noop()));
        assert_eq!(store.describe(), "TimedStudentsStore(GeneratedStudentsStore)");
    }

    #[test]
    fn test_bare_generator() {
        let store = build_store(&FaultConfig::disabled(), None);
        assert_eq!(store.describe(), "GeneratedStudentsStore");
        assert_eq!(
            format!("{:?}", AppState::new(store)),
            "AppState { store: \"GeneratedStudentsStore\" }"
        );
    }
}
