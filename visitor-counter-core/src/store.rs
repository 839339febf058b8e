use {
    std::{collections::HashMap, sync::{Arc, Mutex}},
    futures::{FutureExt, future::{self, BoxFuture}},
    crate::{error::StoreError, record::CounterRecord},
};

/// Remote table exposing an atomic add primitive.
pub trait CounterStore {
    /// Atomically adds one to the record's count attribute, creating it with
    /// zero first when absent, and returns the value after this increment.
    /// Concurrent callers must never lose an increment.
    fn increment<'a>(&'a self, record: &'a CounterRecord) -> BoxFuture<'a, Result<u64, StoreError>>;
}

impl<T: CounterStore + ?Sized> CounterStore for &T {
    fn increment<'a>(&'a self, record: &'a CounterRecord) -> BoxFuture<'a, Result<u64, StoreError>> {
        (**self).increment(record)
    }
}

impl<T: CounterStore + ?Sized> CounterStore for Arc<T> {
    fn increment<'a>(&'a self, record: &'a CounterRecord) -> BoxFuture<'a, Result<u64, StoreError>> {
        (**self).increment(record)
    }
}

/// Store kept in process memory. Used for local runs and tests.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    counters: Arc<Mutex<HashMap<CounterRecord, u64>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(self, record: &CounterRecord, count: u64) -> Result<Self, StoreError> {
        self.lock()?.insert(record.clone(), count);
        Ok(self)
    }

    pub fn count(&self, record: &CounterRecord) -> Result<Option<u64>, StoreError> {
        Ok(self.lock()?.get(record).copied())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<CounterRecord, u64>>, StoreError> {
        self.counters.lock()
            .map_err(|err| StoreError::RequestFailed { reason: format!("failed to lock counters: {err:?}") })
    }

    fn increment_now(&self, record: &CounterRecord) -> Result<u64, StoreError> {
        let mut counters = self.lock()?;
        let count = counters.entry(record.clone()).or_insert(0);
        let next = count.checked_add(1)
            .ok_or_else(|| StoreError::InvalidValue { value: format!("{count} + 1 overflows") })?;
        *count = next;
        Ok(next)
    }
}

impl CounterStore for InMemoryStore {
    fn increment<'a>(&'a self, record: &'a CounterRecord) -> BoxFuture<'a, Result<u64, StoreError>> {
        future::ready(self.increment_now(record)).boxed()
    }
}
