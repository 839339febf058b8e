use {
    tracing::{info, error},
    crate::{
        error::HandlerError,
        event::InvocationEvent,
        record::CounterRecord,
        response::CounterResponse,
        store::CounterStore,
    },
};

/// Increments the visit counter once per invocation and reports the new value.
pub struct CounterHandler<S> {
    store: S,
    record: CounterRecord,
}

impl<S: CounterStore> CounterHandler<S> {
    pub fn new(store: S, record: CounterRecord) -> Self {
        Self {
            store,
            record,
        }
    }

    pub fn record(&self) -> &CounterRecord {
        &self.record
    }

    pub async fn handle(&self, _event: InvocationEvent) -> Result<CounterResponse, HandlerError> {
        let count = self.store.increment(&self.record).await
            .inspect_err(|err| error!(key = %self.record.key, "failed to increment visitor counter: {err}"))?;
        info!(key = %self.record.key, count, "visitor counter incremented");
        Ok(CounterResponse::visitor_count(count))
    }
}
