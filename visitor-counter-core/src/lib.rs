pub use crate::{
    error::{HandlerError, StoreError},
    event::InvocationEvent,
    handler::CounterHandler,
    record::CounterRecord,
    response::CounterResponse,
    store::{CounterStore, InMemoryStore},
};

pub mod error;
pub mod event;
pub mod handler;
pub mod record;
pub mod response;
pub mod store;
