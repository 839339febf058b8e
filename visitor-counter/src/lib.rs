pub use crate::{
    config::{CounterConfig, ConfigLoadError},
    dynamodb::DynamoDbStore,
    invocation::{InvocationError, invoke},
};

pub mod config;
pub mod dynamodb;
pub mod invocation;
pub mod logs;
