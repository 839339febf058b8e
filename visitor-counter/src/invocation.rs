use {
    tracing::Instrument,
    thiserror::Error,
    lambda_runtime::{Diagnostic, LambdaEvent},
    visitor_counter_core::{CounterHandler, CounterResponse, CounterStore, HandlerError, InvocationEvent},
    crate::logs::invocation_span,
};

/// Failure reported to the hosting runtime. Keeps the handler error's class
/// as the invocation `errorType`.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error(transparent)]
pub struct InvocationError(#[from] pub HandlerError);

impl InvocationError {
    pub fn error_type(&self) -> &'static str {
        match &self.0 {
            HandlerError::StoreOperationFailed(_) => "StoreOperationFailed",
        }
    }
}

impl From<InvocationError> for Diagnostic {
    fn from(err: InvocationError) -> Self {
        Self {
            error_type: err.error_type().to_owned(),
            error_message: err.to_string(),
        }
    }
}

/// Runs one invocation inside a span carrying the runtime request id.
pub async fn invoke<S: CounterStore>(
    handler: &CounterHandler<S>,
    event: LambdaEvent<InvocationEvent>,
) -> Result<CounterResponse, InvocationError> {
    let (payload, context) = event.into_parts();
    Ok(handler.handle(payload)
        .instrument(invocation_span(&context.request_id))
        .await?)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        visitor_counter_core::StoreError,
    };

    #[test]
    fn diagnostic_keeps_error_class() {
        let err = InvocationError::from(HandlerError::StoreOperationFailed(StoreError::RequestFailed {
            reason: "ProvisionedThroughputExceededException".to_owned(),
        }));

        let diagnostic = Diagnostic::from(err);

        assert_eq!("StoreOperationFailed", diagnostic.error_type);
        assert_eq!(
            "store operation failed: store request failed: ProvisionedThroughputExceededException",
            diagnostic.error_message,
        );
    }
}
