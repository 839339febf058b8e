use {
    tracing::{Level, Span, info_span},
    tracing_subscriber::FmtSubscriber,
};

/// Lines go to stdout, where the hosting runtime collects and timestamps them.
pub fn init_logging() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

pub fn invocation_span(request_id: &str) -> Span {
    info_span!("invocation", request_id = %request_id)
}
