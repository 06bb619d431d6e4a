pub trait Logger {
    fn warn(&self, message: String);
    fn error(&self, message: String);
}

/// Forwards to whatever `tracing` subscriber the binary installed.
#[derive(Default)]
pub struct TracingLogger;
impl Logger for TracingLogger {
    fn warn(&self, message: String) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: String) {
        tracing::error!("{}", message);
    }
}

#[derive(Default)]
pub struct NoopLogger;
impl Logger for NoopLogger {
    fn warn(&self, _message: String) {}

    fn error(&self, _message: String) {}
}
