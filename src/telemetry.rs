//! Progress reporting.
//!
//! The solvers never write anywhere on their own. A caller that wants
//! progress lines plugs in an [`InfoLogger`], e.g. one that prints to
//! stdout or forwards to its own logging stack.

use std::sync::Arc;

/// A sink for human-readable progress messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Sends `message` to the logger, if any. The message is built lazily.
pub(crate) fn log_info<F>(logger: Option<&InfoLogger>, message: F)
where
    F: FnOnce() -> String,
{
    if let Some(logger) = logger {
        (logger)(&message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_log_info_forwards_message() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        let logger: InfoLogger = Arc::new(move |msg: &str| {
            sink.lock().expect("lock").push(msg.to_string());
        });

        log_info(Some(&logger), || "hello".to_string());
        log_info(None, || unreachable!("no logger, no formatting"));

        assert_eq!(*lines.lock().expect("lock"), vec!["hello".to_string()]);
    }
}
