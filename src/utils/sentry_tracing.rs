use sentry::{Transaction, TransactionContext};

/// Opens a Sentry transaction when the exporter logs at trace level, so
/// scrape timings are only shipped while debugging.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() < log::LevelFilter::Trace {
        return None;
    }
    Some(sentry::start_transaction(TransactionContext::new(name, operation)))
}
