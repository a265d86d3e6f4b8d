use async_trait::async_trait;
use depdesk::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock OutdatedChannel that answers with a fixed `npm outdated --json` report
#[derive(Clone)]
pub struct MockOutdatedChannel {
    report: String,
    calls: Arc<AtomicUsize>,
}

impl MockOutdatedChannel {
    pub fn new(report: &str) -> Self {
        Self {
            report: report.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OutdatedChannel for MockOutdatedChannel {
    async fn query_outdated(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.report.clone())
    }
}
