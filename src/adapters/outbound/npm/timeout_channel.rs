use crate::dependency_management::domain::DependencyType;
use crate::ports::outbound::{
    ManifestSection, MutationChannel, MutationRequest, MutationResponse, OutdatedChannel,
};
use crate::shared::error::DependencyError;
use crate::shared::Result;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// Default per-request limit
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// TimeoutChannel wraps a channel and bounds every request it forwards.
///
/// Decorator over either channel port. Requests cannot be cancelled once
/// issued; on timeout the caller stops waiting and gets
/// `DependencyError::Timeout`, while dropping the inner future lets the
/// adapter clean up (the npm adapter kills its child process on drop).
#[derive(Debug, Clone)]
pub struct TimeoutChannel<C> {
    inner: C,
    timeout: Duration,
}

impl<C> TimeoutChannel<C> {
    pub fn new(inner: C, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn bounded<T>(
        &self,
        operation: &str,
        request: impl Future<Output = Result<T>> + Send,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(DependencyError::Timeout {
                operation: operation.to_string(),
                seconds: self.timeout.as_secs(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl<C: MutationChannel> MutationChannel for TimeoutChannel<C> {
    fn is_available(&self) -> bool {
        self.inner.is_available()
    }

    async fn query_manifest_section(
        &self,
        dependency_type: DependencyType,
    ) -> Result<Option<ManifestSection>> {
        self.bounded(
            "package",
            self.inner.query_manifest_section(dependency_type),
        )
        .await
    }

    async fn mutate(&self, request: MutationRequest) -> Result<MutationResponse> {
        let operation = request.resource();
        self.bounded(operation, self.inner.mutate(request)).await
    }
}

#[async_trait]
impl<C: OutdatedChannel> OutdatedChannel for TimeoutChannel<C> {
    fn is_available(&self) -> bool {
        self.inner.is_available()
    }

    async fn query_outdated(&self) -> Result<String> {
        self.bounded("outdated", self.inner.query_outdated()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Outdated channel that answers after a fixed delay
    struct SlowOutdatedChannel {
        delay: Duration,
        calls: AtomicUsize,
    }

    impl SlowOutdatedChannel {
        fn new(delay: Duration) -> Self {
            Self {
                delay,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl OutdatedChannel for SlowOutdatedChannel {
        async fn query_outdated(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok("{}".to_string())
        }
    }

    #[tokio::test]
    async fn test_fast_request_passes_through() {
        let channel = TimeoutChannel::new(
            SlowOutdatedChannel::new(Duration::from_millis(1)),
            Duration::from_secs(5),
        );

        assert_eq!(channel.query_outdated().await.unwrap(), "{}");
        assert_eq!(channel.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let channel = TimeoutChannel::new(
            SlowOutdatedChannel::new(Duration::from_secs(5)),
            Duration::from_millis(20),
        );

        let err = channel.query_outdated().await.unwrap_err();
        match err.downcast_ref::<DependencyError>() {
            Some(DependencyError::Timeout { operation, .. }) => assert_eq!(operation, "outdated"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_availability_is_delegated() {
        struct Offline;

        #[async_trait]
        impl OutdatedChannel for Offline {
            fn is_available(&self) -> bool {
                false
            }

            async fn query_outdated(&self) -> Result<String> {
                unreachable!("offline channel is never queried")
            }
        }

        let channel = TimeoutChannel::new(Offline, DEFAULT_REQUEST_TIMEOUT);
        assert!(!channel.is_available());
        assert_eq!(channel.timeout(), DEFAULT_REQUEST_TIMEOUT);
    }
}
