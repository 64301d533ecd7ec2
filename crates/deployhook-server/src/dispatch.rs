//! Deploy service wrappers.

use std::sync::Arc;

use async_trait::async_trait;
use deployhook_dispatch_interface::{
    DeployService, DispatchError, DispatchFailureSink, LoggingFailureSink,
};
use deployhook_dispatch_process::ProcessDeployService;
use deployhook_models::DeployCommand;

use crate::metrics::{DEPLOY_DISPATCHES, DEPLOY_DISPATCH_FAILURES};

/// Process deploy service with metrics.
pub struct MetricsDeployService {
    inner: ProcessDeployService,
}

impl MetricsDeployService {
    /// Creates a new service.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            inner: ProcessDeployService::with_failure_sink(
                max_concurrent,
                Arc::new(MetricsFailureSink::default()),
            ),
        }
    }
}

#[async_trait]
impl DeployService for MetricsDeployService {
    async fn dispatch(&self, command: DeployCommand) -> Result<(), DispatchError> {
        DEPLOY_DISPATCHES.inc();
        self.inner.dispatch(command).await.map_err(|e| {
            DEPLOY_DISPATCH_FAILURES.inc();
            e
        })
    }

    async fn health_check(&self) -> Result<(), DispatchError> {
        self.inner.health_check().await
    }
}

#[derive(Default)]
struct MetricsFailureSink {
    inner: LoggingFailureSink,
}

impl DispatchFailureSink for MetricsFailureSink {
    fn report(&self, command: &DeployCommand, error: &DispatchError) {
        DEPLOY_DISPATCH_FAILURES.inc();
        self.inner.report(command, error);
    }
}
