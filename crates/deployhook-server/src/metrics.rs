use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

lazy_static! {
    pub static ref DEPLOY_DISPATCHES: IntCounter =
        IntCounter::new("deploy_dispatches", "Deploy commands submitted").unwrap();
    pub static ref DEPLOY_DISPATCH_FAILURES: IntCounter =
        IntCounter::new("deploy_dispatch_failures", "Deploy commands which failed to start")
            .unwrap();
    pub static ref DUPLICATE_PUSH_EVENTS: IntCounter =
        IntCounter::new("duplicate_push_events", "Push events dropped as repetitive").unwrap();
    pub static ref DENIED_PUSH_EVENTS: IntCounter =
        IntCounter::new("denied_push_events", "Push events denied by the deploy gate").unwrap();
}

pub(crate) fn build_metrics_handler() -> PrometheusMetrics {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .unwrap();

    setup_process_metrics(&prometheus);

    for counter in [
        &*DEPLOY_DISPATCHES,
        &*DEPLOY_DISPATCH_FAILURES,
        &*DUPLICATE_PUSH_EVENTS,
        &*DENIED_PUSH_EVENTS,
    ] {
        prometheus
            .registry
            .register(Box::new(counter.clone()))
            .unwrap();
    }

    prometheus
}

#[cfg(unix)]
fn setup_process_metrics(metrics: &PrometheusMetrics) {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .unwrap();
}

#[cfg(not(unix))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) {
    tracing::warn!("Process metrics are only supported on Unix.");
}
