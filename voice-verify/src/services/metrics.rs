use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Prometheus collectors for this process, shared through `AppState`.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
    verification_attempts_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            ),
            &["method", "path", "status"],
        )?;

        let verification_attempts_total = IntCounterVec::new(
            Opts::new(
                "verification_attempts_total",
                "Calls made to the verification provider by step and outcome",
            ),
            &["step", "outcome"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(verification_attempts_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            verification_attempts_total,
        })
    }

    pub fn observe_request(&self, method: &str, path: &str, status: &str, seconds: f64) {
        let labels = [method, path, status];
        self.http_requests_total.with_label_values(&labels).inc();
        self.http_request_duration_seconds
            .with_label_values(&labels)
            .observe(seconds);
    }

    /// `step` is `create` or `confirm`; `outcome` is `success` or `failure`.
    pub fn record_verification(&self, step: &str, outcome: &str) {
        self.verification_attempts_total
            .with_label_values(&[step, outcome])
            .inc();
    }

    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
