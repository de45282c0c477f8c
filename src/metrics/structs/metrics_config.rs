/// Naming and labeling shared by all collectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    pub namespace: String,
    /// Append a `backend` label to every series.
    pub backend_label: bool,
}
