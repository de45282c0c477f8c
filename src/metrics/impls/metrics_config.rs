use prometheus::{GaugeVec, Opts};
use crate::config::structs::configuration::Configuration;
use crate::metrics::structs::metrics_config::MetricsConfig;

pub const BACKEND_LABEL: &str = "backend";

impl MetricsConfig {
    pub fn from_config(config: &Configuration) -> MetricsConfig {
        MetricsConfig {
            namespace: config.namespace.clone(),
            backend_label: config.backends.len() > 1 || config.always_label_backend,
        }
    }

    /// A `<namespace>_<name>` gauge family, with the `backend` label appended
    /// when series are labeled by backend.
    pub fn gauge_vec(&self, name: &str, help: &str, label_names: &[&str]) -> Result<GaugeVec, prometheus::Error> {
        let mut labels = label_names.to_vec();
        if self.backend_label {
            labels.push(BACKEND_LABEL);
        }
        GaugeVec::new(Opts::new(name, help).namespace(self.namespace.as_str()), &labels)
    }

    /// Appends the backend name to `values` when series are labeled by backend.
    pub fn label_values<'a>(&self, backend: &'a str, values: &[&'a str]) -> Vec<&'a str> {
        let mut labels = values.to_vec();
        if self.backend_label {
            labels.push(backend);
        }
        labels
    }
}
