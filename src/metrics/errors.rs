use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Duplicate metric descriptor: {0}")]
    DuplicateDescriptor(String),

    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Exposition is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_descriptor_display() {
        let error = MetricsError::DuplicateDescriptor("transmission_version".to_string());
        assert_eq!(format!("{}", error), "Duplicate metric descriptor: transmission_version");
    }

    #[test]
    fn test_from_prometheus_error() {
        let error: MetricsError = prometheus::Error::AlreadyReg.into();
        assert!(matches!(error, MetricsError::Prometheus(_)));
    }
}
