/// Plain message error used during startup.
pub mod custom_error;

/// Clock reading the system time.
pub mod system_clock;
