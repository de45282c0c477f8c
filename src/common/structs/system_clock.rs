/// Clock returning the current UTC time of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;
