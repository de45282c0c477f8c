/// Source of "now" for time-derived gauges.
pub mod clock;
