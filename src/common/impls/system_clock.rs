use crate::common::structs::system_clock::SystemClock;
use crate::common::traits::clock::Clock;

impl Clock for SystemClock {
    fn timestamp(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
