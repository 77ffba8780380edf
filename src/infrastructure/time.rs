use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// Wall clock in UTC. Upload timestamps carry whole seconds only, so the
/// sub-second part is dropped here.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }
}
