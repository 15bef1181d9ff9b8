//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use kopt_core::prelude::{Float, Quota, TimeQuota};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Creates interruption quota: it is reached when time limit is exceeded or the process is interrupted.
pub fn create_interruption_quota(max_time: Option<usize>) -> Arc<dyn Quota> {
    let inner = max_time.map::<Arc<dyn Quota>, _>(|time| Arc::new(TimeQuota::new(time as Float)));

    Arc::new(InterruptionQuota { inner, should_interrupt: get_interruption_flag() })
}

/// Returns a process wide flag set by Ctrl-C handler. The handler can be registered only once
/// per process, so the flag is shared between all quotas.
fn get_interruption_flag() -> Option<Arc<AtomicBool>> {
    static FLAG: OnceLock<Option<Arc<AtomicBool>>> = OnceLock::new();

    FLAG.get_or_init(|| {
        let should_interrupt = Arc::new(AtomicBool::new(false));

        ctrlc::set_handler({
            let should_interrupt = should_interrupt.clone();
            move || {
                should_interrupt.store(true, Ordering::Relaxed);
            }
        })
        .ok()
        .map(|_| should_interrupt)
    })
    .clone()
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota>>,
    should_interrupt: Option<Arc<AtomicBool>>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached())
            || self.should_interrupt.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
