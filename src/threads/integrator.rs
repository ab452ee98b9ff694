use std::time::Duration;

use tracing::{
    debug,
    info,
    warn
};

use crate::threads::actorreport::ActorReport;
use crate::threads::cancellationtoken::CancellationToken;
use crate::threads::semaphoreslot::SlotReader;
use crate::threads::task::Task;

/// Integrates every task the generator hands over, exactly once each.
pub struct Integrator {
    slot: SlotReader<Task>,
    count: usize,
    token: CancellationToken,
    pause: Duration,
}

impl Integrator {
    pub fn new(slot: SlotReader<Task>, count: usize, token: CancellationToken, pause: Duration) -> Integrator {
        Integrator { slot, count, token, pause }
    }

    pub fn run(self) -> ActorReport {
        let mut report = ActorReport::new("integrator");
        for iteration in 0..self.count {
            if self.token.is_cancelled() {
                report.mark_cancelled();
                break;
            }
            let Ok(task) = self.slot.read() else {
                debug!(iteration, "generator gone, integrator stops");
                if self.token.is_cancelled() {
                    report.mark_cancelled();
                }
                break;
            };
            let Some(bounds) = task.bounds() else {
                warn!(iteration, "received an empty task");
                continue;
            };
            report.record_task(bounds);
            match task.integrate() {
                Some(Ok(integral)) => {
                    info!(iteration, left_x = bounds.left_x, right_x = bounds.right_x, step = bounds.step, integral, "result");
                    report.record_integral(integral);
                }
                Some(Err(error)) => {
                    warn!(iteration, %error, "integration failed");
                    report.record_failure();
                }
                None => report.record_failure(),
            }
            if !self.token.sleep(self.pause) {
                report.mark_cancelled();
                break;
            }
        }
        debug!(read = report.tasks().len(), cancelled = report.cancelled(), "integrator finished");
        report
    }
}
