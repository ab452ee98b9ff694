use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{
    debug,
    info
};

use crate::threads::actorreport::ActorReport;
use crate::threads::cancellationtoken::CancellationToken;
use crate::threads::semaphoreslot::SlotWriter;
use crate::threads::task::Task;

/// Hands a fresh task to the integrator on every iteration.
pub struct Generator {
    slot: SlotWriter<Task>,
    task: Task,
    token: CancellationToken,
    rng: StdRng,
    pause: Duration,
}

impl Generator {
    pub fn new(slot: SlotWriter<Task>, count: usize, token: CancellationToken, rng: StdRng, pause: Duration) -> Generator {
        Generator { slot, task: Task::new(count), token, rng, pause }
    }

    pub fn run(mut self) -> ActorReport {
        let mut report = ActorReport::new("generator");
        for iteration in 0..self.task.count() {
            if self.token.is_cancelled() {
                report.mark_cancelled();
                break;
            }
            let bounds = self.task.randomize(&mut self.rng);
            if self.slot.write(self.task.clone()).is_err() {
                debug!(iteration, "integrator gone, generator stops");
                if self.token.is_cancelled() {
                    report.mark_cancelled();
                }
                break;
            }
            info!(iteration, left_x = bounds.left_x, right_x = bounds.right_x, step = bounds.step, "source");
            report.record_task(bounds);
            if !self.token.sleep(self.pause) {
                report.mark_cancelled();
                break;
            }
        }
        debug!(written = report.tasks().len(), cancelled = report.cancelled(), "generator finished");
        report
    }
}
