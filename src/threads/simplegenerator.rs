use std::sync::{
    Arc,
    Mutex
};
use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{
    debug,
    info
};

use crate::threads::actorreport::ActorReport;
use crate::threads::cancellationtoken::CancellationToken;
use crate::threads::task::lock_task;
use crate::threads::task::Task;

/// Rewrites the shared task `count` times, with no coordination beyond the lock.
pub struct SimpleGenerator {
    task: Arc<Mutex<Task>>,
    token: CancellationToken,
    rng: StdRng,
    pause: Duration,
}

impl SimpleGenerator {
    pub fn new(task: Arc<Mutex<Task>>, token: CancellationToken, rng: StdRng, pause: Duration) -> SimpleGenerator {
        SimpleGenerator { task, token, rng, pause }
    }

    pub fn run(mut self) -> ActorReport {
        let mut report = ActorReport::new("simple generator");
        let count = lock_task(&self.task).count();
        for iteration in 0..count {
            if self.token.is_cancelled() {
                report.mark_cancelled();
                break;
            }
            let bounds = lock_task(&self.task).randomize(&mut self.rng);
            info!(iteration, left_x = bounds.left_x, right_x = bounds.right_x, step = bounds.step, "source");
            report.record_task(bounds);
            if !self.token.sleep(self.pause) {
                report.mark_cancelled();
                break;
            }
        }
        debug!(written = report.tasks().len(), cancelled = report.cancelled(), "simple generator finished");
        report
    }
}
