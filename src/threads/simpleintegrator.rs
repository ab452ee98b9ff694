use std::sync::{
    Arc,
    Mutex
};
use std::time::Duration;

use tracing::{
    debug,
    info,
    warn
};

use crate::threads::actorreport::ActorReport;
use crate::threads::cancellationtoken::CancellationToken;
use crate::threads::task::lock_task;
use crate::threads::task::Task;

/// Integrates whatever the shared task holds, `count` times.
///
/// Reads are not paired with writes: a task can be integrated twice or never.
pub struct SimpleIntegrator {
    task: Arc<Mutex<Task>>,
    token: CancellationToken,
    pause: Duration,
}

impl SimpleIntegrator {
    pub fn new(task: Arc<Mutex<Task>>, token: CancellationToken, pause: Duration) -> SimpleIntegrator {
        SimpleIntegrator { task, token, pause }
    }

    pub fn run(self) -> ActorReport {
        let mut report = ActorReport::new("simple integrator");
        let count = lock_task(&self.task).count();
        for iteration in 0..count {
            if self.token.is_cancelled() {
                report.mark_cancelled();
                break;
            }
            // one consistent copy; integration runs outside the lock
            let snapshot = lock_task(&self.task).clone();
            match (snapshot.bounds(), snapshot.integrate()) {
                (Some(bounds), Some(Ok(integral))) => {
                    info!(iteration, left_x = bounds.left_x, right_x = bounds.right_x, step = bounds.step, integral, "result");
                    report.record_task(bounds);
                    report.record_integral(integral);
                }
                (Some(bounds), Some(Err(error))) => {
                    warn!(iteration, %error, "integration failed");
                    report.record_task(bounds);
                    report.record_failure();
                }
                _ => debug!(iteration, "no task yet"),
            }
            if !self.token.sleep(self.pause) {
                report.mark_cancelled();
                break;
            }
        }
        debug!(read = report.tasks().len(), cancelled = report.cancelled(), "simple integrator finished");
        report
    }
}
