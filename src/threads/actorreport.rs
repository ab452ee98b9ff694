use crate::threads::task::TaskBounds;

/// What one actor did during a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorReport {
    actor: &'static str,
    tasks: Vec<TaskBounds>,
    integrals: Vec<f64>,
    failures: usize,
    cancelled: bool,
}

impl ActorReport {
    pub fn new(actor: &'static str) -> ActorReport {
        ActorReport { actor, ..ActorReport::default() }
    }

    pub fn actor(&self) -> &'static str {
        self.actor
    }

    /// Tasks written (generators) or read (integrators), in order.
    pub fn tasks(&self) -> &[TaskBounds] {
        &self.tasks
    }

    /// Successful integrals, in order. Always empty for generators.
    pub fn integrals(&self) -> &[f64] {
        &self.integrals
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn cancelled(&self) -> bool {
        self.cancelled
    }

    pub(crate) fn record_task(&mut self, bounds: TaskBounds) {
        self.tasks.push(bounds);
    }

    pub(crate) fn record_integral(&mut self, integral: f64) {
        self.integrals.push(integral);
    }

    pub(crate) fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub(crate) fn mark_cancelled(&mut self) {
        self.cancelled = true;
    }
}
