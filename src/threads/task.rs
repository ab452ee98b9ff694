use std::fmt;
use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError
};

use rand::Rng;
use tracing::debug;

use crate::function::basic::logarithm::Log;
use crate::function::function::Function;
use crate::function::functionerror::Result;
use crate::function::functions::integrate;

pub type SharedFunction = Arc<dyn Function + Send + Sync>;

/// Integration interval and step of one task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskBounds {
    pub left_x: f64,
    pub right_x: f64,
    pub step: f64,
}

/// One unit of work handed from a generator to an integrator.
#[derive(Clone, Default)]
pub struct Task {
    function: Option<SharedFunction>,
    bounds: Option<TaskBounds>,
    count: usize,
}

impl Task {
    pub fn new(count: usize) -> Task {
        Task { function: None, bounds: None, count }
    }

    /// Number of iterations both actors run.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn function(&self) -> Option<&SharedFunction> {
        self.function.as_ref()
    }

    pub fn bounds(&self) -> Option<TaskBounds> {
        self.bounds
    }

    pub fn is_ready(&self) -> bool {
        self.function.is_some() && self.bounds.is_some()
    }

    pub fn set(&mut self, function: SharedFunction, bounds: TaskBounds) {
        self.function = Some(function);
        self.bounds = Some(bounds);
    }

    /// Fills the task with a logarithm of random base in `[1, 10)` to integrate
    /// over `[0, 100) .. [100, 200)` with a step in `(0, 1)`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> TaskBounds {
        let base: f64 = rng.random_range(1.0..10.0);
        // base 1 has no logarithm
        let log = Log::new(base).unwrap_or_else(|_| Log::natural());
        let mut step: f64 = rng.random();
        if step == 0.0 {
            step = 0.01;
        }
        let bounds = TaskBounds {
            left_x: rng.random_range(0.0..100.0),
            right_x: rng.random_range(100.0..200.0),
            step,
        };
        debug!(base = log.base(), left_x = bounds.left_x, right_x = bounds.right_x, step, "task randomized");
        self.set(Arc::new(log), bounds);
        bounds
    }

    /// `None` until the task has been filled.
    pub fn integrate(&self) -> Option<Result<f64>> {
        let function = self.function.as_ref()?;
        let bounds = self.bounds?;
        Some(integrate(&**function, bounds.left_x, bounds.right_x, bounds.step))
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("ready", &self.is_ready())
            .field("bounds", &self.bounds)
            .field("count", &self.count)
            .finish()
    }
}

/// Locks a shared task. A panicked peer leaves the task in a usable state.
pub(crate) fn lock_task(task: &Mutex<Task>) -> MutexGuard<'_, Task> {
    task.lock().unwrap_or_else(PoisonError::into_inner)
}
