use std::sync::{
    Arc,
    Mutex
};
use std::thread::{
    self,
    JoinHandle
};
use std::time::{
    Duration,
    Instant
};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;
use tracing::{
    info,
    warn
};

use crate::configuration::ThreadsConfiguration;
use crate::threads::actorreport::ActorReport;
use crate::threads::cancellationtoken::CancellationToken;
use crate::threads::generator::Generator;
use crate::threads::integrator::Integrator;
use crate::threads::semaphoreslot::semaphore_slot;
use crate::threads::simplegenerator::SimpleGenerator;
use crate::threads::simpleintegrator::SimpleIntegrator;
use crate::threads::task::Task;

const DEFAULT_PAUSE: Duration = Duration::from_millis(1);
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// How the generator and the integrator share tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// Both lock one shared task; no ordering between writes and reads.
    Simple,
    /// Tasks go through a single-slot rendezvous; writes and reads alternate.
    #[default]
    Alternating,
}

#[derive(Debug, Error)]
pub enum ThreadsError {
    #[error("cannot spawn the {actor} thread: {source}")]
    Spawn {
        actor: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("the {0} thread panicked")]
    Panicked(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    discipline: Discipline,
    generator: ActorReport,
    integrator: ActorReport,
}

impl DemoReport {
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn generator(&self) -> &ActorReport {
        &self.generator
    }

    pub fn integrator(&self) -> &ActorReport {
        &self.integrator
    }
}

/// Runs one generator and one integrator thread and collects their reports.
///
/// The token is shared by every run of the launcher; once cancelled, later
/// runs stop immediately.
pub struct Launcher {
    configuration: ThreadsConfiguration,
    generator_pause: Duration,
    integrator_pause: Duration,
    seed: Option<u64>,
    token: CancellationToken,
}

impl Launcher {
    pub fn new(configuration: ThreadsConfiguration) -> Launcher {
        Launcher {
            configuration,
            generator_pause: DEFAULT_PAUSE,
            integrator_pause: DEFAULT_PAUSE,
            seed: None,
            token: CancellationToken::new(),
        }
    }

    /// Pause each actor takes after every iteration.
    pub fn with_pauses(mut self, generator_pause: Duration, integrator_pause: Duration) -> Launcher {
        self.generator_pause = generator_pause;
        self.integrator_pause = integrator_pause;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Launcher {
        self.seed = Some(seed);
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn run(&self) -> Result<DemoReport, ThreadsError> {
        let discipline = self.configuration.discipline();
        let count = self.configuration.task_count();
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(?discipline, task_count = count, "starting generator and integrator");

        let (generator, integrator) = match discipline {
            Discipline::Simple => {
                let task = Arc::new(Mutex::new(Task::new(count)));
                let generator = SimpleGenerator::new(Arc::clone(&task), self.token.clone(), rng, self.generator_pause);
                let integrator = SimpleIntegrator::new(task, self.token.clone(), self.integrator_pause);
                self.spawn_pair(("simple generator", move || generator.run()), ("simple integrator", move || integrator.run()))?
            }
            Discipline::Alternating => {
                let (writer, reader) = semaphore_slot();
                let generator = Generator::new(writer, count, self.token.clone(), rng, self.generator_pause);
                let integrator = Integrator::new(reader, count, self.token.clone(), self.integrator_pause);
                self.spawn_pair(("generator", move || generator.run()), ("integrator", move || integrator.run()))?
            }
        };

        self.wait_for(&generator, &integrator);
        let generator = generator.join().map_err(|_| ThreadsError::Panicked("generator"));
        let integrator = integrator.join().map_err(|_| ThreadsError::Panicked("integrator"));
        let report = DemoReport { discipline, generator: generator?, integrator: integrator? };
        info!(
            ?discipline,
            written = report.generator.tasks().len(),
            read = report.integrator.tasks().len(),
            failures = report.integrator.failures(),
            cancelled = report.generator.cancelled() || report.integrator.cancelled(),
            "generator and integrator finished"
        );
        Ok(report)
    }

    fn spawn_pair<G, I>(
        &self,
        (generator_name, generator): (&'static str, G),
        (integrator_name, integrator): (&'static str, I),
    ) -> Result<(JoinHandle<ActorReport>, JoinHandle<ActorReport>), ThreadsError>
    where
        G: FnOnce() -> ActorReport + Send + 'static,
        I: FnOnce() -> ActorReport + Send + 'static,
    {
        let generator = spawn(generator_name, generator)?;
        match spawn(integrator_name, integrator) {
            Ok(integrator) => Ok((generator, integrator)),
            Err(error) => {
                self.token.cancel();
                let _ = generator.join();
                Err(error)
            }
        }
    }

    /// Waits up to the grace period, then cancels both actors.
    fn wait_for(&self, generator: &JoinHandle<ActorReport>, integrator: &JoinHandle<ActorReport>) {
        let Some(grace_period) = self.configuration.grace_period() else {
            return;
        };
        let deadline = Instant::now() + grace_period;
        while !(generator.is_finished() && integrator.is_finished()) {
            let now = Instant::now();
            if now >= deadline {
                warn!(?grace_period, "grace period elapsed, cancelling");
                self.token.cancel();
                return;
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}

fn spawn<F>(actor: &'static str, body: F) -> Result<JoinHandle<ActorReport>, ThreadsError>
where
    F: FnOnce() -> ActorReport + Send + 'static,
{
    thread::Builder::new()
        .name(actor.to_owned())
        .spawn(body)
        .map_err(|source| ThreadsError::Spawn { actor, source })
}
