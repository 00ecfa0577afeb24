//! The `PopulationModel` and its configuration.

use std::convert::Infallible;

use abm_core::error::check_fraction;
use abm_core::{AbmError, AbmResult, AgentId, Model, RunState, SimRng, Step, StepObserver, run_model};
use tracing::{debug, info};

use crate::{Actor, CohortStats, InterventionPolicy, NoIntervention, PetrieStats, Sex};

/// Comments an actor can take before dropping out, unless configured.
pub const DEFAULT_DROP_THRESHOLD: u32 = 3;

/// Parameters for seeding a [`PopulationModel`].
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationConfig {
    pub num_people:       usize,
    /// Probability that a person joins the `women` cohort.
    pub fraction_female:  f64,
    /// Probability that a person makes hostile comments.
    pub fraction_hostile: f64,
    /// Received comments at which an actor drops out.  Must be at least 1.
    pub drop_threshold:   u32,
    pub seed:             u64,
}

impl PopulationConfig {
    pub fn new(num_people: usize, fraction_female: f64, fraction_hostile: f64) -> Self {
        Self {
            num_people,
            fraction_female,
            fraction_hostile,
            drop_threshold: DEFAULT_DROP_THRESHOLD,
            seed: 0,
        }
    }

    pub fn drop_threshold(mut self, threshold: u32) -> Self {
        self.drop_threshold = threshold;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> AbmResult<()> {
        check_fraction("fraction_female", self.fraction_female)?;
        check_fraction("fraction_hostile", self.fraction_hostile)?;
        if self.drop_threshold == 0 {
            return Err(AbmError::InvalidArgument("drop_threshold must be at least 1".into()));
        }
        Ok(())
    }
}

/// Two cohorts of actors exchanging hostile comments.
///
/// Every actor sits in exactly one cohort for its whole life: `women` holds
/// only [`Sex::Female`] actors and `men` only [`Sex::Male`] ones.
pub struct PopulationModel<P: InterventionPolicy = NoIntervention> {
    config:     PopulationConfig,
    men:        Vec<Actor>,
    women:      Vec<Actor>,
    exchanges:  u64,
    step_count: Step,
    state:      RunState,
    rng:        SimRng,
    policy:     P,
}

impl PopulationModel<NoIntervention> {
    /// Validate `config` and seed both cohorts.
    pub fn new(config: PopulationConfig) -> AbmResult<Self> {
        Self::with_policy(config, NoIntervention)
    }
}

impl<P: InterventionPolicy> PopulationModel<P> {
    /// Like [`PopulationModel::new`] with a custom intervention policy.
    ///
    /// Each person draws `r1` (cohort: women when `r1 < fraction_female`) and
    /// then `r2` (hostile when `r2 < fraction_hostile`).
    pub fn with_policy(config: PopulationConfig, policy: P) -> AbmResult<Self> {
        config.validate()?;
        let mut rng = SimRng::new(config.seed);
        let mut men = Vec::new();
        let mut women = Vec::new();

        for i in 0..config.num_people {
            let id = AgentId::try_from(i)
                .map_err(|_| AbmError::InvalidArgument(format!("num_people {} is too large", config.num_people)))?;
            let r1 = rng.unit();
            let r2 = rng.unit();
            let hostile = r2 < config.fraction_hostile;
            if r1 < config.fraction_female {
                women.push(Actor::new(id, Sex::Female, hostile));
            } else {
                men.push(Actor::new(id, Sex::Male, hostile));
            }
        }

        debug!(men = men.len(), women = women.len(), seed = config.seed, "seeded population");

        Ok(Self {
            config,
            men,
            women,
            exchanges: 0,
            step_count: Step::ZERO,
            state: RunState::Seeded,
            rng,
            policy,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    pub fn men(&self) -> &[Actor] {
        &self.men
    }

    pub fn women(&self) -> &[Actor] {
        &self.women
    }

    /// Total hostile comments made since seeding.
    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }

    pub fn step_count(&self) -> Step {
        self.step_count
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// One round of exchanges: every active hostile man in insertion order,
    /// then every active hostile woman, each picking one active target of the
    /// other cohort uniformly at random.  The intervention policy is consulted
    /// afterwards for every active actor.
    ///
    /// A model in a terminal state is left untouched.
    pub fn step(&mut self) -> PetrieStats {
        if self.state.is_terminal() {
            return self.report(0);
        }
        let threshold = self.config.drop_threshold;

        let mut made = exchange(&mut self.men, &mut self.women, &mut self.rng, threshold);
        made += exchange(&mut self.women, &mut self.men, &mut self.rng, threshold);
        self.exchanges += made;

        for actor in self.men.iter_mut().chain(self.women.iter_mut()) {
            if actor.is_active() && self.policy.should_intervene(actor, &mut self.rng) {
                actor.intervene();
            }
        }

        self.step_count = self.step_count.next();
        self.state = if self.is_quiescent() { RunState::Converged } else { RunState::Running };
        if self.state == RunState::Converged {
            info!(step = self.step_count.0, total = self.exchanges, "no further exchange possible");
        }
        self.report(made)
    }

    /// Step until no exchange is possible or `max_steps` steps are done.
    pub fn run<O>(&mut self, max_steps: u64, observer: &mut O) -> RunState
    where
        O: StepObserver<PetrieStats>,
    {
        if self.state.is_terminal() {
            return self.state;
        }
        let Ok(outcome) = run_model(self, max_steps, observer);
        self.state = outcome;
        outcome
    }

    // ── Observation ───────────────────────────────────────────────────────

    /// Current statistics; `exchanges` counts nothing for this call.
    pub fn stats(&self) -> PetrieStats {
        self.report(0)
    }

    /// `true` when no active hostile actor has an active target left.
    pub fn is_quiescent(&self) -> bool {
        let can_emit = |from: &[Actor], to: &[Actor]| {
            from.iter().any(|a| a.is_active() && a.is_hostile()) && to.iter().any(Actor::is_active)
        };
        !can_emit(&self.men, &self.women) && !can_emit(&self.women, &self.men)
    }

    fn report(&self, made: u64) -> PetrieStats {
        PetrieStats {
            step:            self.step_count,
            exchanges:       made,
            total_exchanges: self.exchanges,
            men:             CohortStats::of(&self.men),
            women:           CohortStats::of(&self.women),
        }
    }
}

impl<P: InterventionPolicy> Model for PopulationModel<P> {
    type Stats = PetrieStats;
    type Error = Infallible;

    fn step(&mut self) -> Result<PetrieStats, Infallible> {
        Ok(PopulationModel::step(self))
    }

    fn steps_taken(&self) -> Step {
        self.step_count
    }

    fn is_converged(&self) -> bool {
        self.state == RunState::Converged
    }
}

/// Let every active hostile actor in `emitters` comment on one random active
/// actor in `targets`.  Returns the number of comments made.
fn exchange(emitters: &mut [Actor], targets: &mut [Actor], rng: &mut SimRng, threshold: u32) -> u64 {
    let mut active: Vec<usize> = targets
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_active())
        .map(|(i, _)| i)
        .collect();
    let mut made = 0;

    for emitter in emitters.iter_mut() {
        if !emitter.is_hostile() || !emitter.is_active() {
            continue;
        }
        let Some(pick) = rng.pick_index(active.len()) else {
            break;
        };
        let target = &mut targets[active[pick]];
        if emitter.emit(target, threshold) {
            made += 1;
            if !target.is_active() {
                debug!(actor = %target.id(), sex = %target.sex(), "dropped out");
                active.remove(pick);
            }
        }
    }
    made
}
