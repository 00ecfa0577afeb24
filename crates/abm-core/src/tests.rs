//! Unit tests for abm-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn step_arithmetic() {
        assert_eq!(Step::ZERO.next(), Step(1));
        assert_eq!(Step(3).next().next(), Step(5));
        assert_eq!(Step(5).to_string(), "S5");
    }
}

#[cfg(test)]
mod rng {
    use crate::rng::parse_seed;
    use crate::{AbmError, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let xs: Vec<f64> = (0..16).map(|_| a.unit()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.unit()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn unit_draws_stay_in_half_open_interval() {
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            let r = rng.unit();
            assert!((0.0..1.0).contains(&r), "got {r}");
        }
    }

    #[test]
    fn pick_index_empty_is_none() {
        let mut rng = SimRng::new(3);
        assert_eq!(rng.pick_index(0), None);
        assert_eq!(rng.pick_index(1), Some(0));
        for _ in 0..100 {
            assert!(rng.pick_index(5).unwrap() < 5);
        }
    }

    #[test]
    fn explicit_seed_wins() {
        assert_eq!(SimRng::resolve_seed(Some(17)).unwrap(), 17);
    }

    #[test]
    fn parse_seed_accepts_padded_integer() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
    }

    #[test]
    fn parse_seed_rejects_garbage() {
        assert!(matches!(parse_seed("-1"), Err(AbmError::InvalidArgument(_))));
        assert!(matches!(parse_seed("seed"), Err(AbmError::InvalidArgument(_))));
    }
}

#[cfg(test)]
mod error {
    use crate::error::check_fraction;

    #[test]
    fn fractions_inside_unit_interval_pass() {
        assert_eq!(check_fraction("p", 0.0).unwrap(), 0.0);
        assert_eq!(check_fraction("p", 1.0).unwrap(), 1.0);
    }

    #[test]
    fn fractions_outside_unit_interval_fail() {
        assert!(check_fraction("p", -0.01).is_err());
        assert!(check_fraction("p", 1.5).is_err());
        assert!(check_fraction("p", f64::NAN).is_err());
    }
}

#[cfg(test)]
mod scheduler {
    use crate::{Model, NoopObserver, RunConfig, RunState, Step, StepObserver, run_model};

    /// Converges once `counter` reaches `target`.
    struct CountTo {
        counter: u64,
        target:  u64,
        steps:   Step,
    }

    impl Model for CountTo {
        type Stats = u64;
        type Error = String;

        fn step(&mut self) -> Result<u64, String> {
            if self.is_converged() {
                return Ok(self.counter);
            }
            self.counter += 1;
            self.steps = self.steps.next();
            Ok(self.counter)
        }

        fn steps_taken(&self) -> Step {
            self.steps
        }

        fn is_converged(&self) -> bool {
            self.counter >= self.target
        }
    }

    struct Recorder {
        starts: Vec<Step>,
        ends:   Vec<(Step, u64)>,
        last:   Option<RunState>,
    }

    impl StepObserver<u64> for Recorder {
        fn on_step_start(&mut self, upcoming: Step) {
            self.starts.push(upcoming);
        }
        fn on_step_end(&mut self, step: Step, stats: &u64) {
            self.ends.push((step, *stats));
        }
        fn on_run_end(&mut self, _final_step: Step, state: RunState) {
            self.last = Some(state);
        }
    }

    #[test]
    fn converges_before_budget() {
        let mut m = CountTo { counter: 0, target: 3, steps: Step::ZERO };
        let state = run_model(&mut m, 10, &mut NoopObserver).unwrap();
        assert_eq!(state, RunState::Converged);
        assert_eq!(m.steps_taken(), Step(3));
    }

    #[test]
    fn exhausts_budget() {
        let mut m = CountTo { counter: 0, target: 100, steps: Step::ZERO };
        let state = run_model(&mut m, 4, &mut NoopObserver).unwrap();
        assert_eq!(state, RunState::Exhausted);
        assert_eq!(m.steps_taken(), Step(4));
    }

    #[test]
    fn zero_budget_takes_no_step() {
        let mut m = CountTo { counter: 0, target: 100, steps: Step::ZERO };
        let state = run_model(&mut m, 0, &mut NoopObserver).unwrap();
        assert_eq!(state, RunState::Exhausted);
        assert_eq!(m.counter, 0);
    }

    #[test]
    fn observer_sees_every_step() {
        let mut m = CountTo { counter: 0, target: 2, steps: Step::ZERO };
        let mut rec = Recorder { starts: vec![], ends: vec![], last: None };
        run_model(&mut m, 10, &mut rec).unwrap();
        assert_eq!(rec.starts, vec![Step(0), Step(1)]);
        assert_eq!(rec.ends, vec![(Step(1), 1), (Step(2), 2)]);
        assert_eq!(rec.last, Some(RunState::Converged));
    }

    #[test]
    fn terminal_states() {
        assert!(!RunState::Seeded.is_terminal());
        assert!(!RunState::Running.is_terminal());
        assert!(RunState::Converged.is_terminal());
        assert!(RunState::Exhausted.is_terminal());
        assert_eq!(RunState::Exhausted.to_string(), "exhausted");
    }

    #[test]
    fn run_config_defaults() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.max_steps, RunConfig::DEFAULT_MAX_STEPS);
        let cfg = RunConfig::resolve(Some(5), 20).unwrap();
        assert_eq!(cfg, RunConfig::new(5, 20));
    }
}
