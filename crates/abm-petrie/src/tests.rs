//! Unit and scenario tests for abm-petrie.

use abm_core::{AgentId, NoopObserver, RunState, SimRng, Step};

use crate::{Actor, InterventionPolicy, PopulationConfig, PopulationModel, Sex};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn all_actors<P: InterventionPolicy>(m: &PopulationModel<P>) -> Vec<Actor> {
    m.men().iter().chain(m.women()).cloned().collect()
}

fn mixed(seed: u64) -> PopulationModel {
    PopulationModel::new(
        PopulationConfig::new(40, 0.5, 0.4).drop_threshold(2).seed(seed),
    )
    .unwrap()
}

// ── Actor ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod actor_tests {
    use super::*;

    #[test]
    fn emit_updates_both_counters() {
        let mut m = Actor::new(AgentId(0), Sex::Male, true);
        let mut w = Actor::new(AgentId(1), Sex::Female, false);
        assert!(m.emit(&mut w, 3));
        assert_eq!(m.emitted(), 1);
        assert_eq!(w.received(), 1);
        assert!(!w.dropped_out());
    }

    #[test]
    fn dropout_at_threshold_is_permanent() {
        let mut m = Actor::new(AgentId(0), Sex::Male, true);
        let mut w = Actor::new(AgentId(1), Sex::Female, false);
        assert!(m.emit(&mut w, 2));
        assert!(m.emit(&mut w, 2));
        assert!(w.dropped_out());
        assert!(!w.consider_dropout(2), "flag flips only once");
        assert!(w.dropped_out());
    }

    #[test]
    fn dropped_out_actor_neither_receives_nor_emits() {
        let mut m = Actor::new(AgentId(0), Sex::Male, true);
        let mut w = Actor::new(AgentId(1), Sex::Female, true);
        m.emit(&mut w, 1);
        assert!(w.dropped_out());

        assert!(!m.emit(&mut w, 1));
        assert_eq!(w.received(), 1);
        assert!(!w.emit(&mut m, 1));
        assert_eq!(w.emitted(), 0);
        assert_eq!(m.received(), 0);
    }

    #[test]
    fn emit_requires_opposite_cohort() {
        let mut a = Actor::new(AgentId(0), Sex::Female, true);
        let mut b = Actor::new(AgentId(1), Sex::Female, false);
        assert!(!a.emit(&mut b, 3));
        assert_eq!(a.emitted(), 0);
        assert_eq!(b.received(), 0);
    }

    #[test]
    fn intervene_counts() {
        let mut a = Actor::new(AgentId(0), Sex::Female, false);
        a.intervene();
        a.intervene();
        assert_eq!(a.interventions(), 2);
        assert_eq!(Sex::Female.opposite(), Sex::Male);
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;
    use abm_core::AbmError;

    #[test]
    fn cohorts_partition_population() {
        let m = mixed(9);
        assert_eq!(m.men().len() + m.women().len(), 40);
        assert!(m.men().iter().all(|a| a.sex() == Sex::Male));
        assert!(m.women().iter().all(|a| a.sex() == Sex::Female));

        let mut ids: Vec<AgentId> = all_actors(&m).iter().map(Actor::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn counters_start_at_zero() {
        let m = mixed(9);
        for a in all_actors(&m) {
            assert_eq!((a.received(), a.emitted(), a.interventions()), (0, 0, 0));
            assert!(!a.dropped_out());
        }
        assert_eq!(m.state(), RunState::Seeded);
    }

    #[test]
    fn extreme_fractions() {
        let m = PopulationModel::new(PopulationConfig::new(10, 1.0, 0.0)).unwrap();
        assert_eq!(m.women().len(), 10);
        assert!(m.men().is_empty());
        assert!(m.women().iter().all(|a| !a.is_hostile()));

        let m = PopulationModel::new(PopulationConfig::new(10, 0.0, 1.0)).unwrap();
        assert_eq!(m.men().len(), 10);
        assert!(m.men().iter().all(Actor::is_hostile));
    }

    #[test]
    fn invalid_config_rejected() {
        let bad = [
            PopulationConfig::new(10, 1.1, 0.5),
            PopulationConfig::new(10, 0.5, -0.5),
            PopulationConfig::new(10, 0.5, 0.5).drop_threshold(0),
        ];
        for cfg in bad {
            assert!(matches!(PopulationModel::new(cfg), Err(AbmError::InvalidArgument(_))));
        }
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn single_cohort_never_exchanges() {
        let mut m = PopulationModel::new(
            PopulationConfig::new(10, 1.0, 1.0).drop_threshold(2),
        )
        .unwrap();
        let state = m.run(25, &mut NoopObserver);
        assert_eq!(state, RunState::Converged);
        assert_eq!(m.exchanges(), 0);
        for a in m.women() {
            assert_eq!(a.received() + a.emitted(), 0);
            assert!(!a.dropped_out());
        }
    }

    #[test]
    fn counters_match_recorded_exchanges() {
        let mut m = mixed(42);
        m.run(30, &mut NoopObserver);
        let actors = all_actors(&m);
        let emitted: u64 = actors.iter().map(|a| a.emitted() as u64).sum();
        let received: u64 = actors.iter().map(|a| a.received() as u64).sum();
        assert_eq!(emitted, m.exchanges());
        assert_eq!(received, m.exchanges());
        assert!(actors.iter().filter(|a| !a.is_hostile()).all(|a| a.emitted() == 0));
    }

    #[test]
    fn counters_are_monotone() {
        let mut m = mixed(3);
        let mut prev = all_actors(&m);
        for _ in 0..15 {
            m.step();
            let now = all_actors(&m);
            for (a, b) in prev.iter().zip(&now) {
                assert_eq!(a.id(), b.id());
                assert!(b.received() >= a.received());
                assert!(b.emitted() >= a.emitted());
                assert!(!a.dropped_out() || b.dropped_out());
            }
            prev = now;
        }
    }

    #[test]
    fn dropout_follows_threshold() {
        let mut m = mixed(5);
        m.run(50, &mut NoopObserver);
        for a in all_actors(&m) {
            assert_eq!(a.dropped_out(), a.received() >= 2, "{:?}", a);
            assert!(a.received() <= 2, "dropped actors receive nothing more");
        }
    }

    #[test]
    fn emission_stops_once_target_drops_out() {
        let mut man = Actor::new(AgentId(0), Sex::Male, true);
        let mut woman = Actor::new(AgentId(1), Sex::Female, false);
        for _ in 0..5 {
            man.emit(&mut woman, 3);
        }
        assert_eq!(man.emitted(), 3);
        assert_eq!(woman.received(), 3);
    }

    #[test]
    fn runs_are_deterministic() {
        let mut a = mixed(77);
        let mut b = mixed(77);
        let sa = a.run(20, &mut NoopObserver);
        let sb = b.run(20, &mut NoopObserver);
        assert_eq!(sa, sb);
        assert_eq!(a.stats(), b.stats());
        assert_eq!(all_actors(&a), all_actors(&b));
    }

    #[test]
    fn converged_model_is_frozen() {
        let mut m = mixed(42);
        let state = m.run(500, &mut NoopObserver);
        assert_eq!(state, RunState::Converged, "threshold 2 exhausts every target");
        assert!(m.is_quiescent());
        let before = all_actors(&m);
        let steps = m.step_count();
        let stats = m.step();
        assert_eq!(stats.exchanges, 0);
        assert_eq!(m.step_count(), steps);
        assert_eq!(all_actors(&m), before);
    }

    #[test]
    fn stats_fractions_are_consistent() {
        let mut m = mixed(8);
        let stats = m.step();
        assert_eq!(stats.step, Step(1));
        assert_eq!(stats.men.size, m.men().len());
        assert_eq!(stats.women.size, m.women().len());
        for c in [stats.men, stats.women] {
            for f in [c.emitting, c.received, c.dropped_out] {
                assert!((0.0..=1.0).contains(&f));
            }
        }
        assert_eq!(stats.total_exchanges, m.exchanges());
    }
}

// ── Intervention hook ─────────────────────────────────────────────────────────

#[cfg(test)]
mod intervention_tests {
    use super::*;

    /// Every non-hostile actor who has received a comment intervenes.
    struct VictimsSpeakUp;

    impl InterventionPolicy for VictimsSpeakUp {
        fn should_intervene(&self, actor: &Actor, _rng: &mut SimRng) -> bool {
            !actor.is_hostile() && actor.received() > 0
        }
    }

    #[test]
    fn default_policy_never_fires() {
        let mut m = mixed(1);
        m.run(20, &mut NoopObserver);
        assert!(all_actors(&m).iter().all(|a| a.interventions() == 0));
    }

    #[test]
    fn custom_policy_is_consulted() {
        let cfg = PopulationConfig::new(40, 0.5, 0.4).drop_threshold(100).seed(4);
        let mut m = PopulationModel::with_policy(cfg, VictimsSpeakUp).unwrap();
        m.step();
        let actors = all_actors(&m);
        for a in &actors {
            let expected = u32::from(!a.is_hostile() && a.received() > 0);
            assert_eq!(a.interventions(), expected, "{:?}", a);
        }
    }
}
