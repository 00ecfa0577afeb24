//! Bystander-intervention hook.
//!
//! The model asks the policy once per active actor at the end of each step.
//! No trigger rule is defined for the classroom model, so the default policy
//! never fires; applications plug their own rule in through
//! [`PopulationModel::with_policy`][crate::PopulationModel::with_policy].

use abm_core::SimRng;

use crate::Actor;

/// Decides whether an actor intervenes this step.
pub trait InterventionPolicy {
    fn should_intervene(&self, actor: &Actor, rng: &mut SimRng) -> bool;
}

/// The default policy: nobody ever intervenes.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoIntervention;

impl InterventionPolicy for NoIntervention {
    fn should_intervene(&self, _actor: &Actor, _rng: &mut SimRng) -> bool {
        false
    }
}
