//! Individual actors and their interaction counters.

use std::fmt;

use abm_core::AgentId;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// The sex of the cohort this one directs comments at.
    pub fn opposite(self) -> Sex {
        match self {
            Sex::Female => Sex::Male,
            Sex::Male   => Sex::Female,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male   => "male",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One person in the population.
///
/// Counters only ever grow and `dropped_out` never reverts, so every field
/// is read-only from outside; mutation goes through the methods below.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    id:            AgentId,
    sex:           Sex,
    is_hostile:    bool,
    received:      u32,
    emitted:       u32,
    interventions: u32,
    dropped_out:   bool,
}

impl Actor {
    pub fn new(id: AgentId, sex: Sex, is_hostile: bool) -> Self {
        Self {
            id,
            sex,
            is_hostile,
            received:      0,
            emitted:       0,
            interventions: 0,
            dropped_out:   false,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn is_hostile(&self) -> bool {
        self.is_hostile
    }

    /// Hostile comments received.
    pub fn received(&self) -> u32 {
        self.received
    }

    /// Hostile comments made.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    pub fn interventions(&self) -> u32 {
        self.interventions
    }

    pub fn dropped_out(&self) -> bool {
        self.dropped_out
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.dropped_out
    }

    /// Direct one hostile comment at `target`.
    ///
    /// Nothing happens unless both actors are still active and belong to
    /// opposite cohorts.  Returns whether the comment was made.
    pub fn emit(&mut self, target: &mut Actor, drop_threshold: u32) -> bool {
        if !self.is_active() || !target.is_active() || target.sex != self.sex.opposite() {
            return false;
        }
        self.emitted += 1;
        target.received += 1;
        target.consider_dropout(drop_threshold);
        true
    }

    /// Drop out once `received` has reached `drop_threshold`.
    ///
    /// Returns `true` only on the call that flips the flag.
    pub fn consider_dropout(&mut self, drop_threshold: u32) -> bool {
        if self.received >= drop_threshold && !self.dropped_out {
            self.dropped_out = true;
            return true;
        }
        false
    }

    /// Record one bystander intervention by this actor.
    pub fn intervene(&mut self) {
        self.interventions += 1;
    }
}
