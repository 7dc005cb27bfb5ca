//! One-shot animation flags.
//!
//! Each activation hands out a ticket. The host schedules a reset carrying
//! that ticket; a reset only clears the flag if no newer activation has
//! happened since, so stale timers never cut a fresh animation short.

use serde::{Deserialize, Serialize};

use crate::meal::Meal;
use crate::summary::total_calories;

/// Identifies one activation of a [`OneShotFlag`].
pub type FlagTicket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OneShotFlag {
    active: bool,
    generation: FlagTicket,
}

impl OneShotFlag {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticket of the activation still waiting for its reset, if any.
    pub fn pending(&self) -> Option<FlagTicket> {
        self.active.then_some(self.generation)
    }

    /// Activate (or re-activate) the flag and return the ticket its reset must carry.
    pub fn trigger(&mut self) -> FlagTicket {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    /// Clear the flag if `ticket` is the latest activation. Returns whether it cleared.
    pub fn expire(&mut self, ticket: FlagTicket) -> bool {
        if self.active && ticket == self.generation {
            self.active = false;
            true
        } else {
            false
        }
    }
}

/// Which animation a reset targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKind {
    Pulse,
    Celebration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationFlags {
    pub pulse: OneShotFlag,
    pub celebration: OneShotFlag,
}

impl AnimationFlags {
    pub fn flag_mut(&mut self, kind: AnimationKind) -> &mut OneShotFlag {
        match kind {
            AnimationKind::Pulse => &mut self.pulse,
            AnimationKind::Celebration => &mut self.celebration,
        }
    }

    pub fn expire(&mut self, kind: AnimationKind, ticket: FlagTicket) -> bool {
        self.flag_mut(kind).expire(ticket)
    }
}

/// Whether the most recently added meal is what pushed the total to the goal.
///
/// Only the last meal's contribution is inspected: the total without it must
/// be under `goal` and the full total at or above it.
pub fn goal_just_crossed(meals: &[Meal], goal: u32) -> bool {
    let Some((_, earlier)) = meals.split_last() else {
        return false;
    };
    let goal = u64::from(goal);
    total_calories(earlier) < goal && total_calories(meals) >= goal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meals(calories: &[u32]) -> Vec<Meal> {
        calories
            .iter()
            .map(|calories| Meal {
                name: "Meal".to_string(),
                calories: *calories,
                time: "08:00".to_string(),
                symbol: "🍽".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_flag_starts_inactive() {
        let flag = OneShotFlag::default();
        assert!(!flag.is_active());
        assert_eq!(flag.pending(), None);
    }

    #[test]
    fn test_trigger_then_expire() {
        let mut flag = OneShotFlag::default();
        let ticket = flag.trigger();
        assert!(flag.is_active());
        assert_eq!(flag.pending(), Some(ticket));

        assert!(flag.expire(ticket));
        assert!(!flag.is_active());
        assert_eq!(flag.pending(), None);
    }

    #[test]
    fn test_stale_ticket_does_not_clear_retrigger() {
        let mut flag = OneShotFlag::default();
        let first = flag.trigger();
        let second = flag.trigger();
        assert_ne!(first, second);

        assert!(!flag.expire(first));
        assert!(flag.is_active());
        assert!(flag.expire(second));
        assert!(!flag.is_active());
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut flag = OneShotFlag::default();
        let ticket = flag.trigger();
        assert!(flag.expire(ticket));
        assert!(!flag.expire(ticket));
    }

    #[test]
    fn test_flags_are_independent() {
        let mut flags = AnimationFlags::default();
        let pulse = flags.pulse.trigger();
        let celebration = flags.celebration.trigger();

        assert!(flags.expire(AnimationKind::Pulse, pulse));
        assert!(!flags.pulse.is_active());
        assert!(flags.celebration.is_active());
        assert!(flags.expire(AnimationKind::Celebration, celebration));
    }

    #[test]
    fn test_goal_just_crossed() {
        assert!(!goal_just_crossed(&[], 2000));
        assert!(!goal_just_crossed(&meals(&[800]), 2000));
        assert!(goal_just_crossed(&meals(&[800, 1300]), 2000));
        assert!(goal_just_crossed(&meals(&[800, 1200]), 2000));
        assert!(!goal_just_crossed(&meals(&[2100, 100]), 2000));
    }

    #[test]
    fn test_single_meal_crossing_uses_zero_baseline() {
        assert!(goal_just_crossed(&meals(&[2500]), 2000));
    }
}
