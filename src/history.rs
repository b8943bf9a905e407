//! Append-only turn history with copy-on-write storage.
//!
//! Every clone of a [`History`] shares the same turn buffer until one of them
//! is modified, at which point `Rc::make_mut` gives the writer its own copy.
//! Snapshots held by earlier renders therefore never observe later ticks.

use crate::Player;
use std::rc::Rc;

/// Remaining whole seconds for both players during one possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub player_times: [u32; 2],
}

impl Turn {
    /// Both players start with the same budget.
    pub fn fresh(seconds: u32) -> Self {
        Self {
            player_times: [seconds, seconds],
        }
    }

    pub fn time_of(&self, player: Player) -> u32 {
        self.player_times[player.index()]
    }

    /// Returns a new turn with `player`'s time replaced.
    fn with_time(self, player: Player, seconds: u32) -> Self {
        let mut player_times = self.player_times;
        player_times[player.index()] = seconds;
        Self { player_times }
    }
}

/// Chronological, never-empty sequence of turns. The last entry is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    turns: Rc<Vec<Turn>>,
}

impl History {
    pub fn new(max_time: u32) -> Self {
        Self {
            turns: Rc::new(vec![Turn::fresh(max_time)]),
        }
    }

    pub fn current(&self) -> Turn {
        // Constructors and `push_copy` are the only ways to build a History,
        // so the buffer always holds at least one turn.
        self.turns[self.turns.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Starts a new possession carrying both times forward unchanged.
    pub(crate) fn push_copy(&mut self) {
        let current = self.current();
        Rc::make_mut(&mut self.turns).push(current);
    }

    /// Replaces the current turn with one where `player` has `seconds` left.
    pub(crate) fn set_current_time(&mut self, player: Player, seconds: u32) {
        let updated = self.current().with_time(player, seconds);
        let turns = Rc::make_mut(&mut self.turns);
        let last = turns.len() - 1;
        turns[last] = updated;
    }
}
