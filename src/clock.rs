//! Turn/timer state machine for the two-player clock.
//!
//! Every operation mutates [`ClockState`] synchronously and returns the side
//! effects the caller must carry out (tones, ticker start/stop). The state
//! machine itself never touches the browser, which keeps it testable on the
//! host.

use crate::config::{DEFAULT_MAX_TIME_SECS, LOW_TIME_THRESHOLD_SECS};
use crate::history::History;
use crate::tone::Tone;
use log::{debug, info};
use std::fmt;

/// One of the two seats at the clock. `White` is index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    White,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    pub fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

/// Coarse game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Finished,
}

/// Starting budget chosen before a game. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_time_secs: u32,
}

impl GameConfig {
    /// Absent or zero falls back to the fixed default, never to a previous
    /// choice.
    pub fn from_choice(seconds: Option<u32>) -> Self {
        let max_time_secs = match seconds {
            Some(s) if s > 0 => s,
            _ => DEFAULT_MAX_TIME_SECS,
        };
        Self { max_time_secs }
    }

    pub fn max_time_secs(&self) -> u32 {
        self.max_time_secs
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_time_secs: DEFAULT_MAX_TIME_SECS,
        }
    }
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Tone(Tone),
    /// Cancel any live ticker, then start a fresh one.
    StartTicker,
    StopTicker,
}

pub type Effects = Vec<Effect>;

/// Intents accepted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    Press(Player),
    Tick,
    Reset(Option<u32>),
    OpenConfigPanel,
    ChooseTime(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    history: History,
    config: GameConfig,
    active_player: Player,
    phase: Phase,
    config_panel_open: bool,
}

impl ClockState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            history: History::new(config.max_time_secs),
            config,
            active_player: Player::default(),
            phase: Phase::NotStarted,
            config_panel_open: false,
        }
    }

    /// Dispatches an action to the matching operation.
    pub fn apply(&mut self, action: ClockAction) -> Effects {
        match action {
            ClockAction::Press(player) => self.press(player),
            ClockAction::Tick => self.tick(),
            ClockAction::Reset(seconds) => self.reset(seconds),
            ClockAction::OpenConfigPanel => {
                self.open_config_panel();
                Effects::new()
            }
            ClockAction::ChooseTime(seconds) => self.choose_time(seconds),
        }
    }

    /// `player` ends their turn, or starts the game if none is running.
    pub fn press(&mut self, player: Player) -> Effects {
        match self.phase {
            Phase::Finished => {
                debug!("Ignoring press by {} after the game finished", player);
                Effects::new()
            }
            Phase::NotStarted => {
                self.phase = Phase::Running;
                self.active_player = player;
                info!("Game started, {} clock running", player);
                vec![Effect::Tone(Tone::Press), Effect::StartTicker]
            }
            Phase::Running if player == self.active_player => {
                self.history.push_copy();
                self.active_player = player.other();
                debug!(
                    "Turn {} begins, {} to move with {:?}",
                    self.history.len(),
                    self.active_player,
                    self.current_times()
                );
                vec![Effect::Tone(Tone::Press), Effect::StartTicker]
            }
            Phase::Running => {
                debug!("Ignoring press by waiting player {}", player);
                Effects::new()
            }
        }
    }

    /// One elapsed second for the active player.
    pub fn tick(&mut self) -> Effects {
        if self.phase != Phase::Running {
            debug!("Ignoring stray tick in phase {:?}", self.phase);
            return Effects::new();
        }

        let player = self.active_player;
        let remaining = self.history.current().time_of(player).saturating_sub(1);
        self.history.set_current_time(player, remaining);

        if remaining == 0 {
            self.phase = Phase::Finished;
            info!("{} ran out of time after {} turns", player, self.history.len());
            vec![Effect::Tone(Tone::Expiry), Effect::StopTicker]
        } else if remaining < LOW_TIME_THRESHOLD_SECS {
            vec![Effect::Tone(Tone::Warning)]
        } else {
            Effects::new()
        }
    }

    /// Abandons the current game. `None` or zero means the default budget.
    pub fn reset(&mut self, seconds: Option<u32>) -> Effects {
        let config = GameConfig::from_choice(seconds);
        *self = Self::new(config);
        info!("Clock reset to {}s per player", config.max_time_secs);
        vec![Effect::StopTicker]
    }

    pub fn open_config_panel(&mut self) {
        self.config_panel_open = true;
    }

    pub fn choose_time(&mut self, seconds: u32) -> Effects {
        self.reset(Some(seconds))
    }

    pub fn is_active(&self, player: Player) -> bool {
        self.active_player == player
    }

    pub fn current_times(&self) -> [u32; 2] {
        self.history.current().player_times
    }

    pub fn time_of(&self, player: Player) -> u32 {
        self.history.current().time_of(player)
    }

    /// The player whose time ran out, once the game is over.
    pub fn flagged_player(&self) -> Option<Player> {
        match self.phase {
            Phase::Finished => Player::ALL.into_iter().find(|&p| self.time_of(p) == 0),
            _ => None,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn max_time(&self) -> u32 {
        self.config.max_time_secs
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config_panel_open(&self) -> bool {
        self.config_panel_open
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
