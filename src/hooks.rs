use crate::clock::{ClockAction, ClockState, Effect, Player};
use crate::config::TICK_INTERVAL_MS;
use crate::ticker::{Schedule, Ticker};
use crate::tone::ToneService;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Reducer state behind [`use_chess_clock`].
///
/// Effects produced by each action are queued in an outbox shared by every
/// version of the model, so actions dispatched back to back before the next
/// render never lose their effects.
#[derive(Debug, Clone, Default)]
pub struct ClockModel {
    pub clock: ClockState,
    outbox: Rc<RefCell<Vec<Effect>>>,
    revision: u64,
}

impl ClockModel {
    /// Removes and returns every effect queued since the last call.
    pub fn take_pending(&self) -> Vec<Effect> {
        std::mem::take(&mut *self.outbox.borrow_mut())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl PartialEq for ClockModel {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision && self.clock == other.clock
    }
}

impl Reducible for ClockModel {
    type Action = ClockAction;

    fn reduce(self: Rc<Self>, action: ClockAction) -> Rc<Self> {
        let mut clock = self.clock.clone();
        let effects = clock.apply(action);
        self.outbox.borrow_mut().extend(effects);
        Rc::new(Self {
            clock,
            outbox: self.outbox.clone(),
            revision: self.revision.wrapping_add(1),
        })
    }
}

/// Carries out effects in order: tones go to `tone`, ticker effects to
/// `ticker`, whose ticks are reported through `on_tick`.
pub fn apply_effects<S: Schedule>(
    effects: Vec<Effect>,
    ticker: &mut Ticker<S>,
    tone: Option<&ToneService>,
    on_tick: &Callback<()>,
) {
    for effect in effects {
        match effect {
            Effect::Tone(t) => match tone {
                Some(service) => service.play(t),
                None => warn!("No tone service provided, dropping {:?} tone", t),
            },
            Effect::StartTicker => {
                let on_tick = on_tick.clone();
                ticker.restart(TICK_INTERVAL_MS, move || on_tick.emit(()));
            }
            Effect::StopTicker => ticker.stop(),
        }
    }
}

/// State snapshot plus one callback per user intent.
#[derive(Clone)]
pub struct ChessClockHandle {
    /// Snapshot of the clock for rendering.
    pub clock: ClockState,
    /// A player's control was pressed.
    pub on_press: Callback<Player>,
    /// Start over; `None` or zero means the default budget.
    pub on_reset: Callback<Option<u32>>,
    /// The config button was clicked.
    pub on_open_config: Callback<()>,
    /// A starting time was picked in the config panel.
    pub on_choose_time: Callback<u32>,
}

/// Custom hook running the clock: owns the state, the ticker, and plays tones
/// through the [`ToneService`] found in context.
#[hook]
pub fn use_chess_clock() -> ChessClockHandle {
    let model = use_reducer(ClockModel::default);
    let ticker = use_mut_ref(Ticker::new);
    let tone = use_context::<ToneService>();

    // Apply queued effects after every state change.
    {
        let model_for_effect = model.clone();
        let dispatcher = model.dispatcher();
        let on_tick = Callback::from(move |_| dispatcher.dispatch(ClockAction::Tick));
        use_effect_with(model.revision(), move |_| {
            apply_effects(
                model_for_effect.take_pending(),
                &mut *ticker.borrow_mut(),
                tone.as_ref(),
                &on_tick,
            );
            || ()
        });
    }

    let on_press = {
        let dispatcher = model.dispatcher();
        Callback::from(move |player: Player| dispatcher.dispatch(ClockAction::Press(player)))
    };
    let on_reset = {
        let dispatcher = model.dispatcher();
        Callback::from(move |seconds: Option<u32>| dispatcher.dispatch(ClockAction::Reset(seconds)))
    };
    let on_open_config = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ClockAction::OpenConfigPanel))
    };
    let on_choose_time = {
        let dispatcher = model.dispatcher();
        Callback::from(move |seconds: u32| dispatcher.dispatch(ClockAction::ChooseTime(seconds)))
    };

    ChessClockHandle {
        clock: model.clock.clone(),
        on_press,
        on_reset,
        on_open_config,
        on_choose_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::fake::CountingSchedule;
    use crate::tone::{Tone, ToneSink};
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingSink {
        played: RefCell<Vec<Tone>>,
    }

    impl ToneSink for Rc<RecordingSink> {
        fn play(&self, tone: Tone) {
            self.played.borrow_mut().push(tone);
        }
    }

    struct Harness {
        model: Rc<ClockModel>,
        schedule: CountingSchedule,
        ticker: Ticker<CountingSchedule>,
        sink: Rc<RecordingSink>,
        tone: ToneService,
        ticks: Rc<Cell<usize>>,
    }

    impl Harness {
        fn new() -> Self {
            let schedule = CountingSchedule::default();
            let sink = Rc::new(RecordingSink::default());
            Self {
                model: Rc::new(ClockModel::default()),
                ticker: Ticker::with_schedule(schedule.clone()),
                schedule,
                tone: ToneService::new(sink.clone()),
                sink,
                ticks: Rc::new(Cell::new(0)),
            }
        }

        fn dispatch(&mut self, action: ClockAction) {
            self.model = self.model.clone().reduce(action);
            let ticks = self.ticks.clone();
            let on_tick = Callback::from(move |_| ticks.set(ticks.get() + 1));
            apply_effects(
                self.model.take_pending(),
                &mut self.ticker,
                Some(&self.tone),
                &on_tick,
            );
        }
    }

    fn reduce_all(actions: &[ClockAction]) -> Rc<ClockModel> {
        actions
            .iter()
            .fold(Rc::new(ClockModel::default()), |model, &action| {
                model.reduce(action)
            })
    }

    #[test]
    fn back_to_back_actions_keep_all_effects() {
        let model = reduce_all(&[
            ClockAction::Press(Player::White),
            ClockAction::Press(Player::White),
        ]);

        assert_eq!(
            model.take_pending(),
            vec![
                Effect::Tone(Tone::Press),
                Effect::StartTicker,
                Effect::Tone(Tone::Press),
                Effect::StartTicker,
            ]
        );
        assert!(model.take_pending().is_empty());
    }

    #[test]
    fn every_action_bumps_revision() {
        let model = reduce_all(&[ClockAction::Tick, ClockAction::OpenConfigPanel]);
        assert_eq!(model.revision(), 2);
        assert!(model.clock.config_panel_open());
    }

    #[test]
    fn reducer_leaves_previous_snapshot_untouched() {
        let started = reduce_all(&[ClockAction::Press(Player::Black)]);
        let ticked = started.clone().reduce(ClockAction::Tick);

        assert_eq!(started.clock.current_times(), [90, 90]);
        assert_eq!(ticked.clock.current_times(), [90, 89]);
        assert_ne!(*started, *ticked);
    }

    #[test]
    fn reset_queues_ticker_stop() {
        let model = reduce_all(&[ClockAction::Press(Player::White)]);
        model.take_pending();

        let model = model.reduce(ClockAction::Reset(Some(105)));
        assert_eq!(model.take_pending(), vec![Effect::StopTicker]);
        assert_eq!(model.clock.current_times(), [105, 105]);
    }

    #[test]
    fn repeated_switches_keep_a_single_ticker() {
        let mut harness = Harness::new();
        harness.dispatch(ClockAction::Press(Player::White));
        harness.dispatch(ClockAction::Press(Player::White));
        harness.dispatch(ClockAction::Press(Player::Black));

        assert_eq!(harness.schedule.started.get(), 3);
        assert_eq!(harness.schedule.live.get(), 1);
        assert!(harness.ticker.is_running());
    }

    #[test]
    fn final_tick_stops_the_ticker() {
        let mut harness = Harness::new();
        harness.dispatch(ClockAction::ChooseTime(3));
        harness.dispatch(ClockAction::Press(Player::Black));
        for _ in 0..3 {
            harness.dispatch(ClockAction::Tick);
        }

        assert_eq!(harness.model.clock.phase(), crate::clock::Phase::Finished);
        assert_eq!(harness.schedule.live.get(), 0);
        assert!(!harness.ticker.is_running());
        assert_eq!(
            *harness.sink.played.borrow(),
            vec![Tone::Press, Tone::Warning, Tone::Warning, Tone::Expiry]
        );
    }

    #[test]
    fn reset_while_running_leaves_no_ticker() {
        let mut harness = Harness::new();
        harness.dispatch(ClockAction::Press(Player::White));
        harness.dispatch(ClockAction::Reset(None));

        assert_eq!(harness.schedule.live.get(), 0);
        assert_eq!(harness.ticks.get(), 0);
    }

    #[test]
    fn missing_tone_service_still_drives_ticker() {
        let schedule = CountingSchedule::default();
        let mut ticker = Ticker::with_schedule(schedule.clone());

        apply_effects(
            vec![Effect::Tone(Tone::Press), Effect::StartTicker],
            &mut ticker,
            None,
            &Callback::noop(),
        );
        assert_eq!(schedule.live.get(), 1);
    }
}
