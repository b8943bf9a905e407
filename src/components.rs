//! Pure Yew view components for the chess clock.
//!
//! Every component renders from props only and reports clicks through
//! callbacks; the clock state lives in the `use_chess_clock` hook.

use crate::clock::{ClockState, Phase, Player};
use crate::config::TIME_CHOICES_SECS;
use yew::prelude::*;

/// CSS modifiers for a player's button, derived from the clock state.
pub fn player_button_classes(clock: &ClockState, player: Player) -> Classes {
    let phase = clock.phase();
    let running = phase == Phase::Running;
    let my_turn = clock.is_active(player);

    let mut classes = classes!(
        "button",
        match player {
            Player::White => "button--white",
            Player::Black => "button--black",
        }
    );
    if phase != Phase::NotStarted {
        classes.push("button--started");
    }
    if phase == Phase::Finished {
        classes.push("button--finished");
    }
    if running && my_turn {
        classes.push("button--active");
    }
    if running && !my_turn {
        classes.push("button--waiting");
    }
    if clock.flagged_player() == Some(player) {
        classes.push("button--flagged");
    }
    classes
}

#[derive(Properties, PartialEq)]
pub struct PlayerButtonProps {
    pub player: Player,
    pub seconds: u32,
    pub class: Classes,
    pub onpress: Callback<Player>,
}

/// Big half-screen button showing a player's remaining seconds.
#[function_component(PlayerButton)]
pub fn player_button(props: &PlayerButtonProps) -> Html {
    let onclick = {
        let player = props.player;
        props.onpress.reform(move |_: MouseEvent| player)
    };

    html! {
        <button class={props.class.clone()} {onclick}>
            <span class="button__time">{ props.seconds }</span>
        </button>
    }
}

/// Which edge of the grid a side button sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn class(self) -> &'static str {
        match self {
            Side::Left => "button--left",
            Side::Right => "button--right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SideButtonProps {
    pub side: Side,
    pub onclick: Callback<()>,
    pub children: Html,
}

/// Narrow button with vertical text at the edge of the grid.
#[function_component(SideButton)]
pub fn side_button(props: &SideButtonProps) -> Html {
    html! {
        <button
            class={classes!("button--reset", props.side.class())}
            onclick={props.onclick.reform(|_: MouseEvent| ())}
        >
            <span class="vertical">{ props.children.clone() }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigPanelProps {
    pub visible: bool,
    pub selected: u32,
    pub onchoose: Callback<u32>,
}

/// Panel listing the selectable starting times.
#[function_component(ConfigPanel)]
pub fn config_panel(props: &ConfigPanelProps) -> Html {
    html! {
        <div class={classes!("config", (!props.visible).then_some("hide"))}>
            { TIME_CHOICES_SECS.iter().map(|&seconds| {
                render_time_choice(seconds, seconds == props.selected, &props.onchoose)
            }).collect::<Html>() }
        </div>
    }
}

/// Renders a single time choice button
fn render_time_choice(seconds: u32, selected: bool, onchoose: &Callback<u32>) -> Html {
    html! {
        <button
            key={seconds}
            class={classes!("button--time", selected.then_some("selected"))}
            onclick={onchoose.reform(move |_: MouseEvent| seconds)}
        >
            { seconds }
        </button>
    }
}
