//! Main module for the chess clock application using Yew.
//! Provides the tone service and lays out the clock grid.

use chess_clock::components::{
    player_button_classes, ConfigPanel, PlayerButton, Side, SideButton,
};
use chess_clock::config::LOG_LEVEL;
use chess_clock::hooks::use_chess_clock;
use chess_clock::{Player, ToneService, WebAudioTone};
use yew::prelude::*;

/// Clock grid: two player buttons, reset, config, and the time panel.
#[function_component(Main)]
fn main_component() -> Html {
    let handle = use_chess_clock();
    let clock = &handle.clock;
    let max_time = clock.max_time();

    html! {
        <div class="grid">
            { Player::ALL.iter().map(|&player| html! {
                <PlayerButton
                    key={player.index()}
                    {player}
                    seconds={clock.time_of(player)}
                    class={player_button_classes(clock, player)}
                    onpress={handle.on_press.clone()}
                />
            }).collect::<Html>() }

            <SideButton
                side={Side::Left}
                onclick={handle.on_reset.reform(move |_| Some(max_time))}
            >
                { "RESET" }<br />{ "GAME" }
            </SideButton>
            <SideButton side={Side::Right} onclick={handle.on_open_config.clone()}>
                { "CONFIG" }
            </SideButton>

            <ConfigPanel
                visible={clock.config_panel_open()}
                selected={max_time}
                onchoose={handle.on_choose_time.clone()}
            />
        </div>
    }
}

/// App wrapper providing the shared tone service.
#[function_component]
pub fn App() -> Html {
    let tone = use_memo((), |_| ToneService::new(WebAudioTone::new()));

    html! {
        <ContextProvider<ToneService> context={(*tone).clone()}>
            <Main />
        </ContextProvider<ToneService>>
    }
}

/// Entry point: installs panic and log hooks, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    log::info!("Chess clock v{} started", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
