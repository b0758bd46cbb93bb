use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

mod config;
mod confetti;
mod content;
mod sequencer;
mod pages {
    pub mod cards;
    pub mod envelope;
    pub mod final_letter;
    pub mod hook;
    pub mod letter;
}

use confetti::{Confetti, ConfettiPiece};
use content::{CardId, CARDS};
use pages::{
    cards::{CardView, Cards},
    envelope::Envelope,
    final_letter::FinalLetter,
    hook::Hook,
    letter::Letter,
};
use sequencer::{ConfettiTicket, Page, Sequencer, CONFETTI_DURATION_MS};

pub enum Msg {
    Advance,
    AdvanceFromCards,
    ToggleCard(CardId),
    TriggerConfetti,
    ConfettiExpired(ConfettiTicket),
    Restart,
}

pub struct App {
    sequencer: Sequencer,
    confetti_pieces: Vec<ConfettiPiece>,
    // Dropping the handle cancels the pending clear.
    confetti_timeout: Option<Timeout>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            sequencer: Sequencer::new(),
            confetti_pieces: Vec::new(),
            confetti_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Advance => {
                let before = self.sequencer.page();
                let changed = self.sequencer.advance() != before;
                if changed {
                    scroll_to_top();
                }
                changed
            }
            Msg::AdvanceFromCards => {
                let moved = self.sequencer.advance_from_cards();
                if moved {
                    scroll_to_top();
                }
                moved
            }
            Msg::ToggleCard(id) => {
                self.sequencer.toggle_card(id);
                true
            }
            Msg::TriggerConfetti => {
                let ticket = self.sequencer.trigger_confetti();
                self.confetti_pieces = confetti::browser_burst();
                let link = ctx.link().clone();
                self.confetti_timeout = Some(Timeout::new(CONFETTI_DURATION_MS, move || {
                    link.send_message(Msg::ConfettiExpired(ticket));
                }));
                true
            }
            Msg::ConfettiExpired(ticket) => {
                // The handle is left in place: this runs inside the timer's own callback.
                if self.sequencer.expire_confetti(ticket) {
                    self.confetti_pieces.clear();
                    true
                } else {
                    false
                }
            }
            Msg::Restart => {
                if self.confetti_timeout.take().is_some() {
                    debug!("Dropped confetti timer");
                }
                self.confetti_pieces.clear();
                self.sequencer.reset();
                scroll_to_top();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = self.sequencer.page();
        let advance = ctx.link().callback(|_| Msg::Advance);

        let screen = match page {
            Page::Hook => html! { <Hook on_next={advance} /> },
            Page::Envelope => html! { <Envelope on_next={advance} /> },
            Page::Letter => html! { <Letter on_next={advance} /> },
            Page::Cards => {
                let cards: Vec<CardView> = CARDS
                    .iter()
                    .map(|card| CardView {
                        card,
                        flipped: self.sequencer.is_flipped(card.id),
                        discovered: self.sequencer.is_discovered(card.id),
                    })
                    .collect();
                html! {
                    <Cards
                        {cards}
                        progress={self.sequencer.progress_percent()}
                        status={self.sequencer.status_text()}
                        complete={self.sequencer.is_complete()}
                        on_toggle={ctx.link().callback(Msg::ToggleCard)}
                        on_continue={ctx.link().callback(|_| Msg::AdvanceFromCards)}
                    />
                }
            }
            Page::FinalLetter => html! {
                <FinalLetter
                    on_confetti={ctx.link().callback(|_| Msg::TriggerConfetti)}
                    on_restart={ctx.link().callback(|_| Msg::Restart)}
                />
            },
        };

        html! {
            <div class="card-app">
                <div class="grid-overlay"></div>
                if self.sequencer.confetti_visible() {
                    <Confetti pieces={self.confetti_pieces.clone()} />
                }
                <div class="sticker-corner sticker-corner--tl">{"🌸"}</div>
                <div class="sticker-corner sticker-corner--tr">{"⭐"}</div>
                <div class="sticker-corner sticker-corner--bl">{"💝"}</div>
                <div class="sticker-corner sticker-corner--br">{"🎀"}</div>
                <div class="stage">
                    <div key={page.number() as usize} class="page-enter">
                        { screen }
                    </div>
                </div>
                <style>{GLOBAL_CSS}</style>
            </div>
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

const GLOBAL_CSS: &str = r#"
    * {
        box-sizing: border-box;
        margin: 0;
    }
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .card-app {
        min-height: 100vh;
        position: relative;
        overflow: hidden;
        background: linear-gradient(to bottom right, #fbcfe8, #fce7f3, #ffedd5);
    }
    .grid-overlay {
        position: absolute;
        inset: 0;
        opacity: 0.1;
        background-image: linear-gradient(#000 1px, transparent 1px), linear-gradient(90deg, #000 1px, transparent 1px);
        background-size: 20px 20px;
    }
    .sticker-corner {
        position: absolute;
        opacity: 0.8;
        z-index: 0;
        font-size: 3rem;
    }
    .sticker-corner--tl { top: 1rem; left: 1rem; font-size: 3.75rem; }
    .sticker-corner--tr { top: 2rem; right: 2rem; }
    .sticker-corner--bl { bottom: 2rem; left: 2rem; }
    .sticker-corner--br { bottom: 1rem; right: 1rem; font-size: 3.75rem; }
    .stage {
        position: relative;
        z-index: 10;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
    }
    .page-enter {
        width: 100%;
        display: flex;
        justify-content: center;
        animation: pageIn 0.8s ease-out both;
    }
    .page { width: 100%; }
    .page--narrow { max-width: 28rem; }
    .page--wide { max-width: 42rem; }
    .page--full {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 3rem 0;
    }
    .paper {
        position: relative;
        background: #fefce8;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        padding: 2rem;
    }
    .sticker {
        position: absolute;
        font-size: 3.75rem;
    }
    .sticker--top-right { top: -1.5rem; right: -1.5rem; }
    .sticker--bottom-left { bottom: -1rem; left: -1rem; font-size: 3rem; }
    .centered { text-align: center; margin-bottom: 1.5rem; }
    .badge {
        display: inline-block;
        background: #fce7f3;
        color: #db2777;
        border-radius: 9999px;
        padding: 0.25rem 1rem;
        font-size: 0.875rem;
    }
    .cursive { font-family: cursive; }
    .serif { font-family: Georgia, serif; }
    .round-icon {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #ec4899;
        color: #ffffff;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-right: 0.75rem;
    }
    .round-icon--large { width: 3rem; height: 3rem; }
    .pink-button, .teal-button {
        width: 100%;
        border: none;
        border-radius: 9999px;
        color: #ffffff;
        font-weight: 600;
        padding: 1rem 1.5rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        cursor: pointer;
        transition: transform 0.15s ease, background 0.15s ease;
    }
    .pink-button { background: #ec4899; }
    .pink-button:hover { background: #db2777; }
    .teal-button { background: #2dd4bf; }
    .teal-button:hover { background: #14b8a6; }
    .pink-button:hover, .teal-button:hover { transform: scale(1.05); }
    .pink-button:active, .teal-button:active { transform: scale(0.95); }
    @keyframes pageIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes slideUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideDown {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::LOG_LEVEL).expect("error initializing log");

    info!("Starting birthday card");
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(config::ROOT_ELEMENT_ID));
    match root {
        Some(element) => {
            yew::Renderer::<App>::with_root(element).render();
        }
        None => {
            info!("No #{} element, mounting on body", config::ROOT_ELEMENT_ID);
            yew::Renderer::<App>::new().render();
        }
    }
}
