use yew::prelude::*;

use crate::config;
use crate::content::{cards, Card, CardId};

#[derive(Clone, PartialEq)]
pub struct CardView {
    pub card: &'static Card,
    pub flipped: bool,
    pub discovered: bool,
}

#[derive(Properties, PartialEq)]
pub struct CardsProps {
    pub cards: Vec<CardView>,
    pub progress: f64,
    pub status: String,
    pub complete: bool,
    pub on_toggle: Callback<CardId>,
    pub on_continue: Callback<()>,
}

#[function_component(Cards)]
pub fn cards_page(props: &CardsProps) -> Html {
    let on_continue = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    html! {
        <div class="page page--full">
            <div class="cards-header">
                <h2 class="cards-title cursive">{cards::TITLE}</h2>
                <p class="cards-hint">{cards::HINT}</p>
            </div>

            <div class="cards-grid">
                { for props.cards.iter().enumerate().map(|(index, view)| {
                    render_card(index, view, &props.on_toggle)
                }) }
            </div>

            <div class="paper cards-progress">
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {:.0}%;", props.progress)}></div>
                </div>
                <p class="cards-status">{props.status.clone()}</p>
                if props.complete {
                    <button class="pink-button continue-button" onclick={on_continue}>
                        {cards::BUTTON}
                    </button>
                }
            </div>
            <style>
                {r#"
                    .cards-header {
                        text-align: center;
                        margin-bottom: 2rem;
                        animation: slideDown 0.6s ease-out both;
                    }
                    .cards-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #db2777;
                        margin-bottom: 0.5rem;
                    }
                    .cards-hint {
                        color: #4b5563;
                    }
                    .cards-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        width: 100%;
                        max-width: 64rem;
                        margin-bottom: 2rem;
                        padding: 0 1rem;
                    }
                    @media (max-width: 768px) {
                        .cards-grid {
                            grid-template-columns: 1fr;
                            gap: 1.5rem;
                        }
                    }
                    .flip-card {
                        perspective: 1000px;
                        animation: slideUp 0.6s ease-out both;
                    }
                    .flip-card-inner {
                        position: relative;
                        width: 100%;
                        padding-bottom: 100%;
                        cursor: pointer;
                        transform-style: preserve-3d;
                        transition: transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .flip-card-inner.flipped {
                        transform: rotateY(180deg);
                    }
                    .flip-card-face {
                        position: absolute;
                        inset: 0;
                        border-radius: 1.5rem;
                        border: 4px solid #FFE4B5;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        backface-visibility: hidden;
                        -webkit-backface-visibility: hidden;
                    }
                    .flip-card-front {
                        background: #FFFEF0;
                    }
                    .flip-card-inner.discovered .flip-card-front {
                        border-color: #f9a8d4;
                    }
                    .flip-card-front img {
                        width: 6rem;
                        height: 6rem;
                        object-fit: contain;
                    }
                    .flip-card-label {
                        color: #f472b6;
                        font-weight: 700;
                        margin-top: 1rem;
                    }
                    .flip-card-back {
                        background: #ffffff;
                        justify-content: space-between;
                        transform: rotateY(180deg);
                    }
                    .flip-card-message {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        text-align: center;
                        color: #374151;
                        line-height: 1.6;
                    }
                    .flip-back-button {
                        margin-top: 1rem;
                        padding: 0.5rem 1.5rem;
                        background: #f472b6;
                        color: #ffffff;
                        border: none;
                        border-radius: 9999px;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .flip-back-button:hover {
                        background: #ec4899;
                    }
                    .cards-progress {
                        width: 100%;
                        max-width: 48rem;
                        animation: fadeIn 0.6s ease-out 0.8s both;
                    }
                    .progress-track {
                        width: 100%;
                        height: 1rem;
                        background: #fbcfe8;
                        border-radius: 9999px;
                        overflow: hidden;
                        margin-bottom: 1rem;
                    }
                    .progress-fill {
                        height: 100%;
                        background: linear-gradient(to right, #f472b6, #db2777);
                        transition: width 0.5s ease-out;
                    }
                    .cards-status {
                        text-align: center;
                        color: #374151;
                        font-weight: 500;
                        margin-bottom: 1rem;
                        animation: slideUp 0.4s ease-out both;
                    }
                    .continue-button {
                        animation: popIn 0.3s ease-out both;
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
        </div>
    }
}

fn render_card(index: usize, view: &CardView, on_toggle: &Callback<CardId>) -> Html {
    let id = view.card.id;
    let on_card = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };
    // The button sits inside the card, so stop the click from toggling twice.
    let on_flip_back = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(id);
        })
    };

    html! {
        <div
            key={id.0 as usize}
            class="flip-card"
            style={format!("animation-delay: {:.2}s;", index as f64 * 0.15)}
        >
            <div
                class={classes!(
                    "flip-card-inner",
                    view.flipped.then(|| "flipped"),
                    view.discovered.then(|| "discovered"),
                )}
                onclick={on_card}
            >
                <div class="flip-card-face flip-card-front">
                    <img src={config::asset_url(view.card.image)} alt={view.card.alt} />
                    <div class="flip-card-label">{cards::FRONT_LABEL}</div>
                </div>
                <div class="flip-card-face flip-card-back">
                    <p class="flip-card-message serif">{view.card.message}</p>
                    <button class="flip-back-button" onclick={on_flip_back}>
                        {cards::FLIP_BACK}
                    </button>
                </div>
            </div>
        </div>
    }
}
