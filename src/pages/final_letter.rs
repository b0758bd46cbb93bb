use yew::prelude::*;

use crate::content::final_letter;

#[derive(Properties, PartialEq)]
pub struct FinalLetterProps {
    pub on_confetti: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component(FinalLetter)]
pub fn final_letter_page(props: &FinalLetterProps) -> Html {
    let on_confetti = {
        let cb = props.on_confetti.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_restart = {
        let cb = props.on_restart.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="page page--narrow">
            <div class="paper">
                <div class="sticker sticker--top-right">{"😻"}</div>
                <div class="final-heading">
                    <div class="round-icon round-icon--large">{"💌"}</div>
                    <h2>{final_letter::HEADING}</h2>
                </div>
                <div class="final-lines cursive">
                    <p class="final-salutation">{final_letter::SALUTATION}</p>
                    <p class="final-line final-line--italic">{final_letter::LINES[0]}</p>
                    <p class="final-line final-line--blue">{final_letter::LINES[1]}</p>
                    <p class="final-line">{final_letter::LINES[2]}</p>
                    <p class="final-closing">{final_letter::CLOSING}</p>
                </div>
                <div class="final-actions">
                    <button class="pink-button" onclick={on_confetti}>
                        {final_letter::CONFETTI_BUTTON}
                    </button>
                    <button class="teal-button" onclick={on_restart}>
                        {final_letter::RESTART_BUTTON}
                    </button>
                </div>
                <div class="sticker sticker--bottom-left">{"⭐"}</div>
            </div>
            <style>
                {r#"
                    .final-heading {
                        display: flex;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .final-heading h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .final-lines {
                        margin-bottom: 2rem;
                    }
                    .final-lines p {
                        margin-bottom: 1rem;
                    }
                    .final-salutation {
                        font-weight: 600;
                        color: #1f2937;
                    }
                    .final-line {
                        color: #374151;
                    }
                    .final-line--italic {
                        font-style: italic;
                    }
                    .final-line--blue {
                        color: #3b82f6;
                    }
                    .final-closing {
                        color: #db2777;
                        font-weight: 600;
                    }
                    .final-actions {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .final-actions button {
                        flex: 1;
                        padding: 0.75rem 1rem;
                    }
                "#}
            </style>
        </div>
    }
}
