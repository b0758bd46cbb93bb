use yew::prelude::*;

use crate::content::letter;

#[derive(Properties, PartialEq)]
pub struct LetterProps {
    pub on_next: Callback<()>,
}

#[function_component(Letter)]
pub fn letter_page(props: &LetterProps) -> Html {
    let onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="page page--wide">
            <div class="paper letter-scroll">
                <div class="sticker sticker--top-right">{"😺"}</div>
                <div class="centered">
                    <h2 class="letter-heading cursive">{letter::HEADING}</h2>
                    <p class="letter-subtitle">{letter::SUBTITLE}</p>
                </div>
                <div class="letter-body">
                    <div class="letter-greeting">
                        <div class="round-icon">{"💖"}</div>
                        <h3>{letter::GREETING}</h3>
                    </div>
                    <div class="serif">
                        { for letter::PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                        <p class="letter-sign-off">{letter::SIGN_OFF}</p>
                    </div>
                    <div class="letter-seal">{"💝"}</div>
                </div>
                <button class="pink-button" {onclick}>
                    {letter::BUTTON}
                </button>
                <div class="sticker sticker--bottom-left">{"💕"}</div>
            </div>
            <style>
                {r#"
                    .letter-scroll {
                        max-height: 80vh;
                        overflow-y: auto;
                    }
                    .letter-heading {
                        color: #ec4899;
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .letter-subtitle {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-bottom: 1.5rem;
                    }
                    .letter-body {
                        background: #ffffff;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
                        margin-bottom: 1.5rem;
                    }
                    .letter-greeting {
                        display: flex;
                        align-items: center;
                        margin-bottom: 1rem;
                    }
                    .letter-greeting h3 {
                        font-weight: 700;
                        font-size: 1.125rem;
                    }
                    .letter-body p {
                        color: #374151;
                        margin-bottom: 1rem;
                    }
                    .letter-body .letter-sign-off {
                        color: #db2777;
                        font-style: italic;
                    }
                    .letter-seal {
                        margin: 1.5rem auto 0;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        border: 4px solid #f9a8d4;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
