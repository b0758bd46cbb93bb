use yew::prelude::*;

use crate::content::envelope;

#[derive(Properties, PartialEq)]
pub struct EnvelopeProps {
    pub on_next: Callback<()>,
}

#[function_component(Envelope)]
pub fn envelope_page(props: &EnvelopeProps) -> Html {
    let onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="page page--narrow">
            <div class="envelope" {onclick}>
                <svg width="300" height="200" viewBox="0 0 300 200" class="envelope-svg">
                    <rect x="30" y="60" width="240" height="140" fill="#FFB6C1" rx="5" />
                    <path class="envelope-flap" d="M 30 60 L 150 140 L 270 60" fill="#FF69B4" />
                    <line x1="30" y1="60" x2="150" y2="140" stroke="#FF1493" stroke-width="2" />
                    <line x1="270" y1="60" x2="150" y2="140" stroke="#FF1493" stroke-width="2" />
                    <circle cx="150" cy="60" r="20" fill="#FF1493" />
                    <text x="150" y="68" font-size="20" text-anchor="middle" fill="white">{"💖"}</text>
                </svg>
                <p class="envelope-prompt">{envelope::PROMPT}</p>
            </div>
            <style>
                {r#"
                    .envelope {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .envelope:hover {
                        transform: scale(1.05);
                    }
                    .envelope-svg {
                        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                    }
                    .envelope-flap {
                        transform-origin: 150px 60px;
                        transition: transform 0.3s ease;
                    }
                    .envelope:hover .envelope-flap {
                        transform: rotateX(-30deg);
                    }
                    .envelope-prompt {
                        margin-top: 1.5rem;
                        color: #374151;
                        font-weight: 600;
                        text-align: center;
                        animation: blink 2s ease-in-out infinite;
                    }
                    @keyframes blink {
                        0%, 100% { opacity: 0.5; }
                        50% { opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
