use yew::prelude::*;

use crate::content::hook;

#[derive(Properties, PartialEq)]
pub struct HookProps {
    pub on_next: Callback<()>,
}

#[function_component(Hook)]
pub fn hook_page(props: &HookProps) -> Html {
    let onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="page page--narrow">
            <div class="paper">
                <div class="sticker sticker--top-right">{"🐱"}</div>
                <div class="centered">
                    <span class="badge">{hook::BADGE}</span>
                </div>
                <h1 class="hook-title cursive">{hook::TITLE}</h1>
                <p class="hook-lead">{hook::LEAD}</p>
                <p class="hook-cta">{hook::CALL_TO_ACTION}</p>
                <button class="pink-button pulse" {onclick}>
                    {hook::BUTTON}
                </button>
                <div class="sticker sticker--bottom-left">{"🐾"}</div>
                <p class="hook-footer cursive">{hook::FOOTER}</p>
            </div>
            <style>
                {r#"
                    .hook-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .hook-lead {
                        text-align: center;
                        color: #374151;
                        margin-bottom: 1rem;
                    }
                    .hook-cta {
                        text-align: center;
                        color: #ec4899;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }
                    .hook-footer {
                        text-align: center;
                        font-size: 0.75rem;
                        color: #6b7280;
                        margin-top: 1.5rem;
                    }
                    .pulse {
                        animation: pulse 1.5s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.05); }
                    }
                "#}
            </style>
        </div>
    }
}
