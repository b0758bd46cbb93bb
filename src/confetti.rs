use yew::prelude::*;

use crate::content::CONFETTI_GLYPHS;

pub const PIECE_COUNT: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub top: f64,
    pub left: f64,
    pub rotate: f64,
    pub glyph: &'static str,
}

/// Lays out a burst. `random` must yield values in `[0, 1)`.
pub fn burst(mut random: impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    (0..PIECE_COUNT)
        .map(|_| {
            let top = random() * 100.0;
            let left = random() * 100.0;
            let rotate = random() * 360.0;
            let index = ((random() * CONFETTI_GLYPHS.len() as f64) as usize)
                .min(CONFETTI_GLYPHS.len() - 1);
            ConfettiPiece {
                top,
                left,
                rotate,
                glyph: CONFETTI_GLYPHS[index],
            }
        })
        .collect()
}

pub fn browser_burst() -> Vec<ConfettiPiece> {
    burst(js_sys::Math::random)
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub pieces: Vec<ConfettiPiece>,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    html! {
        <div class="confetti-layer">
            <style>
                {r#"
                    .confetti-layer {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: 50;
                    }
                    .confetti-piece {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        font-size: 1.5rem;
                        animation: confettiBurst 2s ease-out forwards;
                    }
                    @keyframes confettiBurst {
                        from {
                            top: 50%;
                            left: 50%;
                            opacity: 1;
                            transform: rotate(0deg);
                        }
                        to {
                            top: var(--to-top);
                            left: var(--to-left);
                            opacity: 0;
                            transform: rotate(var(--to-rotate));
                        }
                    }
                "#}
            </style>
            { for props.pieces.iter().enumerate().map(|(i, piece)| html! {
                <div
                    key={i}
                    class="confetti-piece"
                    style={format!(
                        "--to-top: {:.2}%; --to-left: {:.2}%; --to-rotate: {:.1}deg;",
                        piece.top, piece.left, piece.rotate
                    )}
                >
                    { piece.glyph }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_has_fifty_pieces_in_range() {
        let mut state = 0.0_f64;
        let pieces = burst(|| {
            state = (state + 0.137) % 1.0;
            state
        });
        assert_eq!(pieces.len(), PIECE_COUNT);
        for piece in &pieces {
            assert!((0.0..100.0).contains(&piece.top));
            assert!((0.0..100.0).contains(&piece.left));
            assert!((0.0..360.0).contains(&piece.rotate));
            assert!(CONFETTI_GLYPHS.contains(&piece.glyph));
        }
    }

    #[test]
    fn glyph_index_is_clamped_near_one() {
        let pieces = burst(|| 0.999_999_999);
        assert!(pieces.iter().all(|p| p.glyph == CONFETTI_GLYPHS[4]));
    }
}
