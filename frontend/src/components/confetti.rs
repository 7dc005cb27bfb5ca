use js_sys::Math;
use yew::prelude::*;

/// Randomised look of one confetti piece.
#[derive(Debug, Clone, PartialEq)]
struct ConfettiPiece {
    left_percent: f64,
    delay_secs: f64,
    hue: f64,
}

impl ConfettiPiece {
    fn random() -> Self {
        Self {
            left_percent: Math::random() * 100.0,
            delay_secs: Math::random() * 3.0,
            hue: Math::random() * 360.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; background-color: hsl({:.0}, 80%, 60%);",
            self.left_percent, self.delay_secs, self.hue
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub pieces: u32,
}

/// Goal-reached overlay. Piece positions are drawn once per mount so
/// re-renders during the celebration don't reshuffle them.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let pieces = use_memo(props.pieces, |count| {
        (0..*count).map(|_| ConfettiPiece::random()).collect::<Vec<_>>()
    });

    html! {
        <div class="confetti-container">
            <div class="congrats-message">
                <span>{"Goal reached! 🎉"}</span>
            </div>
            {for pieces.iter().map(|piece| html! {
                <div class="confetti" style={piece.style()}></div>
            })}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_random_piece_in_range() {
        for _ in 0..100 {
            let piece = ConfettiPiece::random();
            assert!((0.0..100.0).contains(&piece.left_percent));
            assert!((0.0..3.0).contains(&piece.delay_secs));
            assert!((0.0..360.0).contains(&piece.hue));
        }
    }

    #[wasm_bindgen_test]
    fn test_style() {
        let piece = ConfettiPiece {
            left_percent: 12.5,
            delay_secs: 1.0,
            hue: 200.0,
        };
        assert_eq!(
            piece.style(),
            "left: 12.50%; animation-delay: 1.00s; background-color: hsl(200, 80%, 60%);"
        );
    }
}
