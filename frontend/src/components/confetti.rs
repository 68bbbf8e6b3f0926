use shared::palette::SEGMENT_COLORS;
use yew::prelude::*;

const PIECE_COUNT: usize = 24;

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub active: bool,
}

/// Pure-CSS confetti burst shown after a winner is resolved. The page owns
/// the auto-hide timer so it can cancel it on teardown.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    if !props.active {
        return html! {};
    }

    let pieces = (0..PIECE_COUNT)
        .map(|i| {
            let left = (i * 101) % 100;
            let delay_ms = (i * 83) % 700;
            let duration_ms = 2200 + (i * 137) % 1400;
            let color = SEGMENT_COLORS[i % SEGMENT_COLORS.len()];
            html! {
                <div
                    key={i}
                    class="confetti-piece"
                    style={format!(
                        "left: {}%; background-color: {}; animation-delay: {}ms; animation-duration: {}ms;",
                        left, color, delay_ms, duration_ms
                    )}
                ></div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="pointer-events-none fixed inset-0 overflow-hidden z-50" aria-hidden="true">
            {pieces}
        </div>
    }
}
