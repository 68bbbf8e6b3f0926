use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WinnerBannerProps {
    pub winner: Option<String>,
    pub is_spinning: bool,
}

#[function_component(WinnerBanner)]
pub fn winner_banner(props: &WinnerBannerProps) -> Html {
    // Keep the previous winner hidden while a new spin is in flight.
    if props.is_spinning {
        return html! {};
    }
    let Some(winner) = &props.winner else {
        return html! {};
    };

    html! {
        <div class="mt-6 flex justify-center" aria-live="assertive">
            <div class="px-6 py-4 rounded-xl bg-gradient-to-r from-yellow-400 to-orange-500 border-2 border-orange-300 text-white font-bold text-xl shadow-lg animate-bounce">
                <span>{format!("\u{1F389} {}", winner)}</span>
            </div>
        </div>
    }
}
