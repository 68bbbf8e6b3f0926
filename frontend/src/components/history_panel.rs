use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    /// Most recent winner first.
    pub items: Vec<String>,
    pub on_clear: Callback<()>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    html! {
        <div class="mt-6">
            <div class="flex items-center justify-between">
                <h3 class={styles::TEXT_H3}>{"Past winners"}</h3>
                if !props.items.is_empty() {
                    <button onclick={on_clear} class={classes!(styles::BUTTON_SECONDARY, "text-sm")}>
                        {"Clear"}
                    </button>
                }
            </div>
            if props.items.is_empty() {
                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>
                    {"Winners will show up here after each spin."}
                </p>
            } else {
                <ol class="mt-2 space-y-1" aria-label="Past winners, most recent first">
                    {
                        props.items.iter().enumerate().map(|(index, label)| html! {
                            <li key={format!("{}-{}", index, label)} class={styles::LIST_ROW}>
                                <span class="truncate text-gray-900 dark:text-white">{label}</span>
                                if index == 0 {
                                    <span class={styles::TEXT_SMALL}>{"latest"}</span>
                                }
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            }
        </div>
    }
}
