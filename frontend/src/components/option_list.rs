use shared::palette::color_for_index;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OptionListProps {
    pub labels: Vec<String>,
    pub on_delete: Callback<usize>,
    pub on_reset: Callback<()>,
    /// Deleting mid-spin shifts the winner, so the page disables the row
    /// buttons while the wheel is moving.
    pub is_spinning: bool,
}

#[function_component(OptionList)]
pub fn option_list(props: &OptionListProps) -> Html {
    if props.labels.is_empty() {
        return html! {
            <p class={classes!(styles::TEXT_SMALL, "mt-4")}>
                {"No names yet. Add some above to build the wheel."}
            </p>
        };
    }

    let rows = props
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let on_delete = {
                let on_delete = props.on_delete.clone();
                Callback::from(move |_| on_delete.emit(index))
            };
            html! {
                <li key={format!("{}-{}", index, label)} class={styles::LIST_ROW}>
                    <span class="flex items-center gap-3 min-w-0">
                        <span
                            class="w-3 h-3 rounded-full flex-shrink-0"
                            style={format!("background-color: {};", color_for_index(index))}
                        ></span>
                        <span class="truncate text-gray-900 dark:text-white">{label}</span>
                    </span>
                    <button
                        onclick={on_delete}
                        disabled={props.is_spinning}
                        class={styles::BUTTON_DANGER}
                        aria-label={format!("Remove {}", label)}
                    >
                        {"Remove"}
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };

    html! {
        <div class="mt-4">
            <ul class="divide-y divide-gray-100 dark:divide-gray-700">
                {rows}
            </ul>
            <button
                onclick={on_reset}
                disabled={props.is_spinning}
                class={classes!(styles::BUTTON_SECONDARY, "mt-3", "text-sm")}
            >
                {"Clear all names"}
            </button>
        </div>
    }
}
