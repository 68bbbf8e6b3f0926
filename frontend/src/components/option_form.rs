use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::{Feedback, FeedbackKind};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OptionFormProps {
    /// Raw input text; commas mark a batch paste. Sanitation and validation
    /// happen in the registry, not here.
    pub on_add: Callback<String>,
    pub feedback: Option<Feedback>,
    pub count: usize,
    pub max_options: usize,
}

#[function_component(OptionForm)]
pub fn option_form(props: &OptionFormProps) -> Html {
    let input_ref = use_node_ref();

    let on_submit = {
        let input_ref = input_ref.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let value = input.value();
                if !value.trim().is_empty() {
                    on_add.emit(value);
                    input.set_value("");
                }
                let _ = input.focus();
            }
        })
    };

    let at_capacity = props.count >= props.max_options;

    let feedback_html = match &props.feedback {
        Some(feedback) => {
            let class = match feedback.kind {
                FeedbackKind::Success => styles::CARD_SUCCESS,
                FeedbackKind::Warning => styles::CARD_WARNING,
                FeedbackKind::Error => styles::CARD_ERROR,
            };
            html! {
                <p class={classes!(class, "mt-2", "text-sm")} role="status" aria-live="polite">
                    {&feedback.text}
                </p>
            }
        }
        None => html! {},
    };

    html! {
        <form onsubmit={on_submit} class="mt-4">
            <label for="option-input" class={styles::TEXT_LABEL}>
                {"Add names"}
            </label>
            <div class="mt-2 flex gap-2">
                <input
                    id="option-input"
                    ref={input_ref}
                    type="text"
                    class={styles::INPUT}
                    placeholder="One name, or several separated by commas"
                    disabled={at_capacity}
                    aria-describedby="option-count"
                />
                <button
                    type="submit"
                    class={styles::BUTTON_PRIMARY}
                    disabled={at_capacity}
                >
                    {"Add"}
                </button>
            </div>
            <p id="option-count" class={classes!(styles::TEXT_SMALL, "mt-1")}>
                {format!("{} of {} names", props.count, props.max_options)}
            </p>
            {feedback_html}
        </form>
    }
}
