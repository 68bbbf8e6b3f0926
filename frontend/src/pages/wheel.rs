use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::spin::{SpinEngine, SpinTick};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::components::{
    Confetti, HistoryPanel, OptionForm, OptionList, SpinButton, WheelCanvas, WinnerBanner,
};
use crate::persistence;
use crate::state::{WheelAction, WheelState};
use crate::styles;

const FEEDBACK_HIDE_MS: u32 = 4000;
const CONFETTI_HIDE_MS: u32 = 4000;

const CUSTOM_CSS: &str = r#"
@keyframes confetti-fall {
    0% {
        transform: translateY(-10vh) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translateY(110vh) rotate(720deg);
        opacity: 0;
    }
}

.confetti-piece {
    position: absolute;
    top: 0;
    width: 10px;
    height: 14px;
    border-radius: 2px;
    animation-name: confetti-fall;
    animation-timing-function: ease-in;
    animation-fill-mode: forwards;
}
"#;

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    // Inject the confetti keyframes once, removing them on teardown.
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });
            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let state = use_reducer_eq(|| {
        let query = persistence::read();
        WheelState::hydrated(query.options.as_deref(), query.title.as_deref())
    });
    let rotation = use_state(|| 0.0f64);
    let is_spinning = use_state(|| false);
    let engine = use_mut_ref(SpinEngine::default);
    let raf_id = use_mut_ref(|| None::<i32>);

    // Persist the label list and title to the URL on every mutation.
    {
        let options_value = state.registry.to_query_value();
        let title = state.title.clone();
        use_effect_with((options_value, title), move |(options_value, title)| {
            persistence::write(options_value, title);
            || ()
        });
    }

    // Auto-dismiss feedback near the input.
    {
        let state = state.clone();
        use_effect_with(state.feedback.clone(), move |feedback| {
            if feedback.is_some() {
                let timeout = Timeout::new(FEEDBACK_HIDE_MS, move || {
                    state.dispatch(WheelAction::DismissFeedback);
                });
                Box::new(move || drop(timeout)) as Box<dyn FnOnce()>
            } else {
                Box::new(|| ()) as Box<dyn FnOnce()>
            }
        });
    }

    // Auto-hide confetti. Dropping the timeout on cleanup cancels it, so a
    // teardown mid-celebration never fires into a dead component.
    {
        let state = state.clone();
        use_effect_with(state.show_confetti, move |show| {
            if *show {
                let timeout = Timeout::new(CONFETTI_HIDE_MS, move || {
                    state.dispatch(WheelAction::HideConfetti);
                });
                Box::new(move || drop(timeout)) as Box<dyn FnOnce()>
            } else {
                Box::new(|| ()) as Box<dyn FnOnce()>
            }
        });
    }

    // Cancel any in-flight animation frame and spin session on unmount.
    {
        let engine = engine.clone();
        let raf_id = raf_id.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(id) = raf_id.borrow_mut().take() {
                    if let Some(window) = window() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
                engine.borrow_mut().cancel();
            }
        });
    }

    let on_spin = {
        let state = state.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let engine = engine.clone();
        let raf_id = raf_id.clone();

        Callback::from(move |_| {
            let option_count = state.registry.len();
            let started = engine.borrow_mut().start(
                &mut rand::thread_rng(),
                js_sys::Date::now(),
                option_count,
            );
            if !started {
                // Already spinning or the wheel is empty; both are silent
                // no-ops by contract.
                return;
            }
            is_spinning.set(true);

            let state = state.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let engine = engine.clone();
            let raf_id = raf_id.clone();

            // Self-rescheduling frame callback, shared with itself through
            // an Rc so it can request the next frame.
            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            let frame_raf_id = raf_id.clone();
            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let tick = engine.borrow_mut().tick(js_sys::Date::now());
                match tick {
                    SpinTick::Frame(deg) => {
                        rotation.set(deg);
                        if let Some(window) = window() {
                            if let Ok(id) = window.request_animation_frame(
                                f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                            ) {
                                *frame_raf_id.borrow_mut() = Some(id);
                            }
                        }
                    }
                    SpinTick::Finished { end_rotation } => {
                        *frame_raf_id.borrow_mut() = None;
                        rotation.set(end_rotation);
                        is_spinning.set(false);
                        // Winner resolution reads the option count at this
                        // moment, inside the reducer.
                        state.dispatch(WheelAction::SpinResolved { end_rotation });
                    }
                    SpinTick::Idle => {
                        *frame_raf_id.borrow_mut() = None;
                    }
                }
            }) as Box<dyn FnMut()>));

            if let Some(window) = window() {
                if let Ok(id) = window.request_animation_frame(
                    g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
        })
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |raw: String| state.dispatch(WheelAction::AddInput(raw)))
    };
    let on_delete = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(WheelAction::DeleteAt(index)))
    };
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(WheelAction::ResetOptions))
    };
    let on_clear_history = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(WheelAction::ClearHistory))
    };
    let on_title_change = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                state.dispatch(WheelAction::SetTitle(input.value()));
            }
        })
    };

    let limits = state.registry.limits();

    html! {
        <div class={styles::CONTAINER}>
            <Confetti active={state.show_confetti} />
            <div class="max-w-5xl mx-auto">
                <div class="mb-6 text-center">
                    <h1 class={styles::TEXT_H1}>{&state.title}</h1>
                    <input
                        type="text"
                        class={classes!(styles::INPUT, "max-w-xs", "mx-auto", "mt-2", "text-center")}
                        value={state.title.clone()}
                        onchange={on_title_change}
                        aria-label="Wheel title"
                    />
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class={styles::CARD}>
                        <div class="flex justify-center mb-6">
                            <WheelCanvas
                                labels={state.registry.labels().to_vec()}
                                rotation={*rotation}
                                is_spinning={*is_spinning}
                            />
                        </div>
                        <div class="max-w-[300px] mx-auto">
                            <SpinButton
                                is_spinning={*is_spinning}
                                has_options={!state.registry.is_empty()}
                                onclick={on_spin}
                            />
                        </div>
                        <WinnerBanner winner={state.winner.clone()} is_spinning={*is_spinning} />
                    </div>
                    <div class={styles::CARD}>
                        <h3 class={styles::TEXT_H3}>{"Names on the wheel"}</h3>
                        <OptionForm
                            on_add={on_add}
                            feedback={state.feedback.clone()}
                            count={state.registry.len()}
                            max_options={limits.max_options}
                        />
                        <OptionList
                            labels={state.registry.labels().to_vec()}
                            on_delete={on_delete}
                            on_reset={on_reset}
                            is_spinning={*is_spinning}
                        />
                        <HistoryPanel
                            items={state.history.items().to_vec()}
                            on_clear={on_clear_history}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
