pub mod components;
pub mod pages;
pub mod persistence;
pub mod state;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::wheel::WheelPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Wheel,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Wheel => html! { <WheelPage /> },
        Route::NotFound => html! {
            <div class={styles::CONTAINER}>
                <p class={styles::TEXT_BODY}>{"Page not found"}</p>
            </div>
        },
    }
}
