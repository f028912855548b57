use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use std::rc::Rc;

mod pages {
    pub mod landing;
}
mod effects {
    pub mod counters;
    pub mod debounce;
    pub mod glow;
    pub mod lifecycle;
    pub mod nav;
    pub mod parallax;
    pub mod reveal;
    pub mod tooltip;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("stats", "Stats"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);
    let active_section = use_state(String::new);

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let update = {
                let window = window.clone();
                Rc::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(effects::nav::navbar_scrolled(scroll_y));
                    let sections = effects::nav::measure_sections(&document);
                    let probe = scroll_y + effects::nav::SECTION_PROBE_OFFSET;
                    let current = effects::nav::active_section_id(probe, &sections)
                        .map(str::to_owned)
                        .unwrap_or_default();
                    active_section.set(current);
                })
            };

            // Reflect the position the page was (re)loaded at before any
            // scroll event arrives.
            update();

            let debounced = effects::debounce::trailing(effects::debounce::SCROLL_QUIET_MS, {
                let update = update.clone();
                move || update()
            });
            let scroll_callback = Closure::wrap(Box::new(move || debounced()) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={
                    Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        effects::nav::scroll_to_section("home");
                    })
                }>
                    {"Northglow Studio"}
                </a>
                <div class="nav-links">
                    {
                        for NAV_SECTIONS.iter().map(|(id, label)| {
                            let onclick = {
                                let id = *id;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    effects::nav::scroll_to_section(id);
                                })
                            };
                            let class = classes!(
                                "nav-link",
                                (*active_section == *id).then(|| "active"),
                            );
                            html! {
                                <a href={format!("#{}", id)} class={class} onclick={onclick}>{ *label }</a>
                            }
                        })
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(|_| {
        effects::lifecycle::init_escape_dismiss();
        effects::lifecycle::init_page_fade_in();
        || ()
    }, ());

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
