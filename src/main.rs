use std::cell::RefCell;
use std::rc::Rc;

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod motion {
    pub mod ambient;
    pub mod gate;
    pub mod reveal;
    pub mod scroll;
    pub mod typing;
}
mod pages {
    pub mod contact;
    pub mod home;
}

use motion::scroll::{ScrollFlag, WindowScroll};
use pages::contact::Contact;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let flag = Rc::new(RefCell::new(ScrollFlag::new()));
                // Pick up the restored scroll position before any event fires
                if flag.borrow_mut().update(&WindowScroll) {
                    is_scrolled.set(flag.borrow().scrolled_past());
                }

                let scroll_callback = {
                    let is_scrolled = is_scrolled.clone();
                    Closure::wrap(Box::new(move || {
                        if flag.borrow_mut().update(&WindowScroll) {
                            is_scrolled.set(flag.borrow().scrolled_past());
                        }
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"◆"}</span>
                    {"Simr"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(8, 10, 18, 0.92);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.35);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.4rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                        letter-spacing: 0.02em;
                    }
                    .nav-logo-mark {
                        color: #7EB2FF;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #ccd4e4;
                        text-decoration: none;
                        font-size: 1rem;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #7EB2FF;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                        transition: transform 0.3s ease;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 1.5rem 2rem;
                            background: rgba(8, 10, 18, 0.97);
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
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
