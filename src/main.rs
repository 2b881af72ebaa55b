use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod i18n;
mod dock {
    pub mod state;
    pub mod controller;
    pub mod browser;
}
mod components {
    pub mod enroll_form;
    pub mod fade_in;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod lazy_image;
    pub mod links;
    pub mod sticky_cta;
}
mod pages {
    pub mod program;
}

use content::Content;
use i18n::{apply_lang, stored_lang, Lang, PageContext};
use pages::program::ProgramPage;

#[function_component]
fn App() -> Html {
    let content = use_state(|| Content::load().map(Rc::new));
    let lang = use_state(stored_lang);

    {
        use_effect_with_deps(move |lang| {
            info!("Language set to {}", lang.code());
            apply_lang(*lang);
            || ()
        }, *lang);
    }

    let set_lang = {
        let lang = lang.clone();
        Callback::from(move |next: Lang| lang.set(next))
    };

    match &*content {
        Ok(content) => {
            let ctx = PageContext {
                lang: *lang,
                content: Rc::clone(content),
                set_lang,
            };
            html! {
                <ContextProvider<PageContext> context={ctx}>
                    <ProgramPage />
                </ContextProvider<PageContext>>
            }
        }
        Err(e) => {
            error!("{}", e);
            html! {
                <div class="content-error">{"This page could not be loaded. Please try again later."}</div>
            }
        }
    }
}

fn welcome() {
    gloo_console::log!("%cVibeCoding Program", "color: #006cfd; font-size: 20px; font-weight: bold;");
    gloo_console::log!("%cLearn Coding Through AI - From Zero to Professional", "color: #142237; font-size: 14px;");
    gloo_console::log!("%cReady to start your coding journey? Register now!", "color: #666; font-size: 12px;");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting program page");
    welcome();
    yew::Renderer::<App>::new().render();
}
