use wasm_bindgen::JsCast;
use web_sys::{window, HtmlScriptElement};
use yew::prelude::*;

use crate::config;
use crate::dom;

const LAZYSIZES_SCRIPT_ID: &str = "lazysizes";

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let native = use_state(dom::supports_native_lazy_loading);

    if *native {
        html! {
            <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" class={props.classes.clone()} />
        }
    } else {
        html! {
            <img data-src={props.src.clone()} alt={props.alt.clone()} class={classes!("lazyload", props.classes.clone())} />
        }
    }
}

/// Pull in lazysizes once for browsers without native lazy images.
pub fn ensure_lazysizes() {
    if dom::supports_native_lazy_loading() {
        return;
    }
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(LAZYSIZES_SCRIPT_ID).is_some() {
        return;
    }

    let script = document
        .create_element("script")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok());
    match (script, document.body()) {
        (Some(script), Some(body)) => {
            script.set_id(LAZYSIZES_SCRIPT_ID);
            script.set_src(config::LAZYSIZES_URL);
            if let Err(e) = body.append_child(&script) {
                log::warn!("Could not add lazysizes: {:?}", e);
            } else {
                log::info!("Native lazy loading unavailable, loading lazysizes");
            }
        }
        _ => log::warn!("Could not create lazysizes script element"),
    }
}
