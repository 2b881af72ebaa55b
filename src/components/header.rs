use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::components::links::AnchorLink;
use crate::config;
use crate::dom;
use crate::i18n::{Lang, PageContext};

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::HEADER_SCROLLED_OFFSET
}

#[function_component(Header)]
pub fn header() -> Html {
    let ctx = use_context::<PageContext>();
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let subscription = window().and_then(|window| {
                let reader = window.clone();
                let update = move || {
                    scrolled.set(is_scrolled(reader.scroll_y().unwrap_or(0.0)));
                };
                update();
                dom::listen(&window, "scroll", update)
                    .map_err(|e| log::warn!("Header scroll listener failed: {:?}", e))
                    .ok()
            });
            move || drop(subscription)
        }, ());
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
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let Some(ctx) = ctx else {
        return html! {};
    };

    let lang_button = |lang: Lang| {
        let set_lang = ctx.set_lang.clone();
        html! {
            <button
                class={classes!("lang-btn", (ctx.lang == lang).then_some("active"))}
                data-lang={lang.code()}
                onclick={Callback::from(move |_| set_lang.emit(lang))}
            >
                { lang.label() }
            </button>
        }
    };

    html! {
        <header id="header" class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <div class="header-content">
                <AnchorLink href="#top" classes="header-logo">
                    <img id="logo-img" src={ctx.lang.logo_src()} alt={ctx.t("logo.alt")} />
                </AnchorLink>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("header-nav", (*menu_open).then_some("mobile-menu-open"))}>
                    <AnchorLink href="#overview" classes="nav-link" on_navigate={close_menu.clone()}>
                        { ctx.t("nav.overview") }
                    </AnchorLink>
                    <AnchorLink href="#curriculum" classes="nav-link" on_navigate={close_menu.clone()}>
                        { ctx.t("nav.curriculum") }
                    </AnchorLink>
                    <AnchorLink href="#faq" classes="nav-link" on_navigate={close_menu.clone()}>
                        { ctx.t("nav.faq") }
                    </AnchorLink>
                    <AnchorLink href="#cta" classes="nav-register" on_navigate={close_menu}>
                        { ctx.t("nav.register") }
                    </AnchorLink>
                </nav>
                <div class="lang-switch">
                    { for Lang::ALL.into_iter().map(lang_button) }
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(2000.0));
    }
}
