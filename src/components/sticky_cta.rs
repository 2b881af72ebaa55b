use yew::prelude::*;

use crate::components::links::AnchorLink;
use crate::config;
use crate::i18n::PageContext;

#[derive(Properties, PartialEq)]
pub struct StickyCtaProps {
    /// The main CTA section is on screen, so this bar steps aside.
    pub cta_in_view: bool,
}

pub fn bar_classes(cta_in_view: bool) -> Classes {
    classes!("sticky-cta", cta_in_view.then_some("hidden"))
}

/// Floating register bar. Its `bottom` offset belongs to the scroll dock,
/// so visibility goes through a class and never through `style`.
#[function_component(StickyCta)]
pub fn sticky_cta(props: &StickyCtaProps) -> Html {
    let ctx = use_context::<PageContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };

    html! {
        <div id={config::STICKY_CTA_ID} class={bar_classes(props.cta_in_view)}>
            <span class="sticky-text">{ ctx.t("sticky.text") }</span>
            <AnchorLink href="#cta" classes="sticky-button">{ ctx.t("sticky.button") }</AnchorLink>
        </div>
    }
}
