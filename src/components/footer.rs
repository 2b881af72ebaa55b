use yew::prelude::*;

use crate::components::links::ExternalLink;
use crate::config;
use crate::i18n::PageContext;

#[function_component(Footer)]
pub fn footer() -> Html {
    let ctx = use_context::<PageContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };

    html! {
        <footer id={config::FOOTER_ID} class="site-footer">
            <div class="footer-content">
                <img class="footer-logo" src={ctx.lang.logo_src()} alt={ctx.t("logo.alt")} />
                <div class="footer-links">
                    <a href={config::CONTACT_MAILTO}>{ ctx.t("footer.contact") }</a>
                    {" | "}
                    <ExternalLink href={config::COMMUNITY_URL}>{ ctx.t("footer.community") }</ExternalLink>
                </div>
                <p class="footer-rights">{ ctx.t("footer.rights") }</p>
            </div>
        </footer>
    }
}
