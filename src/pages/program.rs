use web_sys::window;
use yew::prelude::*;

use crate::components::{
    enroll_form::EnrollForm,
    fade_in::FadeIn,
    faq::FaqList,
    footer::Footer,
    header::Header,
    lazy_image::{ensure_lazysizes, LazyImage},
    links::AnchorLink,
    sticky_cta::StickyCta,
};
use crate::config;
use crate::content::Entry;
use crate::dock::browser::bind_dock;
use crate::dom;
use crate::error::DockError;
use crate::i18n::PageContext;

fn render_cards(entries: &[Entry], ctx: &PageContext, class: &'static str) -> Html {
    html! {
        <>
            { for entries.iter().map(|entry| html! {
                <FadeIn classes={class}>
                    <h3>{ entry.title.get(ctx.lang) }</h3>
                    <p>{ entry.body.get(ctx.lang) }</p>
                </FadeIn>
            }) }
        </>
    }
}

#[function_component(ProgramPage)]
pub fn program_page() -> Html {
    let ctx = use_context::<PageContext>();
    let cta_ref = use_node_ref();
    let cta_in_view = use_state_eq(|| false);

    // Everything below needs the whole page in the DOM.
    {
        let cta_ref = cta_ref.clone();
        let cta_in_view = cta_in_view.clone();
        use_effect_with_deps(move |_| {
            ensure_lazysizes();

            let cta_observer = cta_ref.cast::<web_sys::Element>().and_then(|section| {
                dom::observe_intersection(
                    &section,
                    config::STICKY_CTA_THRESHOLD,
                    config::STICKY_CTA_ROOT_MARGIN,
                    move |intersecting| cta_in_view.set(intersecting),
                )
                .map_err(|e| log::warn!("CTA observer failed: {:?}", e))
                .ok()
            });

            let dock = window().and_then(|window| {
                let document = window.document()?;
                match bind_dock(window, &document) {
                    Ok(binding) => Some(binding),
                    Err(e @ DockError::MissingElement { .. }) => {
                        log::debug!("{}", e);
                        None
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        None
                    }
                }
            });

            move || {
                if let Some(dock) = dock {
                    dock.teardown();
                }
                drop(cta_observer);
            }
        }, ());
    }

    let Some(ctx) = ctx else {
        return html! {};
    };

    html! {
        <div class="program-page" id="top">
            <Header />

            <section class="hero">
                <FadeIn classes="hero-content">
                    <h1>{ ctx.t("hero.title") }</h1>
                    <p class="hero-tagline">{ ctx.t("hero.tagline") }</p>
                    <AnchorLink href="#cta" classes="primary-cta">{ ctx.t("hero.cta") }</AnchorLink>
                </FadeIn>
                <LazyImage src="/assets/hero.webp" alt={ctx.t("hero.image_alt")} classes="hero-image" />
            </section>

            <section id="overview" class="overview">
                <FadeIn>
                    <h2>{ ctx.t("overview.title") }</h2>
                    <p>{ ctx.t("overview.body") }</p>
                </FadeIn>
                <div class="highlight-grid">
                    { render_cards(&ctx.content.highlights, &ctx, "highlight-card") }
                </div>
            </section>

            <section id="curriculum" class="curriculum">
                <FadeIn>
                    <h2>{ ctx.t("curriculum.title") }</h2>
                </FadeIn>
                <div class="module-list">
                    { render_cards(&ctx.content.curriculum, &ctx, "module-card") }
                </div>
            </section>

            <section id="faq" class="faq-section">
                <FadeIn>
                    <h2>{ ctx.t("faq.title") }</h2>
                </FadeIn>
                <FaqList entries={ctx.content.faq.clone()} />
            </section>

            <section id={config::CTA_SECTION_ID} class="cta-section" ref={cta_ref}>
                <FadeIn>
                    <h2>{ ctx.t("cta.title") }</h2>
                    <p>{ ctx.t("cta.body") }</p>
                </FadeIn>
                <EnrollForm />
            </section>

            <Footer />
            <StickyCta cta_in_view={*cta_in_view} />

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: #ffffff;
                        box-shadow: 0 2px 12px rgba(20, 34, 55, 0.1);
                    }
                    .header-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .header-nav {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .burger-menu {
                        display: none;
                    }
                    .lang-btn.active {
                        color: #006cfd;
                        font-weight: bold;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }
                    .primary-cta {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border-radius: 8px;
                        background: #006cfd;
                        color: #ffffff;
                    }
                    .enroll-form.was-validated input:invalid {
                        border-color: #d93025;
                    }
                    .site-footer {
                        background: #142237;
                        color: #ffffff;
                        padding: 2rem 1.5rem;
                    }
                    .site-footer.fixed {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                    }
                    .sticky-cta {
                        position: fixed;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 90;
                        display: block;
                        transition: bottom 0.2s ease;
                    }
                    .sticky-cta.hidden {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .header-nav {
                            display: none;
                        }
                        .header-nav.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
