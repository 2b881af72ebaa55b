use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Selector for an in-page link, or `None` for a bare `#` or a real URL.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_target_top(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - config::HEADER_OFFSET
}

/// Outbound links that don't pick their own target open in a new tab.
pub fn needs_hardening(href: &str, has_target: bool) -> bool {
    href.starts_with("http") && !has_target
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            let Some(window) = window() else {
                return;
            };
            let target = window
                .document()
                .and_then(|d| d.query_selector(selector).ok().flatten());
            if let Some(target) = target {
                e.prevent_default();
                let top = scroll_target_top(
                    target.get_bounding_client_rect().top(),
                    window.scroll_y().unwrap_or(0.0),
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

/// Attribute access on a rendered link.
pub trait LinkAttributes {
    fn has_attribute(&self, name: &str) -> bool;
    fn set_attribute(&self, name: &str, value: &str);
}

impl LinkAttributes for Element {
    fn has_attribute(&self, name: &str) -> bool {
        Element::has_attribute(self, name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = Element::set_attribute(self, name, value) {
            log::warn!("Failed to set {} on link: {:?}", name, e);
        }
    }
}

/// Opens `href` in a new tab without an opener when it needs it. Returns
/// whether the link was changed.
pub fn harden_link(link: &impl LinkAttributes, href: &str) -> bool {
    if !needs_hardening(href, link.has_attribute("target")) {
        return false;
    }
    link.set_attribute("target", "_blank");
    link.set_attribute("rel", "noopener noreferrer");
    true
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    let link_ref = use_node_ref();

    // Yew delegates listeners to the mount root, so the event's current
    // target is not this anchor. Go through the node ref instead.
    let onclick = {
        let link_ref = link_ref.clone();
        let href = props.href.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(link) = link_ref.cast::<Element>() {
                harden_link(&link, &href);
            }
        })
    };

    html! {
        <a ref={link_ref} href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeLink {
        attrs: RefCell<HashMap<String, String>>,
    }

    impl FakeLink {
        fn with_target(target: &str) -> Self {
            let link = Self::default();
            link.attrs.borrow_mut().insert("target".into(), target.into());
            link
        }

        fn attr(&self, name: &str) -> Option<String> {
            self.attrs.borrow().get(name).cloned()
        }
    }

    impl LinkAttributes for FakeLink {
        fn has_attribute(&self, name: &str) -> bool {
            self.attrs.borrow().contains_key(name)
        }

        fn set_attribute(&self, name: &str, value: &str) {
            self.attrs.borrow_mut().insert(name.into(), value.into());
        }
    }

    #[test]
    fn test_anchor_selector() {
        assert_eq!(anchor_selector("#faq"), Some("#faq"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("https://example.com/#faq"), None);
    }

    #[test]
    fn test_scroll_target_clears_header() {
        assert_eq!(scroll_target_top(300.0, 1200.0), 1420.0);
        assert_eq!(scroll_target_top(40.0, 0.0), -40.0);
    }

    #[test]
    fn test_needs_hardening() {
        assert!(needs_hardening("https://community.vibecoding.example", false));
        assert!(needs_hardening("http://example.com", false));
        assert!(!needs_hardening("https://example.com", true));
        assert!(!needs_hardening("/register", false));
        assert!(!needs_hardening("#cta", false));
    }

    #[test]
    fn test_harden_link_uses_the_rendered_href() {
        let link = FakeLink::default();
        assert!(harden_link(&link, config::COMMUNITY_URL));
        assert_eq!(link.attr("target").as_deref(), Some("_blank"));
        assert_eq!(link.attr("rel").as_deref(), Some("noopener noreferrer"));
    }

    #[test]
    fn test_harden_link_keeps_an_explicit_target() {
        let link = FakeLink::with_target("_self");
        assert!(!harden_link(&link, "https://example.com"));
        assert_eq!(link.attr("target").as_deref(), Some("_self"));
        assert_eq!(link.attr("rel"), None);
    }

    #[test]
    fn test_harden_link_ignores_relative_links() {
        let link = FakeLink::default();
        assert!(!harden_link(&link, "/register"));
        assert!(link.attrs.borrow().is_empty());
    }
}
