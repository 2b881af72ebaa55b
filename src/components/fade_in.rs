use yew::prelude::*;

use crate::config;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let subscription = node.cast::<web_sys::Element>().and_then(|element| {
                dom::observe_intersection(
                    &element,
                    config::FADE_IN_THRESHOLD,
                    config::FADE_IN_ROOT_MARGIN,
                    move |intersecting| {
                        if intersecting {
                            visible.set(true);
                        }
                    },
                )
                .map_err(|e| log::warn!("Fade-in observer failed: {:?}", e))
                .ok()
            });
            move || drop(subscription)
        }, ());
    }

    html! {
        <div ref={node} class={classes!("fade-in", (*visible).then_some("visible"), props.classes.clone())}>
            { for props.children.iter() }
        </div>
    }
}
