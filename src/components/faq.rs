use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::content::Entry;
use crate::i18n::PageContext;

/// Which FAQ item is expanded. Opening one closes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    // Animate with the answer's real height; CSS transitions max-height.
    {
        let answer_ref = answer_ref.clone();
        use_effect_with_deps(move |(open, _answer)| {
            if let Some(answer) = answer_ref.cast::<HtmlElement>() {
                let max_height = if *open {
                    format!("{}px", answer.scroll_height())
                } else {
                    "0".to_string()
                };
                let _ = answer.style().set_property("max-height", &max_height);
            }
            || ()
        }, (props.open, props.answer.clone()));
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer" ref={answer_ref}>
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<Entry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let ctx = use_context::<PageContext>();
    let accordion = use_state(Accordion::default);
    let Some(ctx) = ctx else {
        return html! {};
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let accordion = accordion.clone();
                html! {
                    <FaqItem
                        question={entry.title.get(ctx.lang).to_string()}
                        answer={entry.body.get(ctx.lang).to_string()}
                        open={accordion.is_open(index)}
                        on_toggle={Callback::from(move |_| accordion.set(accordion.toggle(index)))}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let accordion = Accordion::default();
        assert!((0..4).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn test_opening_one_closes_the_other() {
        let accordion = Accordion::default().toggle(1).toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        let accordion = Accordion::default().toggle(2).toggle(2);
        assert_eq!(accordion, Accordion::default());
    }
}
