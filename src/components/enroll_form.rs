use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::i18n::PageContext;

#[function_component(EnrollForm)]
pub fn enroll_form() -> Html {
    let ctx = use_context::<PageContext>();
    let validated = use_state(|| false);

    // Native constraint validation decides; an invalid form never submits.
    let onsubmit = {
        let validated = validated.clone();
        Callback::from(move |e: SubmitEvent| {
            let form: HtmlFormElement = e.target_unchecked_into();
            if !form.check_validity() {
                e.prevent_default();
                e.stop_propagation();
                log::debug!("Enrollment form blocked, fields invalid");
            }
            validated.set(true);
        })
    };

    let Some(ctx) = ctx else {
        return html! {};
    };

    html! {
        <form
            class={classes!("enroll-form", (*validated).then_some("was-validated"))}
            action={config::ENROLL_ACTION}
            method="post"
            {onsubmit}
        >
            <label for="enroll-name">{ ctx.t("form.name_label") }</label>
            <input id="enroll-name" name="name" type="text" required={true} placeholder={ctx.t("form.name_placeholder")} />

            <label for="enroll-email">{ ctx.t("form.email_label") }</label>
            <input id="enroll-email" name="email" type="email" required={true} placeholder={ctx.t("form.email_placeholder")} />

            <label for="enroll-goal">{ ctx.t("form.goal_label") }</label>
            <textarea id="enroll-goal" name="goal" rows="3" placeholder={ctx.t("form.goal_placeholder")} />

            <button type="submit" class="primary-cta">{ ctx.t("form.submit") }</button>
        </form>
    }
}
