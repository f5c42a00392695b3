use shared::{ContactConfig, Icon, Notification};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::icon::IconView;
use crate::hooks::use_contact_form::{use_contact_form, ContactAction, ContactEdit};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub config: ContactConfig,
    pub on_notify: Callback<Notification>,
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormProps) -> Html {
    let contact = use_contact_form(props.config.clone(), props.on_notify.clone());
    let form = &contact.form;

    if form.is_submitted() {
        let on_reset = {
            let contact = contact.clone();
            Callback::from(move |_: MouseEvent| contact.dispatch(ContactAction::Reset))
        };
        return html! {
            <div class="contact-sent">
                <IconView icon={Icon::Check} class={classes!("contact-sent-icon")} />
                <h3>{"Message Sent"}</h3>
                <p>{"Thank you for reaching out. We'll be in touch within 24 hours."}</p>
                <button class="btn-outline" onclick={on_reset}>{"Send another message"}</button>
            </div>
        };
    }

    let Some(request) = form.request() else {
        return html! {};
    };
    let sending = form.is_submitting();

    let on_input = |make: fn(String) -> ContactEdit| {
        let contact = contact.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            contact.dispatch(ContactAction::Edit(make(input.value())));
        })
    };

    let on_message = {
        let contact = contact.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            contact.dispatch(ContactAction::Edit(ContactEdit::Message(textarea.value())));
        })
    };

    let on_submit = {
        let contact = contact.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            contact.dispatch(ContactAction::Submit);
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-row">
                <div class="form-group">
                    <label>{"Name"}</label>
                    <input type="text" placeholder="Your name" required=true disabled={sending}
                        value={request.name.clone()} oninput={on_input(ContactEdit::Name)} />
                </div>
                <div class="form-group">
                    <label>{"Email"}</label>
                    <input type="email" placeholder="you@example.com" required=true disabled={sending}
                        value={request.email.clone()} oninput={on_input(ContactEdit::Email)} />
                </div>
            </div>
            <div class="form-group">
                <label>{"Phone (Optional)"}</label>
                <input type="tel" placeholder="+39 ..." disabled={sending}
                    value={request.phone.clone()} oninput={on_input(ContactEdit::Phone)} />
            </div>
            <div class="form-group">
                <label>{"Message"}</label>
                <textarea rows="5" placeholder="Tell us about the trip you have in mind" required=true disabled={sending}
                    value={request.message.clone()} oninput={on_message} />
            </div>
            {if let Some(error) = &contact.last_error {
                html! { <div class="error-message">{error.to_string()}</div> }
            } else {
                html! {}
            }}
            <button type="submit" class="btn-primary" disabled={sending}>
                {if sending { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
