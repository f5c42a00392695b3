use shared::{ContactConfig, Icon, Notification};
use yew::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::icon::IconView;

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub on_notify: Callback<Notification>,
}

#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let details = [
        (Icon::Mail, "Email Us", "hello@rootsandroutes.com"),
        (Icon::Phone, "Call Us", "+39 091 882 1422"),
        (Icon::MapPin, "Visit Us", "Palermo, Sicily"),
    ];

    html! {
        <main class="contact-page">
            <div class="contact-intro">
                <span class="eyebrow">{"Get in Touch"}</span>
                <h1>{"Let's plan your escape."}</h1>
                <p>{"We are here to help you curate the perfect Sicilian itinerary. Whether it's a private boat tour or a week-long culinary retreat, our team is ready to assist."}</p>
                <ul class="contact-details">
                    { for details.iter().map(|(icon, title, content)| html! {
                        <li>
                            <IconView icon={*icon} />
                            <span class="contact-detail-title">{*title}</span>
                            <span class="contact-detail-content">{*content}</span>
                        </li>
                    }) }
                </ul>
            </div>
            <ContactFormView config={ContactConfig::default()} on_notify={props.on_notify.clone()} />
        </main>
    }
}
