use shared::{BookingConfig, Icon, Notification, View};
use yew::prelude::*;

use crate::components::accordion::AccordionItem;
use crate::components::booking_panel::BookingPanel;
use crate::components::icon::IconView;
use crate::content::{FAQS, INCLUSIONS, ITINERARY};

#[derive(Properties, PartialEq)]
pub struct ExperiencePageProps {
    pub on_navigate: Callback<String>,
    pub on_notify: Callback<Notification>,
}

/// Where the "Back to Home" control leads
const BACK_TARGET: View = View::Home;

/// Trip detail page with the booking card. Each visit mounts a fresh
/// booking widget; leaving the page drops it along with any pending request.
#[function_component(ExperiencePage)]
pub fn experience_page(props: &ExperiencePageProps) -> Html {
    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(BACK_TARGET.as_str().to_string()))
    };

    html! {
        <main class="experience-page">
            <section class="experience-hero">
                <button class="back-button" onclick={on_back}>
                    <IconView icon={Icon::ChevronLeft} />{" Back to Home"}
                </button>
                <span class="eyebrow">{"The Sicilian Sunset Escape"}</span>
                <h1>{"Western Sicily & the Egadi Islands"}</h1>
                <div class="experience-stats">
                    <div class="stat"><IconView icon={Icon::Sun} /><span>{"Duration"}</span><strong>{"8 Days"}</strong></div>
                    <div class="stat"><IconView icon={Icon::Calendar} /><span>{"Season"}</span><strong>{"May - Oct"}</strong></div>
                    <div class="stat"><IconView icon={Icon::Users} /><span>{"Group"}</span><strong>{"Max 12 Guests"}</strong></div>
                    <div class="stat"><IconView icon={Icon::Sparkles} /><span>{"Rating"}</span><strong>{"4.9 / 5.0"}</strong></div>
                </div>
            </section>

            <div class="experience-layout">
                <div class="experience-content">
                    <section class="itinerary">
                        <span class="eyebrow">{"Day by Day"}</span>
                        <h2>{"Your Journey"}</h2>
                        { for ITINERARY.iter().map(|day| html! {
                            <AccordionItem
                                badge={format!("Day {}", day.day)}
                                title={day.title.to_string()}
                                body={day.description.to_string()}
                                initially_open={day.day == 1}
                            />
                        }) }
                    </section>

                    <section class="inclusions">
                        <h2>{"Curated Inclusions"}</h2>
                        <ul>
                            { for INCLUSIONS.iter().map(|item| html! {
                                <li class={classes!("inclusion", (!item.included).then_some("excluded"))}>
                                    {if item.included {
                                        html! { <IconView icon={Icon::Check} /> }
                                    } else {
                                        html! { <span class="icon">{"✕"}</span> }
                                    }}
                                    {" "}{item.text}
                                </li>
                            }) }
                        </ul>
                    </section>

                    <section class="faq">
                        <h2>{"Frequently Asked Questions"}</h2>
                        { for FAQS.iter().map(|faq| html! {
                            <AccordionItem title={faq.question.to_string()} body={faq.answer.to_string()} />
                        }) }
                    </section>
                </div>

                <aside class="experience-sidebar">
                    <BookingPanel config={BookingConfig::default()} on_notify={props.on_notify.clone()} />
                    <div class="coordinator">
                        <span class="field-label">{"Your Coordinator"}</span>
                        <span class="coordinator-name">{"Giulia Romano"}</span>
                    </div>
                </aside>
            </div>
        </main>
    }
}
