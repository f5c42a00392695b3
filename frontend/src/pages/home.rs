use shared::{Icon, View};
use yew::prelude::*;

use crate::components::icon::IconView;
use crate::content::{DESTINATIONS, FEATURED_HIGHLIGHTS};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<String>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let to_experience = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Experience.as_str().to_string()))
    };

    html! {
        <main class="home-page">
            <section class="hero">
                <span class="eyebrow">{"Est. 2024 • Sicily"}</span>
                <h1>
                    <span class="hero-tagline">{"Where heritage meets horizon"}</span>
                    {"Roots & Routes"}
                </h1>
                <p>{"Curating the finest Sicilian journeys. From the deep roots of ancient history to the open routes of modern luxury."}</p>
                <button class="btn-primary" onclick={to_experience.clone()}>
                    {"Start Your Journey "}<IconView icon={Icon::ArrowRight} />
                </button>
                <div class="hero-stats">
                    <div class="stat"><strong>{"98%"}</strong><span>{"Client Satisfaction"}</span></div>
                    <div class="stat"><strong>{"45"}</strong><span>{"Curated Experiences"}</span></div>
                    <div class="stat"><strong>{"24/7"}</strong><span>{"Concierge Support"}</span></div>
                </div>
            </section>

            <section class="destinations">
                <h2>{"Destinations"}</h2>
                <div class="destination-grid">
                    { for DESTINATIONS.iter().map(|destination| html! {
                        <article class="destination-card">
                            <span class="destination-number">{destination.number}</span>
                            <span class="destination-tag"><IconView icon={Icon::MapPin} />{" "}{destination.tag}</span>
                            <h3>{destination.title}</h3>
                            <p>{destination.description}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="featured-experience">
                <span class="eyebrow">{"Featured Experience"}</span>
                <h2>{"Book Your Sicily Premium Experience Today."}</h2>
                <div class="featured-card">
                    <h3>{"The Sicilian Sunset Escape"}</h3>
                    <p>{"Indulge in authentic local cuisine, explore ancient Greek temples, sail along the coastline, and uncover the rich history and flavors of Sicily."}</p>
                    <ul class="featured-highlights">
                        { for FEATURED_HIGHLIGHTS.iter().map(|highlight| html! {
                            <li><IconView icon={highlight.icon} />{" "}{highlight.label}</li>
                        }) }
                    </ul>
                    <div class="featured-price">
                        <span class="field-label">{"Starting Price"}</span>
                        <span class="price">{"€2,499"}</span>
                    </div>
                    <button class="btn-outline" onclick={to_experience}>
                        {"Show More "}<IconView icon={Icon::ArrowRight} />
                    </button>
                </div>
            </section>
        </main>
    }
}
