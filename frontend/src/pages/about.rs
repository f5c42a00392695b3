use shared::{Icon, View};
use yew::prelude::*;

use crate::components::icon::IconView;
use crate::content::PILLARS;

#[derive(Properties, PartialEq)]
pub struct AboutPageProps {
    pub on_navigate: Callback<String>,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Contact.as_str().to_string()))
    };

    html! {
        <main class="about-page">
            <section class="manifesto">
                <span class="eyebrow">{"Est. 2024 • Palermo"}</span>
                <h1>{"We Architect Memories."}</h1>
                <p>{"Roots & Routes is not a travel agency. It is a collective of storytellers, historians, and locals dedicated to the art of slow, soulful exploration."}</p>
            </section>

            <section class="philosophy">
                <span class="eyebrow">{"Our Philosophy"}</span>
                <h2>{"From the Soil to the Soul."}</h2>
                <p>{"In a world that rushes, we choose to pause. To truly know Sicily, one must not just see it, but breathe it."}</p>
                <p>{"The Roots represent the deep history: the ancient Greek temples, the Norman mosaics, and the recipes passed down through generations."}</p>
                <p>{"The Routes are the journeys we craft: winding roads through vineyards, boat trips to hidden caves, and the personal path each traveler takes."}</p>
                <span class="signature">{"Giulia R."}</span>
            </section>

            <section class="pillars">
                <span class="eyebrow">{"Our Ethos"}</span>
                <h2>{"The Pillars of Our Craft"}</h2>
                <div class="pillar-grid">
                    { for PILLARS.iter().map(|pillar| html! {
                        <div class="pillar-card">
                            <IconView icon={pillar.icon} class={classes!("pillar-icon")} />
                            <h3>{pillar.title}</h3>
                            <p>{pillar.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-cta">
                <h2>{"Ready to find your route?"}</h2>
                <button class="btn-primary" onclick={to_contact}>
                    {"Get in Touch "}<IconView icon={Icon::ArrowRight} />
                </button>
            </section>
        </main>
    }
}
