use shared::{Icon, View};
use yew::prelude::*;

use super::icon::IconView;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let nav_to = |view: View| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(view.as_str().to_string());
        })
    };

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-cta">
                    <h2>{"Find the perfect trip for you and discover extraordinary adventures with us!"}</h2>
                    <p>{"Embark on a journey of sun-drenched exploration as we guide you towards unforgettable experiences across Sicily."}</p>
                    <button class="btn-outline" onclick={nav_to(View::Experience)}>
                        {"Show More "}<IconView icon={Icon::ArrowRight} />
                    </button>
                </div>
                <div class="footer-columns">
                    <div class="footer-brand">
                        <h3>{"ROOTS&ROUTES"}</h3>
                        <p>{"Your gateway to the extraordinary beauty, ancient culture, exhilarating adventures and landscapes of this Sicilian Island."}</p>
                    </div>
                    <div class="footer-nav">
                        <h4>{"Navigation"}</h4>
                        <ul>
                            <li><a href="#" onclick={nav_to(View::Home)}>{"Home"}</a></li>
                            <li><a href="#" onclick={nav_to(View::Experience)}>{"Experiences"}</a></li>
                            <li><a href="#" onclick={nav_to(View::About)}>{"About Us"}</a></li>
                            <li><a href="#" onclick={nav_to(View::Contact)}>{"Contact Us"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-contact">
                        <h4>{"Contact Us"}</h4>
                        <ul>
                            <li><IconView icon={Icon::Mail} />{" "}<a href="mailto:hello@rootsandroutes.com">{"hello@rootsandroutes.com"}</a></li>
                            <li><IconView icon={Icon::Phone} />{" (+39) 091-XXX-X422"}</li>
                            <li><IconView icon={Icon::MapPin} />{" 138 Vittorio Emanuele, 12, Palermo, Sicily, Italia"}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{"© 2024 Roots&Routes. All rights reserved."}</span>
                </div>
            </div>
        </footer>
    }
}
