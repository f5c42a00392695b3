use backend::NAV_LINKS;
use shared::View;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_view: View,
    /// Receives the target view identifier ("home", "about", ...)
    pub on_navigate: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let mobile_menu_open = use_state(|| false);

    let nav_to = |view: View| {
        let on_navigate = props.on_navigate.clone();
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_menu_open.set(false);
            on_navigate.emit(view.as_str().to_string());
        })
    };

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                let active = (link.view == props.current_view).then_some("active");
                html! {
                    <a href="#" class={classes!(class, active)} onclick={nav_to(link.view)}>
                        {link.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header class="header">
            <div class="container">
                <a href="#" class="brand" onclick={nav_to(View::Home)}>
                    {"Roots&Routes"}
                </a>
                <nav class="nav-links">
                    {links("nav-link")}
                </nav>
                <button class="nav-cta" onclick={nav_to(View::Contact)}>
                    {"Plan Your Trip"}
                </button>
                <button class="mobile-menu-toggle" onclick={toggle_mobile_menu} aria-label="Menu">
                    {if *mobile_menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            {if *mobile_menu_open {
                html! {
                    <nav class="mobile-menu">
                        {links("mobile-nav-link")}
                        <p class="mobile-menu-tagline">{"Roots & Routes • Sicily"}</p>
                    </nav>
                }
            } else {
                html! {}
            }}
        </header>
    }
}
