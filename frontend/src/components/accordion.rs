use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub title: String,
    #[prop_or_default]
    pub badge: Option<String>,
    pub body: String,
    #[prop_or_default]
    pub initially_open: bool,
}

/// Collapsible row used for the day-by-day itinerary and the FAQ
#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let is_open = use_state(|| props.initially_open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class={classes!("accordion-item", is_open.then_some("open"))}>
            <button class="accordion-header" onclick={toggle} aria-expanded={is_open.to_string()}>
                if let Some(badge) = &props.badge {
                    <span class="accordion-badge">{badge}</span>
                }
                <span class="accordion-title">{&props.title}</span>
                <span class="accordion-chevron">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <p class="accordion-body">{&props.body}</p>
            }
        </div>
    }
}
