use shared::Icon;
use yew::prelude::*;

/// Glyph shown for an icon identifier
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Calendar => "📅",
        Icon::ChevronDown => "▾",
        Icon::ChevronLeft => "‹",
        Icon::ChevronRight => "›",
        Icon::Sun => "☀",
        Icon::Users => "👥",
        Icon::MapPin => "📍",
        Icon::BarChart => "📊",
        Icon::Compass => "🧭",
        Icon::Anchor => "⚓",
        Icon::Sparkles => "✨",
        Icon::Heart => "♥",
        Icon::Mail => "✉",
        Icon::Phone => "☎",
        Icon::ArrowRight => "→",
        Icon::Check => "✓",
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {glyph(props.icon)}
        </span>
    }
}
