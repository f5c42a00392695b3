use shared::{CalendarCell, CalendarDayType, CalendarMonth, WEEKDAY_LABELS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateGridProps {
    pub month: CalendarMonth,
    /// Total trip length shown in the footer, departure day included
    pub trip_days: u32,
    pub on_select: Callback<u32>,
}

fn day_classes(cell: &CalendarCell) -> Classes {
    classes!(
        "calendar-day",
        cell.is_selected.then_some("selected"),
        (cell.in_range && !cell.is_selected).then_some("in-range"),
        (cell.is_preferred_departure && !cell.is_selected).then_some("preferred"),
    )
}

/// Departure calendar dropdown
#[function_component(DateGrid)]
pub fn date_grid(props: &DateGridProps) -> Html {
    let render_cell = |cell: &CalendarCell| -> Html {
        match cell.day_type {
            CalendarDayType::Padding => html! { <div class="calendar-day padding"></div> },
            CalendarDayType::MonthDay => {
                let day = cell.day;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(day));
                html! {
                    <button type="button" class={day_classes(cell)} {onclick}>
                        {day}
                    </button>
                }
            }
        }
    };

    html! {
        <div class="calendar-dropdown">
            <div class="calendar-header">
                <span class="calendar-month-label">{&props.month.label}</span>
            </div>
            <div class="calendar-weekdays">
                { for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="calendar-weekday">{*label}</div>
                }) }
            </div>
            <div class="calendar-grid">
                { for props.month.rows().map(|row| html! {
                    <div class="calendar-row">
                        { for row.iter().map(render_cell) }
                    </div>
                }) }
            </div>
            <div class="calendar-footer">
                {format!("{} Day Trip • Saturday Departures Recommended", props.trip_days)}
            </div>
        </div>
    }
}
