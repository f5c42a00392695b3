use shared::{BookingConfig, FormRequest, Icon, Notification, UiState};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::date_grid::DateGrid;
use super::icon::IconView;
use crate::hooks::use_booking::{use_booking, BookingAction, BookingModel, FormEdit};

#[derive(Properties, PartialEq)]
pub struct BookingPanelProps {
    #[prop_or_default]
    pub config: BookingConfig,
    pub on_notify: Callback<Notification>,
}

/// Sticky booking card on the experience page: departure picker plus the
/// availability request form
#[function_component(BookingPanel)]
pub fn booking_panel(props: &BookingPanelProps) -> Html {
    let booking = use_booking(props.config.clone(), props.on_notify.clone());
    let widget = &booking.widget;
    let state = widget.ui_state();

    let dispatch = |action: BookingAction| {
        let booking = booking.clone();
        Callback::from(move |_: MouseEvent| booking.dispatch(action.clone()))
    };

    let on_select_day = {
        let booking = booking.clone();
        Callback::from(move |day: u32| booking.dispatch(BookingAction::SelectDay(day)))
    };

    let date_selector = html! {
        <div class={classes!("date-selector", (!widget.is_calendar_interactive()).then_some("inert"))}>
            <span class="field-label">{"Select Departure"}</span>
            <button
                type="button"
                class={classes!("date-toggle", widget.is_calendar_open().then_some("open"))}
                disabled={!widget.is_calendar_interactive()}
                onclick={dispatch(BookingAction::ToggleCalendar)}
            >
                <IconView icon={Icon::Calendar} />
                <span class="date-range">{widget.date_range_label()}</span>
                <IconView icon={Icon::ChevronDown} class={classes!("chevron")} />
            </button>
            {if widget.is_calendar_open() {
                html! {
                    <DateGrid
                        month={widget.calendar_month()}
                        trip_days={widget.config().trip_duration_days + 1}
                        on_select={on_select_day}
                    />
                }
            } else {
                html! {}
            }}
            <div class="availability-note">
                <span class="confirmed">{"Confirmed"}</span>
                <span class="spots-left">{"4 spots left"}</span>
            </div>
        </div>
    };

    let body = match state {
        UiState::Idle | UiState::CalendarOpen => html! {
            <>
                <div class="summary-lines">
                    <div class="summary-line"><span>{"Deposit required"}</span><span>{"€100"}</span></div>
                    <div class="summary-line"><span>{"Balance due"}</span><span>{"30 days before"}</span></div>
                </div>
                <button class="btn-primary" onclick={dispatch(BookingAction::OpenRequestForm)}>
                    {"Request Availability"}
                </button>
                <ul class="trust-signals">
                    <li><IconView icon={Icon::Check} />{" Free cancellation up to 31 days before"}</li>
                    <li><IconView icon={Icon::Check} />{" No hidden booking fees"}</li>
                </ul>
            </>
        },
        UiState::RequestFormOpen | UiState::Submitting => match widget.form() {
            Some(form) => render_request_form(&booking, form, state == UiState::Submitting),
            None => html! {},
        },
        UiState::Submitted => html! {
            <div class="request-sent">
                <IconView icon={Icon::Check} class={classes!("request-sent-icon")} />
                <h3>{"Request Sent"}</h3>
                <p>{format!("We'll confirm availability for {} shortly.", widget.date_range_label())}</p>
                <button class="btn-outline" onclick={dispatch(BookingAction::Reset)}>
                    {"Back to booking"}
                </button>
            </div>
        },
    };

    html! {
        <div class="booking-panel">
            <div class="price-header">
                <span class="field-label">{"Total Price"}</span>
                <span class="price">{"€1,099"}</span>
                <span class="badge">{"Selling Fast"}</span>
            </div>
            {date_selector}
            {body}
            {if let Some(error) = &booking.last_error {
                html! { <div class="error-message">{error.to_string()}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_request_form(booking: &UseReducerHandle<BookingModel>, form: &FormRequest, submitting: bool) -> Html {
    let on_input = |make: fn(String) -> FormEdit| {
        let booking = booking.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            booking.dispatch(BookingAction::Edit(make(input.value())));
        })
    };

    let on_guests = {
        let booking = booking.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(guests) = input.value().trim().parse::<u32>() {
                booking.dispatch(BookingAction::Edit(FormEdit::Guests(guests)));
            }
        })
    };

    let on_message = {
        let booking = booking.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            booking.dispatch(BookingAction::Edit(FormEdit::Message(textarea.value())));
        })
    };

    let on_submit = {
        let booking = booking.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            booking.dispatch(BookingAction::Submit);
        })
    };

    let on_cancel = {
        let booking = booking.clone();
        Callback::from(move |_: MouseEvent| booking.dispatch(BookingAction::CancelRequestForm))
    };

    let config = booking.widget.config();

    html! {
        <form class="request-form" onsubmit={on_submit}>
            <div class="form-group">
                <label>{"Full Name"}</label>
                <input type="text" placeholder="John Doe" required=true disabled={submitting}
                    value={form.full_name.clone()} oninput={on_input(FormEdit::FullName)} />
            </div>
            <div class="form-group">
                <label>{"Email Address"}</label>
                <input type="email" placeholder="john@example.com" required=true disabled={submitting}
                    value={form.email.clone()} oninput={on_input(FormEdit::Email)} />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label>{"Phone"}</label>
                    <input type="tel" placeholder="+39 ..." required=true disabled={submitting}
                        value={form.phone.clone()} oninput={on_input(FormEdit::Phone)} />
                </div>
                <div class="form-group">
                    <label>{"Guests"}</label>
                    <input type="number" required=true disabled={submitting}
                        min={config.min_guests.to_string()} max={config.max_guests.to_string()}
                        value={form.guest_count.to_string()} oninput={on_guests} />
                </div>
            </div>
            <div class="form-group">
                <label>{"Message (Optional)"}</label>
                <textarea rows="3" placeholder="Any dietary requirements or special requests?" disabled={submitting}
                    value={form.message.clone()} oninput={on_message} />
            </div>
            <div class="form-actions">
                <button type="button" class="btn-outline" disabled={submitting} onclick={on_cancel}>
                    {"Cancel"}
                </button>
                <button type="submit" class="btn-primary" disabled={submitting}>
                    {if submitting { "Sending..." } else { "Send Request" }}
                </button>
            </div>
        </form>
    }
}
