//! Departure calendar logic for the booking widget.
//!
//! Builds the month grid the date selector renders. Day classification
//! (selected, inside the trip, recommended departure) is decided here so
//! the UI only maps flags to styles.

use shared::{BookingConfig, CalendarCell, CalendarDayType, CalendarMonth};

/// Generate the departure grid for the configured month.
///
/// The grid holds exactly `start_day_offset` padding cells followed by one
/// cell per day of the month; there is no trailing padding.
pub fn build_calendar_month(config: &BookingConfig, selected_day: u32) -> CalendarMonth {
    log::debug!(
        "🗓️ Building departure grid for {} (days: {}, offset: {}, selected: {})",
        config.month_label,
        config.days_in_month,
        config.start_day_offset,
        selected_day
    );

    let mut cells = Vec::with_capacity((config.start_day_offset + config.days_in_month) as usize);
    cells.extend((0..config.start_day_offset).map(|_| CalendarCell::padding()));

    for day in 1..=config.days_in_month {
        cells.push(CalendarCell {
            day,
            day_type: CalendarDayType::MonthDay,
            is_selected: day == selected_day,
            in_range: is_in_trip_range(day, selected_day, config.trip_duration_days),
            is_preferred_departure: is_preferred_departure(config, day),
        });
    }

    CalendarMonth {
        label: config.month_label.clone(),
        days_in_month: config.days_in_month,
        first_day_of_week: config.start_day_offset,
        cells,
    }
}

/// Day lies after departure and on or before the return day
pub fn is_in_trip_range(day: u32, selected_day: u32, trip_duration_days: u32) -> bool {
    day > selected_day && day <= selected_day.saturating_add(trip_duration_days)
}

/// Day falls on the recommended departure weekday. Advisory only unless
/// `restrict_to_preferred_departures` is set.
pub fn is_preferred_departure(config: &BookingConfig, day: u32) -> bool {
    config.weekday_of(day) == config.preferred_departure_weekday
}
