use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use chrono::{Datelike, NaiveDate};

/// Fixed trip length added to the departure day to get the return day
pub const TRIP_DURATION_DAYS: u32 = 7;

/// Calendar header labels, Sunday first
/// Longest trip a booking config may describe
pub const MAX_TRIP_DURATION_DAYS: u32 = 31;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Top-level page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Experience,
    About,
    Contact,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Experience, View::About, View::Contact];

    /// Identifier used by navigation controls ("home", "experience", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Experience => "experience",
            View::About => "about",
            View::Contact => "contact",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a navigation target is not one of the four known views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view identifier: {:?}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(View::Home),
            "experience" => Ok(View::Experience),
            "about" => Ok(View::About),
            "contact" => Ok(View::Contact),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// Visible mode of the booking widget. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiState {
    Idle,
    CalendarOpen,
    RequestFormOpen,
    Submitting,
    Submitted,
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UiState::Idle => "Idle",
            UiState::CalendarOpen => "CalendarOpen",
            UiState::RequestFormOpen => "RequestFormOpen",
            UiState::Submitting => "Submitting",
            UiState::Submitted => "Submitted",
        };
        f.write_str(name)
    }
}

/// The chosen departure and the fixed trip length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    /// Departure day-of-month, always within 1..=days_in_month
    pub selected_day: u32,
    pub trip_duration_days: u32,
}

impl BookingSelection {
    /// Return day, not clamped to the month length
    pub fn return_day(&self) -> u32 {
        self.selected_day.saturating_add(self.trip_duration_days)
    }

    /// Label shown on the date selector button, e.g. "15 Jun - 22 Jun"
    pub fn range_label(&self, month_abbreviation: &str) -> String {
        format!(
            "{} {} - {} {}",
            self.selected_day,
            month_abbreviation,
            self.return_day(),
            month_abbreviation
        )
    }
}

/// Availability request entered on the experience page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Number of travellers (1..=12)
    pub guest_count: u32,
    /// Dietary requirements or special requests
    pub message: String,
}

impl FormRequest {
    pub fn with_guests(guest_count: u32) -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            guest_count,
            message: String::new(),
        }
    }
}

impl Default for FormRequest {
    fn default() -> Self {
        Self::with_guests(2)
    }
}

/// Message entered on the contact page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// Optional on the contact page
    pub phone: String,
    pub message: String,
}

/// Form fields that can block a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredField {
    FullName,
    Name,
    Email,
    Phone,
    Message,
    GuestCount,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequiredField::FullName => "full name",
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::Message => "message",
            RequiredField::GuestCount => "guests",
        };
        f.write_str(label)
    }
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Blank cell before day 1
    Padding,
    /// Actual day within the month
    MonthDay,
}

/// A single cell of the departure calendar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_selected: bool,
    /// Day falls inside the trip (after departure, up to and including return)
    pub in_range: bool,
    /// Cosmetic "recommended departure" marking
    pub is_preferred_departure: bool,
}

impl CalendarCell {
    pub fn padding() -> Self {
        Self {
            day: 0,
            day_type: CalendarDayType::Padding,
            is_selected: false,
            in_range: false,
            is_preferred_departure: false,
        }
    }
}

/// Departure calendar for one month, without trailing padding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarMonth {
    pub label: String,
    pub days_in_month: u32,
    pub first_day_of_week: u32, // 0 = Sunday, 6 = Saturday
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    /// Cells grouped into 7-wide rows; the last row may be shorter
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn month_days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|c| c.day_type == CalendarDayType::MonthDay)
    }
}

/// Configuration for the booking widget on the experience page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Calendar header, e.g. "June 2024"
    pub month_label: String,
    /// Short month name used in the date range label
    pub month_abbreviation: String,
    pub days_in_month: u32,
    /// Weekday index of day 1 (0 = Sunday)
    pub start_day_offset: u32,
    pub default_departure_day: u32,
    pub trip_duration_days: u32,
    /// Weekday highlighted as the recommended departure (6 = Saturday)
    pub preferred_departure_weekday: u32,
    /// Reject departures on any other weekday
    pub restrict_to_preferred_departures: bool,
    pub submission_delay_ms: u64,
    pub min_guests: u32,
    pub max_guests: u32,
    pub default_guests: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            month_label: "June 2024".to_string(),
            month_abbreviation: "Jun".to_string(),
            days_in_month: 30,
            start_day_offset: 6, // June 1st 2024 is a Saturday
            default_departure_day: 15,
            trip_duration_days: TRIP_DURATION_DAYS,
            preferred_departure_weekday: 6,
            restrict_to_preferred_departures: false,
            submission_delay_ms: 500,
            min_guests: 1,
            max_guests: 12,
            default_guests: 2,
        }
    }
}

impl BookingConfig {
    /// Build a config for a real calendar month, keeping the other defaults
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let days_in_month = (next_first - first).num_days() as u32;
        let defaults = Self::default();

        Some(Self {
            month_label: format!("{} {}", month_name(month), year),
            month_abbreviation: month_name(month).chars().take(3).collect(),
            days_in_month,
            start_day_offset: first.weekday().num_days_from_sunday(),
            default_departure_day: defaults.default_departure_day.min(days_in_month),
            ..defaults
        })
    }

    /// Weekday index (0 = Sunday) of a day in this month
    pub fn weekday_of(&self, day: u32) -> u32 {
        (day % 7 + self.start_day_offset % 7 + 6) % 7
    }

    /// Check the values the calendar and form arithmetic rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_day_offset > 6 {
            return Err(ConfigError::StartDayOffset(self.start_day_offset));
        }
        if !(28..=31).contains(&self.days_in_month) {
            return Err(ConfigError::DaysInMonth(self.days_in_month));
        }
        if !(1..=self.days_in_month).contains(&self.default_departure_day) {
            return Err(ConfigError::DefaultDepartureDay {
                day: self.default_departure_day,
                days_in_month: self.days_in_month,
            });
        }
        if !(1..=MAX_TRIP_DURATION_DAYS).contains(&self.trip_duration_days) {
            return Err(ConfigError::TripDuration(self.trip_duration_days));
        }
        if self.preferred_departure_weekday > 6 {
            return Err(ConfigError::PreferredWeekday(self.preferred_departure_weekday));
        }
        if self.min_guests == 0 || self.min_guests > self.max_guests {
            return Err(ConfigError::GuestRange {
                min: self.min_guests,
                max: self.max_guests,
            });
        }
        if !(self.min_guests..=self.max_guests).contains(&self.default_guests) {
            return Err(ConfigError::DefaultGuests(self.default_guests));
        }
        Ok(())
    }
}

/// Why a `BookingConfig` was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    StartDayOffset(u32),
    DaysInMonth(u32),
    DefaultDepartureDay { day: u32, days_in_month: u32 },
    TripDuration(u32),
    PreferredWeekday(u32),
    GuestRange { min: u32, max: u32 },
    DefaultGuests(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::StartDayOffset(offset) => write!(f, "start day offset {} is not a weekday index (0-6)", offset),
            ConfigError::DaysInMonth(days) => write!(f, "{} days is not a calendar month", days),
            ConfigError::DefaultDepartureDay { day, days_in_month } => {
                write!(f, "default departure day {} is outside 1..={}", day, days_in_month)
            }
            ConfigError::TripDuration(days) => {
                write!(f, "trip duration {} is outside 1..={}", days, MAX_TRIP_DURATION_DAYS)
            }
            ConfigError::PreferredWeekday(weekday) => write!(f, "preferred weekday {} is not a weekday index (0-6)", weekday),
            ConfigError::GuestRange { min, max } => write!(f, "invalid guest range {}..={}", min, max),
            ConfigError::DefaultGuests(guests) => write!(f, "default guest count {} is outside the guest range", guests),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for the contact page form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submission_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { submission_delay_ms: 1500 }
    }
}

/// Human-readable month name
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Icon identifiers; glyphs are resolved by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Calendar,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Sun,
    Users,
    MapPin,
    BarChart,
    Compass,
    Anchor,
    Sparkles,
    Heart,
    Mail,
    Phone,
    ArrowRight,
    Check,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::Calendar,
        Icon::ChevronDown,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Sun,
        Icon::Users,
        Icon::MapPin,
        Icon::BarChart,
        Icon::Compass,
        Icon::Anchor,
        Icon::Sparkles,
        Icon::Heart,
        Icon::Mail,
        Icon::Phone,
        Icon::ArrowRight,
        Icon::Check,
    ];
}

/// Kind of user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    AvailabilityRequested,
    MessageSent,
}

/// Message surfaced to the user after a submission completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn availability_requested() -> Self {
        Self {
            kind: NotificationKind::AvailabilityRequested,
            message: "Availability request sent! We will contact you shortly.".to_string(),
        }
    }

    pub fn message_sent() -> Self {
        Self {
            kind: NotificationKind::MessageSent,
            message: "Message received. We'll be in touch within 24 hours.".to_string(),
        }
    }
}
