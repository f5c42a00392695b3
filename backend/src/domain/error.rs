use shared::{RequiredField, UiState};

/// Reasons a booking or contact interaction is refused. A refused action
/// never changes state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("date selector is inactive while {0}")]
    CalendarLocked(UiState),

    #[error("cannot {action} while {state}")]
    InvalidTransition { state: UiState, action: &'static str },

    #[error("day {day} is outside 1..={days_in_month}")]
    DayOutOfRange { day: u32, days_in_month: u32 },

    #[error("day {0} is not a departure day")]
    NotPreferredDeparture(u32),

    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),

    #[error("invalid {0}")]
    InvalidField(RequiredField),

    #[error("submission is no longer pending")]
    StaleSubmission,

    #[error("no async runtime to run the submission timer")]
    NoRuntime,
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BookingError::MissingFields(vec![RequiredField::FullName, RequiredField::Phone]);
        assert_eq!(err.to_string(), "missing required fields: full name, phone");

        let err = BookingError::InvalidTransition { state: UiState::Submitted, action: "submit" };
        assert_eq!(err.to_string(), "cannot submit while Submitted");
    }
}
