// Display state for the signal dashboard and its transitions
use crate::ism_models::{DurationInputError, ISMModels, SignalRecord};

/// Everything an event can do to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    FetchRequested,
    FetchSucceeded(Vec<SignalRecord>),
    FetchFailed(String),
    DurationUpdateSubmitted(u64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    pub records: Vec<SignalRecord>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl DisplayState {
    /// `(state, event) -> state`. No I/O happens here.
    pub fn apply(self, event: DisplayEvent) -> DisplayState {
        match event {
            DisplayEvent::FetchRequested => DisplayState {
                is_loading: true,
                error_message: None,
                ..self
            },
            DisplayEvent::FetchSucceeded(records) => DisplayState {
                records,
                is_loading: false,
                error_message: None,
            },
            // keep last-known-good records on screen
            DisplayEvent::FetchFailed(message) => DisplayState {
                is_loading: false,
                error_message: Some(message),
                ..self
            },
            DisplayEvent::DurationUpdateSubmitted(duration) => DisplayState {
                records: ISMModels::bulk_update_durations(&self.records, duration),
                ..self
            },
        }
    }

    /// Validate raw user input, then apply the bulk update. A rejected input
    /// never reaches the transition.
    pub fn submit_duration_input(&self, input: &str) -> Result<DisplayState, DurationInputError> {
        let duration = ISMModels::parse_duration_input(input)?;
        Ok(self.clone().apply(DisplayEvent::DurationUpdateSubmitted(duration)))
    }

    /// Records whose direction is one of the four cardinal sensors.
    pub fn visible_records(&self) -> Vec<&SignalRecord> {
        self.records
            .iter()
            .filter(|r| r.required_direction().is_some())
            .collect()
    }
}
