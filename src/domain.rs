/// A device or area changing state, e.g. `door` becoming `open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub label: String,
    pub state: String,
    /// Seconds spent in the previous state, if known.
    pub duration: Option<String>,
}

impl StateChange {
    pub fn new(label: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: state.into(),
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn duration_str(&self) -> &str {
        self.duration.as_deref().unwrap_or("")
    }
}
