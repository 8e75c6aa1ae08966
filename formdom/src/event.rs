/// Page events, each targeted at an element ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The value of an input changed (fired per keystroke).
    Input { target: String, value: String },
    /// A form is about to be submitted.
    Submit { target: String },
}

impl Event {
    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }
}
