#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The scoring request failed in any way.
    Connection,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Connection => "Connection Error. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

