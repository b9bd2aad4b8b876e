/// The observable state of a value produced in the background.
#[derive(Debug)]
pub enum Promise<T> {
    /// The value has arrived.
    Resolved(T),
    /// The value is still being produced.
    Pending,
}

impl<T> Promise<T> {
    /// Whether the value has not arrived yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The value, when it has arrived.
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Pending => None,
        }
    }
}
