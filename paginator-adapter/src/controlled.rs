/// Observes a value the host may control from outside (a "controlled prop").
///
/// The owner keeps its own local state and calls [`Controlled::observe`] with the host's value
/// on every update. The local state is reset only when the host value actually changes, so
/// local edits survive re-renders that pass the same controlled value again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Controlled<T> {
    observed: Option<T>,
}

impl<T: Clone + PartialEq> Controlled<T> {
    pub fn new() -> Self {
        Self { observed: None }
    }

    /// Starts with `value` already observed (the initial state was built from it).
    pub fn with_initial(value: T) -> Self {
        Self {
            observed: Some(value),
        }
    }

    pub fn observed(&self) -> Option<&T> {
        self.observed.as_ref()
    }

    /// Records the host's current value.
    ///
    /// Returns `Some(value)` when it differs from the previously observed one; the owner should
    /// then reset its local state to it.
    pub fn observe(&mut self, value: T) -> Option<T> {
        if self.observed.as_ref() == Some(&value) {
            return None;
        }
        self.observed = Some(value.clone());
        Some(value)
    }

    /// Forgets the observed value, so the next `observe` always reports a change.
    pub fn reset(&mut self) {
        self.observed = None;
    }
}
