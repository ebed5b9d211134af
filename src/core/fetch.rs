/// The `(loading, data, error)` triple each fetch-driven view owns.
///
/// `loading` is true only between [`FetchState::start`] and the matching
/// [`FetchState::succeed`] / [`FetchState::fail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState<T> {
    loading: bool,
    data: T,
    error: Option<String>,
}

/// What a view should draw for a given [`FetchState`].
#[derive(Debug, PartialEq, Eq)]
pub enum Phase<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a T),
}

impl<T: Default> Default for FetchState<T> {
    /// Views start out loading, as they fetch on mount.
    fn default() -> Self {
        Self {
            loading: true,
            data: T::default(),
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = data;
        self.error = None;
        self.loading = false;
    }

    /// Records a fixed user-facing message. Previously loaded data is kept.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn phase(&self) -> Phase<'_, T> {
        if self.loading {
            Phase::Loading
        } else if let Some(error) = &self.error {
            Phase::Failed(error)
        } else {
            Phase::Ready(&self.data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_previous_data() {
        let mut state: FetchState<Vec<u32>> = FetchState::default();
        state.succeed(vec![1, 2]);
        state.start();
        assert_eq!(state.phase(), Phase::Loading);
        state.fail("boom");
        assert_eq!(state.phase(), Phase::Failed("boom"));
        assert_eq!(state.data(), &vec![1, 2]);
    }

    #[test]
    fn start_clears_error() {
        let mut state: FetchState<Option<u32>> = FetchState::default();
        state.fail("boom");
        state.start();
        assert!(state.error().is_none());
        state.succeed(Some(3));
        assert_eq!(state.phase(), Phase::Ready(&Some(3)));
    }
}
