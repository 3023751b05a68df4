use api::prefs::status_prefs::StatusPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: StatusPrefs,
}

/// Stable, non-reactive application state, cheap to clone into context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: StatusPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}
