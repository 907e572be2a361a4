use services::AppServices;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub services: AppServices,
}

impl AppState {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }
}
