use std::sync::Arc;

use crate::api_client::{HttpApiClient, ResumeApi};
use crate::config::Config;
use crate::opener::{ResourceOpener, SystemOpener};

/// Collaborators shared by every screen, passed explicitly rather than held globally.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote resume service. Default: `HttpApiClient`.
    pub api: Arc<dyn ResumeApi>,
    /// Where generated documents are shown. Default: `SystemOpener`.
    pub opener: Arc<dyn ResourceOpener>,
}

impl AppState {
    /// Production wiring: HTTP client against `config.api_base_url` and the platform opener.
    pub fn new(config: Config) -> Self {
        Self {
            api: Arc::new(HttpApiClient::new(config.clone())),
            opener: Arc::new(SystemOpener),
            config,
        }
    }

    pub fn with_collaborators(
        config: Config,
        api: Arc<dyn ResumeApi>,
        opener: Arc<dyn ResourceOpener>,
    ) -> Self {
        Self {
            config,
            api,
            opener,
        }
    }
}
