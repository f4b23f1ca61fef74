//! Session context: who is signed in and which theme is active.
//!
//! Loaded from the local store at launch, mutated by login, logout and theme
//! toggles, and passed explicitly to whichever screen needs it.

pub mod store;

use tracing::{info, warn};

use crate::api_client::ResumeApi;
use crate::errors::AppError;
use crate::models::user::User;
use crate::validation::{validate_login, validate_registration};
use store::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown stored values fall back to light.
    pub fn parse(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct AppSession<S> {
    store: S,
    token: Option<String>,
    user: Option<User>,
    theme: Theme,
    loading: bool,
}

impl<S: KeyValueStore> AppSession<S> {
    /// Reads the theme preference. The session starts signed out and loading
    /// until `restore` has run.
    ///
    /// An unreadable store is treated as empty: light theme, signed out.
    pub fn open(store: S) -> Result<Self, AppError> {
        let theme = read_or_empty(&store, THEME_KEY)
            .map(|t| Theme::parse(&t))
            .unwrap_or_default();

        Ok(Self {
            store,
            token: None,
            user: None,
            theme,
            loading: true,
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Adopts a stored token once the profile behind it has been fetched.
    ///
    /// A token whose profile cannot be loaded is not adopted; the error is
    /// returned for the caller to show. `loading` is cleared either way.
    pub async fn restore(&mut self, api: &dyn ResumeApi) -> Result<(), AppError> {
        let result = self.fetch_profile(api).await;
        self.loading = false;
        result
    }

    async fn fetch_profile(&mut self, api: &dyn ResumeApi) -> Result<(), AppError> {
        let Some(token) = read_or_empty(&self.store, TOKEN_KEY) else {
            return Ok(());
        };

        match api.profile(&token).await {
            Ok(user) => {
                info!(username = %user.username, "Session restored");
                self.user = Some(user);
                self.token = Some(token);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to fetch user data: {e}");
                Err(e)
            }
        }
    }

    pub async fn login(
        &mut self,
        api: &dyn ResumeApi,
        username: &str,
        password: &str,
    ) -> Result<(), AppError> {
        validate_login(username, password)?;

        let token = api.login(username, password).await?;
        self.store.set(TOKEN_KEY, &token)?;
        info!(username, "Logged in");

        self.restore(api).await
    }

    /// Creates an account. The user still has to log in afterwards.
    pub async fn register(
        &self,
        api: &dyn ResumeApi,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AppError> {
        validate_registration(username, password, confirm_password)?;
        api.register(username, password).await?;
        info!(username, "Account created");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.user = None;
        self.token = None;
        self.store.remove(TOKEN_KEY)?;
        info!("Logged out");
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str())?;
        info!(theme = self.theme.as_str(), "Theme changed");
        Ok(self.theme)
    }
}

fn read_or_empty<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).unwrap_or_else(|e| {
        warn!(key, "Local store unreadable, treating as empty: {e}");
        None
    })
}
