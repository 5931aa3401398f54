pub mod auth;
pub mod home;
pub mod not_found;
pub mod profile;

pub use auth::{AuthForm, AuthMode};
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;

/// Progress of a backend fetch driving part of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> From<Result<T, helpmap_core::ApiError>> for Load<T> {
    fn from(result: Result<T, helpmap_core::ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}
