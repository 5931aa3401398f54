use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Route behind a hero call-to-action link.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        Self::recognize(href).unwrap_or(Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use helpmap_core::UserSession;
    use yew_router::Routable;

    #[test]
    fn paths_round_trip() {
        for route in [Route::Home, Route::Login, Route::Register, Route::Profile] {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn call_to_action_targets_are_routes() {
        assert_eq!(Route::from_href(UserSession::call_to_action(None).href), Route::Register);
        let session = UserSession {
            username: "aigerim".into(),
            role: None,
            user_id: None,
        };
        assert_eq!(
            Route::from_href(UserSession::call_to_action(Some(&session)).href),
            Route::Profile
        );
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::from_href("/profile.html"), Route::NotFound);
    }
}
