use helpmap_core::api::types::AuthSession;
use helpmap_core::{ApiCall, AuthApi, ToastKind, UserRole, UserSession};
use yew_router::prelude::use_navigator;

use crate::api;
use crate::components::foundation as f;
use crate::components::foundation::TargetCast;
use crate::components::{NavLink, ToastAction, ToastContext};
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Create an account",
        }
    }

    /// The other form, offered as a link under this one.
    #[must_use]
    pub const fn alternative(self) -> (Route, &'static str) {
        match self {
            Self::Login => (Route::Register, "No account yet? Register"),
            Self::Register => (Route::Login, "Already registered? Log in"),
        }
    }
}

/// Field values of the login/registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: UserRole::Volunteer,
        }
    }
}

impl Credentials {
    /// Backend call for `mode`, or `None` while a field is blank.
    #[must_use]
    pub fn call(&self, mode: AuthMode) -> Option<ApiCall<AuthSession>> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return None;
        }
        Some(match mode {
            AuthMode::Login => AuthApi::login(username, &self.password),
            AuthMode::Register => AuthApi::register(username, &self.password, self.role.as_str()),
        })
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: AuthMode,
    pub on_session: f::Callback<UserSession>,
}

#[f::function_component(AuthForm)]
pub fn auth_form(p: &Props) -> f::Html {
    let fields = f::use_state(Credentials::default);
    let busy = f::use_state(|| false);
    let error = f::use_state(|| None::<String>);
    let toasts = f::use_context::<ToastContext>();
    let navigator = use_navigator();

    let on_username = {
        let fields = fields.clone();
        f::Callback::from(move |e: f::InputEvent| {
            let input: f::HtmlInputElement = e.target_unchecked_into();
            fields.set(Credentials {
                username: input.value(),
                ..(*fields).clone()
            });
        })
    };
    let on_password = {
        let fields = fields.clone();
        f::Callback::from(move |e: f::InputEvent| {
            let input: f::HtmlInputElement = e.target_unchecked_into();
            fields.set(Credentials {
                password: input.value(),
                ..(*fields).clone()
            });
        })
    };
    let on_role = {
        let fields = fields.clone();
        f::Callback::from(move |e: f::Event| {
            let select: f::HtmlSelectElement = e.target_unchecked_into();
            fields.set(Credentials {
                role: UserRole::parse(&select.value()),
                ..(*fields).clone()
            });
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let busy = busy.clone();
        let error = error.clone();
        let mode = p.mode;
        let on_session = p.on_session.clone();
        f::Callback::from(move |e: f::SubmitEvent| {
            e.prevent_default();
            let Some(call) = fields.call(mode) else {
                error.set(Some("Please fill in all fields!".to_string()));
                return;
            };
            error.set(None);
            busy.set(true);
            let busy = busy.clone();
            let error = error.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let on_session = on_session.clone();
            api::spawn(call, move |result| {
                busy.set(false);
                match result {
                    Ok(auth) => {
                        let session = UserSession::from_auth(&auth);
                        log::info!("signed in as {}", session.username);
                        if let Some(toasts) = &toasts {
                            let greeting = auth
                                .message
                                .unwrap_or_else(|| format!("Welcome, {}!", session.username));
                            toasts.dispatch(ToastAction::Show(greeting, ToastKind::Success));
                        }
                        on_session.emit(session);
                        if let Some(nav) = navigator {
                            nav.push(&Route::Profile);
                        }
                    }
                    Err(err) => {
                        api::report_failure("authentication", &err, toasts.as_ref());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let (alt_route, alt_label) = p.mode.alternative();
    f::html! {
        <main id="main" class="auth-page">
            <form class="auth-form" {onsubmit}>
                <h1>{ p.mode.title() }</h1>
                <label for="username">{ "Username" }</label>
                <input id="username" type="text" autocomplete="username" value={fields.username.clone()} oninput={on_username} />
                <label for="password">{ "Password" }</label>
                <input id="password" type="password" value={fields.password.clone()} oninput={on_password} />
                if p.mode == AuthMode::Register {
                    <label for="role">{ "I want to" }</label>
                    <select id="role" onchange={on_role}>
                        <option value="volunteer" selected={fields.role == UserRole::Volunteer}>{ "Volunteer" }</option>
                        <option value="help" selected={fields.role == UserRole::Help}>{ "Ask for help" }</option>
                    </select>
                }
                if let Some(message) = &*error {
                    <p class="form-error" role="alert">{ message.clone() }</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*busy}>{ p.mode.title() }</button>
                <NavLink to={alt_route} class="auth-switch">{ alt_label }</NavLink>
            </form>
        </main>
    }
}
