#[cfg(target_arch = "wasm32")]
use helpmap_core::{ThemeMode, UserSession};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::{Header, ToastHost};
#[cfg(target_arch = "wasm32")]
use crate::pages::{AuthForm, AuthMode, Home, NotFound, Profile};
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::storage::BrowserStore;

/// Mirror `mode` onto the body so the stylesheet can switch palettes.
pub fn apply_theme(mode: helpmap_core::ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    crate::dom::set_body_class(helpmap_core::theme::DARK_MODE_CLASS, mode.is_dark());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = mode;
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let basename = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter {basename}>
            <ToastHost>
                <AppInner />
            </ToastHost>
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let mode = use_state(|| ThemeMode::load(&BrowserStore));
    let session = use_state(|| UserSession::load(&BrowserStore));

    use_effect_with(*mode, |mode| {
        apply_theme(*mode);
        || {}
    });

    let on_toggle_theme = {
        let mode = mode.clone();
        Callback::from(move |next: ThemeMode| {
            next.save(&mut BrowserStore);
            log::debug!("theme switched to {next}");
            mode.set(next);
        })
    };
    let on_session = {
        let session = session.clone();
        Callback::from(move |next: UserSession| {
            next.save(&mut BrowserStore);
            session.set(Some(next));
        })
    };
    let on_logout = {
        let session = session.clone();
        let navigator = use_navigator();
        Callback::from(move |()| {
            UserSession::clear(&mut BrowserStore);
            session.set(None);
            if let Some(nav) = &navigator {
                nav.push(&Route::Home);
            }
        })
    };

    let current = (*session).clone();
    let render = move |route: Route| match route {
        Route::Home => html! { <Home session={current.clone()} /> },
        Route::Login => {
            html! { <AuthForm mode={AuthMode::Login} on_session={on_session.clone()} /> }
        }
        Route::Register => {
            html! { <AuthForm mode={AuthMode::Register} on_session={on_session.clone()} /> }
        }
        Route::Profile => {
            html! { <Profile session={current.clone()} on_logout={on_logout.clone()} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <>
            <Header session={(*session).clone()} mode={*mode} {on_toggle_theme} />
            <Switch<Route> {render} />
        </>
    }
}
