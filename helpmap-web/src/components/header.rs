use helpmap_core::{ThemeMode, UserSession};

use crate::components::foundation as f;
use crate::components::nav_link::NavLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::router::Route;

/// In-page sections reachable from the navigation bar.
pub const SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("news", "News"),
    ("stats", "Impact"),
    ("contact", "Contact"),
];

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Option<UserSession>,
    pub mode: ThemeMode,
    pub on_toggle_theme: f::Callback<ThemeMode>,
}

#[f::function_component(Header)]
pub fn header(p: &Props) -> f::Html {
    let logged_in = p.session.is_some();
    let profile_text = p
        .session
        .as_ref()
        .map(UserSession::profile_label)
        .unwrap_or_default();
    let login_style = f::AttrValue::from(format!(
        "display: {};",
        f::display(!logged_in, "inline-block")
    ));
    let profile_style = f::AttrValue::from(format!(
        "display: {};",
        f::display(logged_in, "inline-block")
    ));

    f::html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <NavLink to={Route::Home} class="logo">
                    <img src={crate::paths::asset_path("img/logo.svg")} alt="" width="32" height="32" />
                    { "HelpMap" }
                </NavLink>
                <nav aria-label="Sections" class="header-nav">
                    { for SECTIONS.iter().map(|(id, label)| section_link(id, label)) }
                </nav>
                <div class="header-right">
                    <NavLink to={Route::Login} id="userLoginTrigger" class="login-trigger" style={login_style}>
                        <i class="fas fa-user"></i>{ " Log in" }
                    </NavLink>
                    <NavLink to={Route::Profile} id="profileLink" class="profile-link" style={profile_style}>
                        { profile_text }
                    </NavLink>
                    <ThemeToggle mode={p.mode} on_toggle={p.on_toggle_theme.clone()} />
                </div>
            </div>
        </header>
    }
}

/// Anchor that glides to a section instead of jumping.
fn section_link(id: &'static str, label: &'static str) -> f::Html {
    let onclick = f::Callback::from(move |e: f::MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        if let Some(target) = crate::dom::section_top(id) {
            e.prevent_default();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) =
                    crate::dom::smooth_scroll_to(target, helpmap_core::SMOOTH_SCROLL_MS).await
                {
                    log::warn!(
                        "smooth scroll to #{id} failed: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (e, id);
    });
    f::html! {
        <a href={format!("#{id}")} {onclick}>{ label }</a>
    }
}
