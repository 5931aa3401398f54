use futures::executor::block_on;
use helpmap_core::{UserRole, UserSession};
use helpmap_web::pages::{AuthForm, AuthMode, Home, NotFound, Profile};
use yew::{Callback, LocalServerRenderer};

fn volunteer() -> UserSession {
    UserSession {
        username: "aigerim".to_string(),
        role: Some(UserRole::Volunteer),
        user_id: None,
    }
}

#[test]
fn home_invites_visitors_to_register() {
    let props = helpmap_web::pages::home::Props { session: None };
    let html = block_on(LocalServerRenderer::<Home>::with_props(props).render());
    assert!(html.contains("registerBtn"));
    assert!(html.contains("Register as a volunteer"));
    assert!(html.contains(r#"href="/register""#));
    assert!(html.contains("newsCarouselTrack"));
    assert_eq!(html.matches(r#"class="indicator"#).count(), 9);
    assert!(html.contains("Loading requests..."));
    assert!(html.contains("Checking service..."));
    assert!(html.contains(r#"data-target="1250""#));
}

#[test]
fn home_sends_members_to_their_profile() {
    let props = helpmap_web::pages::home::Props {
        session: Some(volunteer()),
    };
    let html = block_on(LocalServerRenderer::<Home>::with_props(props).render());
    assert!(html.contains("Go to your profile"));
    assert!(html.contains(r#"href="/profile""#));
}

#[test]
fn login_form_has_no_role_picker() {
    let props = helpmap_web::pages::auth::Props {
        mode: AuthMode::Login,
        on_session: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AuthForm>::with_props(props).render());
    assert!(html.contains("Log in"));
    assert!(html.contains(r#"id="password""#));
    assert!(!html.contains(r#"id="role""#));
    assert!(html.contains(r#"href="/register""#));
}

#[test]
fn register_form_offers_roles() {
    let props = helpmap_web::pages::auth::Props {
        mode: AuthMode::Register,
        on_session: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AuthForm>::with_props(props).render());
    assert!(html.contains("Create an account"));
    assert!(html.contains(r#"id="role""#));
    assert!(html.contains(r#"value="help""#));
}

#[test]
fn profile_requires_a_session() {
    let props = helpmap_web::pages::profile::Props {
        session: None,
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Profile>::with_props(props).render());
    assert!(html.contains("You are not logged in."));
    assert!(html.contains(r#"href="/login""#));
}

#[test]
fn profile_shows_member_details() {
    let props = helpmap_web::pages::profile::Props {
        session: Some(volunteer()),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Profile>::with_props(props).render());
    assert!(html.contains("aigerim"));
    assert!(html.contains("Volunteer"));
    assert!(html.contains("Log out"));
}

#[test]
fn not_found_links_home() {
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"href="/""#));
}
