use crate::components::NavLink;
use crate::components::foundation as f;
use crate::router::Route;

#[f::function_component(NotFound)]
pub fn not_found() -> f::Html {
    f::html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you were looking for does not exist." }</p>
            <NavLink to={Route::Home} class="btn">{ "Back to home" }</NavLink>
        </section>
    }
}
