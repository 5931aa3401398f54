use yew_router::prelude::{Routable, use_navigator};

use crate::components::foundation as f;
use crate::router::Route;

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub to: Route,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub style: Option<f::AttrValue>,
    #[prop_or_default]
    pub children: f::Children,
}

/// Anchor that navigates in-app when a router is mounted and falls back to
/// a plain link otherwise (server rendering, tests).
#[f::function_component(NavLink)]
pub fn nav_link(p: &Props) -> f::Html {
    let navigator = use_navigator();
    let onclick = {
        let to = p.to.clone();
        f::Callback::from(move |e: f::MouseEvent| {
            if let Some(nav) = &navigator {
                e.prevent_default();
                nav.push(&to);
            }
        })
    };
    f::html! {
        <a href={p.to.to_path()} id={p.id.clone()} class={p.class.clone()} style={p.style.clone()} {onclick}>
            { for p.children.iter() }
        </a>
    }
}
