use helpmap_core::DEFAULT_PARALLAX_SPEED;
#[cfg(target_arch = "wasm32")]
use helpmap_core::parallax_offset;

use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(DEFAULT_PARALLAX_SPEED)]
    pub speed: f64,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Layer that drifts vertically as the page scrolls past it.
#[f::function_component(Parallax)]
pub fn parallax(p: &Props) -> f::Html {
    let node = f::use_node_ref();
    let shift = yew::use_state_eq(|| None::<f64>);

    #[cfg(target_arch = "wasm32")]
    {
        let node = node.clone();
        let shift = shift.clone();
        f::use_effect_with(p.speed.to_bits(), move |bits| {
            let speed = f64::from_bits(*bits);
            let listener = crate::dom::WindowListener::new("scroll", move || {
                let Some(element) = node.cast::<web_sys::Element>() else {
                    return;
                };
                let scroll_y = crate::dom::scroll_offset();
                let top = element.get_bounding_client_rect().top() + scroll_y;
                let viewport = crate::dom::window()
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                shift.set(parallax_offset(scroll_y, top, viewport, speed));
            });
            move || drop(listener)
        });
    }

    let class = f::class_list(&["parallax"], &p.class);
    let style = shift.map(|px| format!("transform: translateY({px}px);"));
    f::html! {
        <div ref={node} {class} {style}>
            { for p.children.iter() }
        </div>
    }
}
