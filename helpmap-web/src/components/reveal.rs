//! Scroll-triggered entrance animations.
//!
//! Elements start hidden and gain `in-view` once they intersect the
//! viewport. Each element is observed only until its first entrance.
//! Browsers without `IntersectionObserver` reveal everything immediately.

use helpmap_core::{
    AnimationKind, DEFAULT_STAGGER_MS, IN_VIEW_CLASS, ObserverOptions, stagger_delay_ms,
};

use crate::components::foundation as f;

/// Where an observed element stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not yet seen, or not rendered in a browser.
    Pending,
    /// Has intersected the viewport at least once.
    Entered,
    /// The browser cannot observe intersections.
    Unsupported,
}

impl Visibility {
    #[must_use]
    pub const fn is_shown(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Track when `node` first scrolls into view.
#[yew::hook]
pub fn use_in_view(node: f::NodeRef, options: ObserverOptions) -> Visibility {
    let visibility = yew::use_state_eq(|| Visibility::Pending);

    #[cfg(target_arch = "wasm32")]
    {
        let visibility = visibility.clone();
        f::use_effect_with(node, move |node| {
            let observed = observe_once(node, options, visibility);
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (node, options);
    }

    *visibility
}

#[cfg(target_arch = "wasm32")]
type EntryCallback = f::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(target_arch = "wasm32")]
fn observe_once(
    node: &f::NodeRef,
    options: ObserverOptions,
    visibility: yew::UseStateHandle<Visibility>,
) -> Option<(web_sys::IntersectionObserver, EntryCallback)> {
    use f::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    if !crate::dom::supports_intersection_observer() {
        visibility.set(Visibility::Unsupported);
        return None;
    }
    let element = node.cast::<web_sys::Element>()?;
    let callback: EntryCallback = f::Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    visibility.set(Visibility::Entered);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let init = IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!(
                    "IntersectionObserver rejected: {}",
                    crate::dom::js_error_message(&err)
                );
                visibility.set(Visibility::Unsupported);
                return None;
            }
        };
    observer.observe(&element);
    Some((observer, callback))
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    /// Named entrance animation; plain sections use the generic reveal.
    #[prop_or_default]
    pub kind: Option<AnimationKind>,
    /// Position within a staggered group.
    #[prop_or_default]
    pub order: u32,
    #[prop_or(DEFAULT_STAGGER_MS)]
    pub stagger_ms: u32,
    /// Class held while the pointer is over the element.
    #[prop_or_default]
    pub hover_class: Option<f::AttrValue>,
    /// Class added on click and removed after a second.
    #[prop_or_default]
    pub click_class: Option<f::AttrValue>,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Reveal)]
pub fn reveal(p: &Props) -> f::Html {
    let node = f::use_node_ref();
    let options = if p.kind.is_some() {
        ObserverOptions::ANIMATION
    } else {
        ObserverOptions::REVEAL
    };
    let visibility = use_in_view(node.clone(), options);
    let hovered = f::use_state(|| false);
    let clicked = f::use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        f::Callback::from(move |_: f::MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        f::Callback::from(move |_: f::MouseEvent| hovered.set(false))
    };
    let onclick = {
        let clicked = clicked.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            clicked.set(true);
            #[cfg(target_arch = "wasm32")]
            {
                let clicked = clicked.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let delay = i32::try_from(helpmap_core::CLICK_ANIMATION_MS).unwrap_or(i32::MAX);
                    if crate::dom::sleep_ms(delay).await.is_ok() {
                        clicked.set(false);
                    }
                });
            }
        })
    };

    let mut class = f::class_list(&[], &p.class);
    match p.kind {
        Some(kind) => class.push(kind.class()),
        None => class.push("animate-on-scroll"),
    }
    if visibility.is_shown() {
        class.push(IN_VIEW_CLASS);
    }
    if *hovered && let Some(hover) = &p.hover_class {
        class.push(hover.to_string());
    }
    if *clicked && let Some(click) = &p.click_class {
        class.push(click.to_string());
    }
    let delay = stagger_delay_ms(p.order, p.stagger_ms);
    let style = (delay > 0).then(|| format!("animation-delay: {delay}ms;"));

    f::html! {
        <div ref={node} id={p.id.clone()} {class} {style} {onmouseenter} {onmouseleave} {onclick}>
            { for p.children.iter() }
        </div>
    }
}
