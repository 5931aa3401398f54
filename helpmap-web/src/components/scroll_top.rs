#[cfg(target_arch = "wasm32")]
use helpmap_core::scroll_top_visible;

use crate::components::foundation as f;

/// Floating "back to top" button, shown past 200 px of scroll.
#[f::function_component(ScrollTopButton)]
pub fn scroll_top_button() -> f::Html {
    let visible = yew::use_state_eq(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let visible = visible.clone();
        f::use_effect_with((), move |()| {
            let listener = crate::dom::WindowListener::new("scroll", move || {
                visible.set(scroll_top_visible(crate::dom::scroll_offset()));
            });
            move || drop(listener)
        });
    }

    let onclick = f::Callback::from(|_: f::MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        crate::dom::scroll_to_top();
    });
    let style = format!("display: {};", f::display(*visible, "block"));
    f::html! {
        <button id="scrollToTopBtn" class="scroll-top" title="Back to top" {style} {onclick}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
