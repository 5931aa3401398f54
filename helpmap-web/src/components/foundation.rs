pub use wasm_bindgen::JsCast;
pub use wasm_bindgen::prelude::Closure;
pub use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent, SubmitEvent};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, NodeRef, Properties, html};
pub use yew::{use_context, use_effect_with, use_mut_ref, use_node_ref, use_reducer, use_state};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

/// Inline `display` toggle used by elements the page shows and hides.
#[must_use]
pub const fn display(visible: bool, shown_as: &'static str) -> &'static str {
    if visible { shown_as } else { "none" }
}

#[cfg(test)]
mod tests {
    use super::{class_list, display};
    use yew::Classes;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let rendered = class_list(&["carousel-container", "news"], &extra).to_string();
        assert!(rendered.contains("carousel-container"));
        assert!(rendered.contains("news"));
        assert!(rendered.contains("mx-1"));
    }

    #[test]
    fn display_hides_with_none() {
        assert_eq!(display(true, "inline"), "inline");
        assert_eq!(display(false, "inline"), "none");
    }
}
