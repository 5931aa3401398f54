use helpmap_core::Disclosure;

use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    pub children: f::Children,
}

/// "More..." / "Hide" toggle for an extra block of text.
#[f::function_component(DetailsToggle)]
pub fn details_toggle(p: &Props) -> f::Html {
    let state = f::use_state(Disclosure::default);
    let onclick = {
        let state = state.clone();
        f::Callback::from(move |_: f::MouseEvent| state.set(state.toggled()))
    };
    let style = format!("display: {};", state.display());
    f::html! {
        <div class="details-toggle">
            <div id={p.id.clone()} class="more-text" {style}>
                { for p.children.iter() }
            </div>
            <button id="showDetailsBtn" class="toggle-button" aria-expanded={state.is_open().to_string()} {onclick}>
                { state.button_label() }
            </button>
        </div>
    }
}
