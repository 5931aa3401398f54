use helpmap_core::ThemeMode;

use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: ThemeMode,
    pub on_toggle: f::Callback<ThemeMode>,
}

/// Light/dark switch. Emits the mode to switch to; the caller persists it.
#[f::function_component(ThemeToggle)]
pub fn theme_toggle(p: &Props) -> f::Html {
    let onclick = {
        let next = p.mode.toggled();
        let cb = p.on_toggle.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(next))
    };
    f::html! {
        <button id="modeToggle" class="mode-toggle" aria-pressed={p.mode.is_dark().to_string()} {onclick}>
            <i class={p.mode.toggle_icon()}></i>
            <span class="mode-label">{ p.mode.toggle_label() }</span>
        </button>
    }
}
