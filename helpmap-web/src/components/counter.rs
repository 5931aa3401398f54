use helpmap_core::{COUNTER_OBSERVER, CounterAnimation};

use crate::components::foundation as f;
use crate::components::reveal::{Visibility, use_in_view};

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub target: u64,
    pub label: f::AttrValue,
    #[prop_or_default]
    pub suffix: Option<f::AttrValue>,
}

/// Statistic that counts up from zero the first time it is seen.
#[f::function_component(StatCounter)]
pub fn stat_counter(p: &Props) -> f::Html {
    let node = f::use_node_ref();
    let visibility = use_in_view(node.clone(), COUNTER_OBSERVER);
    let shown = yew::use_state_eq(|| 0_u64);

    {
        let shown = shown.clone();
        f::use_effect_with((visibility, p.target), move |(visibility, target)| {
            match visibility {
                Visibility::Unsupported => shown.set(*target),
                Visibility::Entered => animate(CounterAnimation::new(*target), shown),
                Visibility::Pending => {}
            }
            || {}
        });
    }

    f::html! {
        <div ref={node} class="stat-item">
            <span class="stat-number" data-target={p.target.to_string()}>
                { *shown }{ p.suffix.clone().unwrap_or_default() }
            </span>
            <span class="stat-label">{ p.label.clone() }</span>
        </div>
    }
}

fn animate(frames: CounterAnimation, shown: yew::UseStateHandle<u64>) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        let frame_ms = i32::try_from(helpmap_core::COUNTER_FRAME_MS).unwrap_or(i32::MAX);
        for value in frames {
            shown.set(value);
            if crate::dom::sleep_ms(frame_ms).await.is_err() {
                break;
            }
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    shown.set(frames.target());
}
