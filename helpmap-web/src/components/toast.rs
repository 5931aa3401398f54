use std::rc::Rc;

use helpmap_core::{Toast, ToastKind, ToastQueue};
use yew::{ContextProvider, Reducible, UseReducerDispatcher};

use crate::components::foundation as f;

pub enum ToastAction {
    Show(String, ToastKind),
    /// Show for a custom number of milliseconds.
    ShowFor(String, ToastKind, u32),
    Dismiss(u64),
}

#[derive(Debug, Default, PartialEq)]
pub struct ToastStore {
    pub queue: ToastQueue,
}

impl Reducible for ToastStore {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();
        match action {
            ToastAction::Show(message, kind) => {
                queue.push(message, kind);
            }
            ToastAction::ShowFor(message, kind, duration_ms) => {
                queue.push_for(message, kind, duration_ms);
            }
            ToastAction::Dismiss(id) => {
                queue.dismiss(id);
            }
        }
        Rc::new(Self { queue })
    }
}

/// Handle components use to raise toasts.
pub type ToastContext = UseReducerDispatcher<ToastStore>;

#[derive(f::Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_dismiss: f::Callback<u64>,
}

/// One toast. Its dismissal timer starts when it is first shown.
#[f::function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> f::Html {
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.toast.duration_ms;
        f::use_effect_with(id, move |id| {
            #[cfg(target_arch = "wasm32")]
            {
                let id = *id;
                let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
                wasm_bindgen_futures::spawn_local(async move {
                    if crate::dom::sleep_ms(timeout).await.is_ok() {
                        on_dismiss.emit(id);
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (id, on_dismiss, duration_ms);
            }
            || {}
        });
    }
    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        f::Callback::from(move |_: f::MouseEvent| on_dismiss.emit(id))
    };
    let kind = props.toast.kind;
    f::html! {
        <div class={kind.class()} style={kind.style()} onclick={on_click}>
            { props.toast.message.clone() }
        </div>
    }
}

#[derive(f::Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: f::Children,
}

/// Provides [`ToastContext`] to its children and renders the visible toasts.
#[f::function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> f::Html {
    let store = f::use_reducer(ToastStore::default);
    let dispatcher = store.dispatcher();
    let on_dismiss = {
        let dispatcher = dispatcher.clone();
        f::Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };
    f::html! {
        <ContextProvider<ToastContext> context={dispatcher}>
            { for props.children.iter() }
            <div class="toast-stack" role="status" aria-live="polite">
                { for store.queue.toasts().iter().map(|toast| f::html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}
