use helpmap_core::{FormOutcome, contact};

use crate::components::foundation as f;
use crate::components::foundation::TargetCast;

/// Request types offered by the demo form.
pub const REQUEST_TYPES: [(&str, &str); 4] = [
    ("food", "Food delivery"),
    ("medicine", "Medicine pickup"),
    ("transport", "Transport"),
    ("other", "Other"),
];

/// Demo request form. Validates and acknowledges; nothing leaves the page.
#[f::function_component(ContactForm)]
pub fn contact_form() -> f::Html {
    let draft = f::use_state(contact::ContactForm::default);
    let outcome = f::use_state(|| None::<FormOutcome>);

    let on_name = {
        let draft = draft.clone();
        f::Callback::from(move |e: f::InputEvent| {
            let input: f::HtmlInputElement = e.target_unchecked_into();
            draft.set(contact::ContactForm {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_type = {
        let draft = draft.clone();
        f::Callback::from(move |e: f::Event| {
            let select: f::HtmlSelectElement = e.target_unchecked_into();
            draft.set(contact::ContactForm {
                request_type: select.value(),
                ..(*draft).clone()
            });
        })
    };
    let onsubmit = {
        let draft = draft.clone();
        let outcome = outcome.clone();
        f::Callback::from(move |e: f::SubmitEvent| {
            e.prevent_default();
            let result = draft.submit();
            if result.is_accepted() {
                draft.set(contact::ContactForm::default());
            }
            outcome.set(Some(result));
        })
    };

    let (message, color) = (*outcome)
        .as_ref()
        .map_or(("", "inherit"), |o| (o.message(), o.color()));
    let message_style = format!("color: {color};");

    f::html! {
        <form id="aiDemoForm" class="contact-form" {onsubmit}>
            <label for="name">{ "Your name" }</label>
            <input id="name" type="text" value={draft.name.clone()} oninput={on_name} />
            <label for="requestType">{ "Request type" }</label>
            <select id="requestType" onchange={on_type}>
                <option value="" selected={draft.request_type.is_empty()}>{ "Choose..." }</option>
                { for REQUEST_TYPES.iter().map(|(value, label)| f::html! {
                    <option value={*value} selected={draft.request_type == *value}>{ *label }</option>
                }) }
            </select>
            <button type="submit" class="btn">{ "Send" }</button>
            <p id="formMessage" style={message_style}>{ message }</p>
        </form>
    }
}
