use helpmap_core::api::types::{Message, Review};
use helpmap_core::{MessageApi, ReviewApi, UserRole, UserSession};

use crate::api;
use crate::components::foundation as f;
use crate::components::{NavLink, ToastContext};
use crate::pages::Load;
use crate::router::Route;

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Option<UserSession>,
    pub on_logout: f::Callback<()>,
}

#[f::function_component(Profile)]
pub fn profile(p: &Props) -> f::Html {
    let Some(session) = p.session.clone() else {
        return f::html! {
            <main id="main" class="profile-page">
                <p>{ "You are not logged in." }</p>
                <NavLink to={Route::Login} class="btn">{ "Log in" }</NavLink>
            </main>
        };
    };
    let logout = {
        let cb = p.on_logout.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    let role = session
        .role
        .as_ref()
        .and_then(UserRole::label)
        .unwrap_or("Member");

    f::html! {
        <main id="main" class="profile-page">
            <h1>{ session.username.clone() }</h1>
            <p class="role">{ role }</p>
            if let Some(user_id) = session.user_id {
                <Inbox {user_id} />
                if session.role == Some(UserRole::Volunteer) {
                    <Reviews volunteer_id={user_id} />
                }
            }
            <button type="button" class="btn" onclick={logout}>{ "Log out" }</button>
        </main>
    }
}

#[derive(f::Properties, PartialEq, Clone)]
struct InboxProps {
    user_id: u64,
}

#[f::function_component(Inbox)]
fn inbox(p: &InboxProps) -> f::Html {
    let messages = f::use_state(|| Load::<Vec<Message>>::Loading);
    let toasts = f::use_context::<ToastContext>();
    {
        let messages = messages.clone();
        f::use_effect_with(p.user_id, move |user_id| {
            api::spawn(MessageApi::get_messages(*user_id), move |result| {
                if let Err(err) = &result {
                    api::report_failure("loading messages", err, toasts.as_ref());
                }
                messages.set(result.into());
            });
            || {}
        });
    }
    let body = match &*messages {
        Load::Loading => f::html! { <p class="muted">{ "Loading messages..." }</p> },
        Load::Failed(_) => {
            f::html! { <p class="muted">{ "Messages are unavailable right now." }</p> }
        }
        Load::Ready(list) if list.is_empty() => {
            f::html! { <p class="muted">{ "No messages yet." }</p> }
        }
        Load::Ready(list) => f::html! {
            <ul class="message-list">
                { for list.iter().map(message_row) }
            </ul>
        },
    };
    f::html! {
        <section class="inbox">
            <h2>{ "Messages" }</h2>
            { body }
        </section>
    }
}

fn message_row(message: &Message) -> f::Html {
    let from = message.sender.clone().unwrap_or_else(|| "Unknown".to_string());
    let class = f::classes!("message", (!message.read).then_some("unread"));
    f::html! {
        <li key={message.id.to_string()} {class}>
            <strong>{ from }</strong>
            <p>{ message.content.clone() }</p>
        </li>
    }
}

#[derive(f::Properties, PartialEq, Clone)]
struct ReviewsProps {
    volunteer_id: u64,
}

#[f::function_component(Reviews)]
fn reviews(p: &ReviewsProps) -> f::Html {
    let reviews = f::use_state(|| Load::<Vec<Review>>::Loading);
    {
        let reviews = reviews.clone();
        f::use_effect_with(p.volunteer_id, move |volunteer_id| {
            api::spawn(ReviewApi::get_reviews(Some(*volunteer_id)), move |result| {
                if let Err(err) = &result {
                    log::warn!("loading reviews failed: {err}");
                }
                reviews.set(result.into());
            });
            || {}
        });
    }
    let Load::Ready(list) = &*reviews else {
        return f::Html::default();
    };
    f::html! {
        <section class="reviews">
            <h2>{ "Reviews" }</h2>
            { for list.iter().map(|review| f::html! {
                <blockquote key={review.id.to_string()}>
                    if let Some(rating) = review.rating {
                        <span class="rating">{ ("★".repeat(usize::from(rating))) }</span>
                    }
                    <p>{ review.comment.clone() }</p>
                </blockquote>
            }) }
        </section>
    }
}
