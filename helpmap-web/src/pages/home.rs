use helpmap_core::api::types::{HelpRequest, ServiceStatus};
use helpmap_core::{AnimationKind, HelpRequestApi, StatusApi, UserSession};

use crate::api;
use crate::components::foundation as f;
use crate::components::{
    ContactForm, DetailsToggle, NavLink, NewsCarousel, Parallax, Reveal, ScrollTopButton,
    StatCounter, ToastContext,
};
use crate::pages::Load;
use crate::router::Route;

/// One carousel slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
}

pub const NEWS: [NewsItem; 9] = [
    NewsItem {
        title: "Winter clothing drive",
        date: "2024-12-02",
        summary: "Volunteers sorted over 600 coats for families across the city.",
    },
    NewsItem {
        title: "Pharmacy runs for seniors",
        date: "2024-11-20",
        summary: "A new rota covers weekly medicine pickups in three districts.",
    },
    NewsItem {
        title: "Map of open requests",
        date: "2024-11-08",
        summary: "Requests now appear on the map so helpers can find the nearest one.",
    },
    NewsItem {
        title: "Food bank partnership",
        date: "2024-10-29",
        summary: "Two local food banks now post their delivery needs on HelpMap.",
    },
    NewsItem {
        title: "Forum opens",
        date: "2024-10-15",
        summary: "Volunteers can trade tips and coordinate in the new forum.",
    },
    NewsItem {
        title: "Reviews for volunteers",
        date: "2024-10-01",
        summary: "People who received help can now leave a short review.",
    },
    NewsItem {
        title: "Transport volunteers wanted",
        date: "2024-09-18",
        summary: "Drivers are needed for clinic appointments on weekday mornings.",
    },
    NewsItem {
        title: "Student volunteer week",
        date: "2024-09-02",
        summary: "Three universities joined with over a hundred new helpers.",
    },
    NewsItem {
        title: "HelpMap launches",
        date: "2024-08-20",
        summary: "The platform connecting volunteers with neighbours in need goes live.",
    },
];

/// Headline figures shown in the impact section.
pub const STATS: [(u64, &str, &str); 4] = [
    (1250, "Volunteers", "+"),
    (3400, "Requests completed", "+"),
    (18, "Partner organisations", ""),
    (97, "Satisfied neighbours", "%"),
];

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Option<UserSession>,
}

#[f::function_component(Home)]
pub fn home(p: &Props) -> f::Html {
    let cta = UserSession::call_to_action(p.session.as_ref());
    f::html! {
        <main id="main">
            <Parallax class="hero">
                <section class="hero-content">
                    <h1>{ "Help is closer than you think" }</h1>
                    <p>{ "HelpMap connects volunteers with neighbours who need a hand." }</p>
                    <NavLink to={Route::from_href(cta.href)} id="registerBtn" class="btn btn-primary">
                        { cta.label }
                    </NavLink>
                    <BackendStatus />
                </section>
            </Parallax>

            <Reveal id="about" class="section">
                <h2>{ "About us" }</h2>
                <p>{ "We match everyday requests with people nearby who are ready to help." }</p>
                <DetailsToggle id="fullDetails">
                    <p>{ "Anyone can post a request for groceries, medicine or a lift. \
                          Volunteers pick requests close to them, keep in touch through \
                          messages and are reviewed once the job is done." }</p>
                </DetailsToggle>
            </Reveal>

            <Reveal id="news" class="section" kind={AnimationKind::FadeIn}>
                <h2>{ "News" }</h2>
                <NewsCarousel>
                    { for NEWS.iter().map(news_slide) }
                </NewsCarousel>
            </Reveal>

            <section id="stats" class="section stats">
                { for STATS.iter().zip(0_u32..).map(|((target, label, suffix), order)| f::html! {
                    <Reveal kind={AnimationKind::ScaleIn} {order} hover_class="pulse" click_class="bounce">
                        <StatCounter target={*target} label={*label} suffix={(!suffix.is_empty()).then_some(*suffix)} />
                    </Reveal>
                }) }
            </section>

            <Reveal id="requests" class="section" kind={AnimationKind::SlideInLeft}>
                <h2>{ "Open requests" }</h2>
                <OpenRequests />
            </Reveal>

            <Reveal id="contact" class="section" kind={AnimationKind::SlideInBottom}>
                <h2>{ "Ask for help" }</h2>
                <ContactForm />
            </Reveal>

            <ScrollTopButton />
        </main>
    }
}

fn news_slide(item: &NewsItem) -> f::Html {
    f::html! {
        <article class="news-card">
            <time datetime={item.date}>{ item.date }</time>
            <h3>{ item.title }</h3>
            <p>{ item.summary }</p>
        </article>
    }
}

/// Currently open help requests from the backend.
#[f::function_component(OpenRequests)]
pub fn open_requests() -> f::Html {
    let requests = f::use_state(|| Load::<Vec<HelpRequest>>::Loading);
    let toasts = f::use_context::<ToastContext>();
    {
        let requests = requests.clone();
        f::use_effect_with((), move |()| {
            api::spawn(HelpRequestApi::get_open_requests(), move |result| {
                if let Err(err) = &result {
                    api::report_failure("loading help requests", err, toasts.as_ref());
                }
                requests.set(result.into());
            });
            || {}
        });
    }
    match &*requests {
        Load::Loading => f::html! { <p class="muted">{ "Loading requests..." }</p> },
        Load::Failed(_) => {
            f::html! { <p class="muted">{ "Requests are unavailable right now." }</p> }
        }
        Load::Ready(list) if list.is_empty() => {
            f::html! { <p class="muted">{ "No open requests. Check back soon." }</p> }
        }
        Load::Ready(list) => f::html! {
            <ul class="request-list">
                { for list.iter().map(|request| f::html! {
                    <li key={request.id.to_string()} class="request-card">
                        <span class="badge">{ request.category.clone() }</span>
                        <h3>{ request.title.clone() }</h3>
                        <p>{ request.description.clone() }</p>
                        if let Some(creator) = &request.creator {
                            <small>{ format!("Posted by {creator}") }</small>
                        }
                    </li>
                }) }
            </ul>
        },
    }
}

/// Small badge telling whether the backend is reachable.
#[f::function_component(BackendStatus)]
pub fn backend_status() -> f::Html {
    let status = f::use_state(|| Load::<ServiceStatus>::Loading);
    {
        let status = status.clone();
        f::use_effect_with((), move |()| {
            api::spawn(StatusApi::check_status(), move |result| {
                if let Err(err) = &result {
                    log::warn!("backend status check failed: {err}");
                }
                status.set(result.into());
            });
            || {}
        });
    }
    let (class, text) = match &*status {
        Load::Loading => ("status-badge pending", "Checking service..."),
        Load::Ready(s) if s.is_ok() => ("status-badge online", "Service online"),
        Load::Ready(_) | Load::Failed(_) => ("status-badge offline", "Service offline"),
    };
    f::html! { <span class={class} role="status">{ text }</span> }
}
