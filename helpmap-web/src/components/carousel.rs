use std::cell::RefCell;
use std::rc::Rc;

use helpmap_core::{CarouselConfig, CarouselController, CarouselView};

use crate::components::foundation as f;
use crate::timers::IntervalScheduler;

pub type Controller = CarouselController<IntervalScheduler>;
/// Slot holding the mounted controller. Emptying it stops autoplay.
pub type ControllerCell = Rc<RefCell<Option<Controller>>>;

#[derive(f::Properties, PartialEq, Clone)]
pub struct NewsCarouselProps {
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Run `action` against the mounted controller and publish its new view.
fn drive(
    controller: &ControllerCell,
    view: &yew::UseStateHandle<CarouselView>,
    action: impl FnOnce(&mut Controller),
) {
    let mut guard = controller.borrow_mut();
    if let Some(carousel) = guard.as_mut() {
        action(carousel);
        view.set(carousel.view());
    }
}

/// Mount a controller into `cell` and return its first view.
///
/// Interval fires reach the controller through a weak reference to `cell`,
/// so fires arriving after the cell is emptied or dropped are ignored. Every
/// automatic advance is published to `on_advance`.
pub fn mount_into(
    cell: &ControllerCell,
    config: CarouselConfig,
    slide_count: usize,
    on_advance: impl Fn(CarouselView) + 'static,
) -> CarouselView {
    let weak = Rc::downgrade(cell);
    let scheduler = IntervalScheduler::new(move |handle| {
        let Some(cell) = weak.upgrade() else {
            return;
        };
        let mut guard = cell.borrow_mut();
        if let Some(carousel) = guard.as_mut()
            && carousel.tick(handle)
        {
            on_advance(carousel.view());
        }
    });
    let carousel = CarouselController::mount_with_config(config, slide_count, scheduler);
    let view = carousel.view();
    *cell.borrow_mut() = Some(carousel);
    view
}

/// News carousel: three slides at a time, one indicator per slide, autoplay
/// every ten seconds, paused while hovered.
#[f::function_component(NewsCarousel)]
pub fn news_carousel(props: &NewsCarouselProps) -> f::Html {
    let slide_count = props.children.len();
    let view = f::use_state(|| CarouselView::resting(slide_count));
    let controller: ControllerCell = f::use_mut_ref(|| None);

    #[cfg(target_arch = "wasm32")]
    {
        let controller = controller.clone();
        let view = view.clone();
        f::use_effect_with(slide_count, move |count| {
            let tick_view = view.clone();
            view.set(mount_into(
                &controller,
                CarouselConfig::default(),
                *count,
                move |next| tick_view.set(next),
            ));
            move || {
                // Dropping the controller cancels its interval.
                controller.borrow_mut().take();
            }
        });
    }

    let on_prev = {
        let controller = controller.clone();
        let view = view.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            drive(&controller, &view, Controller::press_previous);
        })
    };
    let on_next = {
        let controller = controller.clone();
        let view = view.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            drive(&controller, &view, Controller::press_next);
        })
    };
    let on_enter = {
        let controller = controller.clone();
        let view = view.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            drive(&controller, &view, Controller::pointer_enter);
        })
    };
    let on_leave = {
        let controller = controller.clone();
        let view = view.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            drive(&controller, &view, Controller::pointer_leave);
        })
    };
    let go_to = |idx: usize| {
        let controller = controller.clone();
        let view = view.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            drive(&controller, &view, |carousel| carousel.go_to(idx));
        })
    };

    if slide_count == 0 {
        return f::Html::default();
    }

    let class = f::class_list(&["carousel-container"], &props.class);
    let track_style = format!("transform: {};", view.transform);
    f::html! {
        <div class={class} aria-roledescription="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <button id="prevBtn" class="carousel-btn prev" aria-label="Previous slide" onclick={on_prev}>{"‹"}</button>
            <div class="carousel-viewport">
                <div id="newsCarouselTrack" class="carousel-track" style={track_style}>
                    { for props.children.iter() }
                </div>
            </div>
            <button id="nextBtn" class="carousel-btn next" aria-label="Next slide" onclick={on_next}>{"›"}</button>
            <div id="carouselIndicators" class="carousel-indicators" role="tablist">
                { for view.indicators.iter().enumerate().map(|(idx, active)| {
                    let mut dot_class = f::classes!("indicator");
                    if *active {
                        dot_class.push("active");
                    }
                    f::html! {
                        <span
                            class={dot_class}
                            role="tab"
                            aria-label={format!("Go to slide {}", idx + 1)}
                            aria-selected={active.to_string()}
                            onclick={go_to(idx)}
                        ></span>
                    }
                }) }
            </div>
        </div>
    }
}
