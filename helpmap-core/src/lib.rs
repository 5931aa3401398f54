//! HelpMap client core
//!
//! Platform-agnostic behaviour behind the HelpMap community site: the news
//! carousel state machine, counter and scroll animation maths, theme and
//! session models, toast queueing, the demo contact form and descriptions of
//! every backend request. Nothing here touches the browser; the web crate
//! plugs its own timers, storage and HTTP transport into these types.

pub mod api;
pub mod carousel;
pub mod contact;
pub mod counter;
pub mod disclosure;
pub mod motion;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod theme;
pub mod toast;

// Re-export commonly used types
pub use api::{
    ApiCall, ApiConfig, ApiError, ApiRequest, AuthApi, ForumApi, HelpRequestApi, Method,
    MessageApi, ReviewApi, StatusApi,
};
pub use carousel::{CarouselConfig, CarouselController, CarouselView, Playback};
pub use contact::{ContactForm, FormOutcome};
pub use counter::{COUNTER_FRAME_MS, COUNTER_OBSERVER, CounterAnimation, parse_target};
pub use disclosure::{Disclosure, scroll_top_visible};
pub use motion::{
    AnimationKind, CLICK_ANIMATION_MS, DEFAULT_PARALLAX_SPEED, DEFAULT_STAGGER_MS, IN_VIEW_CLASS,
    ObserverOptions, SMOOTH_SCROLL_MS, ease_in_out_cubic, parallax_offset, smooth_scroll_position,
    stagger_delay_ms,
};
pub use schedule::{Scheduler, TimerId, VirtualScheduler};
pub use session::{CallToAction, UserRole, UserSession};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::ThemeMode;
pub use toast::{Toast, ToastKind, ToastQueue};
