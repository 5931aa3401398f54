pub mod carousel;
pub mod contact_form;
pub mod counter;
pub mod details;
pub mod foundation;
pub mod header;
pub mod nav_link;
pub mod parallax;
pub mod reveal;
pub mod scroll_top;
pub mod theme_toggle;
pub mod toast;

pub use carousel::NewsCarousel;
pub use contact_form::ContactForm;
pub use counter::StatCounter;
pub use details::DetailsToggle;
pub use header::Header;
pub use nav_link::NavLink;
pub use parallax::Parallax;
pub use reveal::{Reveal, Visibility, use_in_view};
pub use scroll_top::ScrollTopButton;
pub use theme_toggle::ThemeToggle;
pub use toast::{ToastAction, ToastContext, ToastHost, ToastItem, ToastStore};
