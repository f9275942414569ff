//! UI components for the portfolio page.

mod back_to_top;
mod gallery;
mod hero;
mod lightbox;
mod nav_header;
pub mod scroll;
mod share_modal;
mod skills;
mod toast;
mod typing_text;

pub use back_to_top::BackToTop;
pub use gallery::GallerySection;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use nav_header::NavHeader;
pub use share_modal::ShareModal;
pub use skills::SkillsSection;
pub use toast::ToastStack;
