pub mod about;
pub mod faq;
pub mod home;
pub mod moderation;
pub mod new_review;

pub use about::about_page;
pub use faq::faq_page;
pub use home::{home_page, BoardVm};
pub use moderation::moderation_page;
pub use new_review::new_review_page;
