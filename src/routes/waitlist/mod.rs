mod get;
mod page;
mod post;

pub use get::home;
pub use get::waitlist_form;
pub use page::render_modal;
pub use post::join_waitlist;
