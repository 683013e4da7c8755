//! UI Components
//!
//! Leptos components for the two screens and the shared chrome.

mod article_form;
mod article_list;
mod delete_confirm_button;
mod login_form;
mod message;
mod nav_link;
mod spinner;

pub use article_form::ArticleForm;
pub use article_list::ArticleList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_form::LoginForm;
pub use message::Message;
pub use nav_link::NavLink;
pub use spinner::Spinner;
