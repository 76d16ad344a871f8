mod admin_layout;
mod dashboard;
mod landing;
mod login;
mod placeholder;
mod registrations;

pub use admin_layout::AdminLayout;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::LoginPage;
pub use placeholder::Placeholder;
pub use registrations::Registrations;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

fn textarea_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlTextAreaElement>().value()
}

fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

/// `Some(value)` unless blank
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
