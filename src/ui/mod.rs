pub mod button;
pub mod contact;
pub mod content;
pub mod html;
pub mod icons;
pub mod page;

pub use contact::{ContactFields, ContactForm, FormField};
pub use page::{render_page, PageContext};
