use crate::domain::model::Icon;
use crate::ui::button::Button;
use crate::ui::html::escape;
use crate::ui::icons::render_icon;
use std::str::FromStr;

pub const THANK_YOU: &str = "Thank you! We received your request and will reach out soon.";

const INPUT_CLASS: &str = "w-full border rounded-xl px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-purple-400/50";

/// Replaces the form with the thank-you template that follows it.
const ONSUBMIT_THANK_YOU: &str = "event.preventDefault();var t=this.nextElementSibling;this.replaceWith(t.content.cloneNode(true));t.remove()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl std::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown form field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "phone" => Ok(FormField::Phone),
            "message" => Ok(FormField::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        }
    }
}

/// A native input constraint that keeps the browser from firing `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    ValueMissing(FormField),
    TypeMismatch(FormField),
}

impl std::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintViolation::ValueMissing(field) => write!(f, "'{}' is required", field.name()),
            ConstraintViolation::TypeMismatch(field) => {
                write!(f, "'{}' is not a valid email address", field.name())
            }
        }
    }
}

impl std::error::Error for ConstraintViolation {}

/// Quote request form. Local display state only; nothing is sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactForm {
    Editing(ContactFields),
    Submitted,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm::Editing(ContactFields::default())
    }

    /// Applies an edit. Returns `false` once the form has been submitted.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) -> bool {
        match self {
            ContactForm::Editing(fields) => {
                *fields.slot(field) = value.into();
                true
            }
            ContactForm::Submitted => false,
        }
    }

    pub fn fields(&self) -> Option<&ContactFields> {
        match self {
            ContactForm::Editing(fields) => Some(fields),
            ContactForm::Submitted => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, ContactForm::Submitted)
    }

    /// Moves to the thank-you state, dropping the entered values.
    pub fn submit(&mut self) -> Result<(), ConstraintViolation> {
        if let ContactForm::Editing(fields) = self {
            check_native_constraints(fields)?;
            *self = ContactForm::Submitted;
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        match self {
            ContactForm::Submitted => thank_you(),
            ContactForm::Editing(fields) => format!(
                concat!(
                    r#"<form onsubmit="{}" class="grid gap-4 bg-white rounded-3xl p-8 shadow">"#,
                    r#"<input class="{cls}" name="name" placeholder="Name" value="{}" required>"#,
                    r#"<input class="{cls}" type="email" name="email" placeholder="Email" value="{}" required>"#,
                    r#"<input class="{cls}" name="phone" placeholder="Phone" value="{}">"#,
                    r#"<textarea class="{cls} resize-vertical" name="message" placeholder="Tell us what you need cleaned..." rows="4">{}</textarea>"#,
                    "{}</form><template>{}</template>"
                ),
                ONSUBMIT_THANK_YOU,
                escape(&fields.name),
                escape(&fields.email),
                escape(&fields.phone),
                escape(&fields.message),
                Button::new()
                    .submit()
                    .render(&format!("{} Submit", render_icon(Icon::Sparkles, 18, ""))),
                thank_you(),
                cls = INPUT_CLASS,
            ),
        }
    }
}

fn thank_you() -> String {
    format!(
        r#"<div class="text-center py-10"><p class="text-lg font-semibold text-[#7B3FB3]">{}</p></div>"#,
        THANK_YOU
    )
}

fn check_native_constraints(fields: &ContactFields) -> Result<(), ConstraintViolation> {
    if fields.name.is_empty() {
        return Err(ConstraintViolation::ValueMissing(FormField::Name));
    }
    // email inputs strip leading and trailing whitespace before validating
    let email = fields.email.trim();
    if email.is_empty() {
        return Err(ConstraintViolation::ValueMissing(FormField::Email));
    }
    if !looks_like_email(email) {
        return Err(ConstraintViolation::TypeMismatch(FormField::Email));
    }
    Ok(())
}

// Same shape check as `<input type="email">`: non-empty local part and domain.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
