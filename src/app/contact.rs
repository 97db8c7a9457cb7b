//! Contact modal of the photographer page.
//!
//! The modal holds four text fields plus a submit and a close control. Focus is
//! trapped among those six elements while the modal is open. Leaving a field
//! validates it; typing into a field clears its error.

use crate::app::focus::FocusTrap;
use std::collections::BTreeMap;
use std::fmt;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const MIN_LENGTH_MESSAGE: &str = "This field must contain at least 2 characters.";

const MIN_LENGTH: usize = 2;

/// Text fields of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Message => "Your message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Focusable elements of the contact modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactControl {
    Field(ContactField),
    Submit,
    Close,
}

/// A validated message, ready to hand to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub photographer: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Returns `true` for `local@domain.tld` shaped addresses without whitespace.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Validates one field value, returning the error message if any.
///
/// # Examples
///
/// ```
/// use fisheye::app::contact::{validate, ContactField, EMAIL_MESSAGE};
///
/// assert_eq!(validate(ContactField::Email, "jane@example"), Some(EMAIL_MESSAGE));
/// assert_eq!(validate(ContactField::Email, "jane@example.com"), None);
/// ```
#[must_use]
pub fn validate(field: ContactField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(REQUIRED_MESSAGE);
    }
    if field == ContactField::Email {
        return (!is_valid_email(value)).then_some(EMAIL_MESSAGE);
    }
    (value.chars().count() < MIN_LENGTH).then_some(MIN_LENGTH_MESSAGE)
}

fn controls() -> Vec<ContactControl> {
    ContactField::ALL
        .into_iter()
        .map(ContactControl::Field)
        .chain([ContactControl::Submit, ContactControl::Close])
        .collect()
}

/// State of the contact modal.
#[derive(Debug, Clone)]
pub struct ContactForm {
    open: bool,
    photographer: String,
    values: BTreeMap<ContactField, String>,
    errors: BTreeMap<ContactField, &'static str>,
    focus: FocusTrap<ContactControl>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            open: false,
            photographer: String::new(),
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            focus: FocusTrap::new(controls()),
        }
    }
}

impl ContactForm {
    /// Opens the modal addressed to `photographer`, focusing the first field.
    pub fn open(&mut self, photographer: &str) {
        tracing::debug!(photographer = %photographer, "contact modal opened");
        self.open = true;
        self.photographer = photographer.to_string();
        self.focus.reset();
    }

    /// Closes the modal and clears every value and error.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.values.clear();
        self.errors.clear();
        self.focus.reset();
        was_open
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Name the message is addressed to.
    #[must_use]
    pub fn photographer(&self) -> &str {
        &self.photographer
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub fn focused(&self) -> Option<ContactControl> {
        if self.open {
            self.focus.focused()
        } else {
            None
        }
    }

    /// Replaces the value of `field` and clears its error.
    pub fn set_value(&mut self, field: ContactField, value: &str) {
        self.values.insert(field, value.to_string());
        self.errors.remove(&field);
    }

    fn focused_field(&self) -> Option<ContactField> {
        match self.focused()? {
            ContactControl::Field(field) => Some(field),
            ContactControl::Submit | ContactControl::Close => None,
        }
    }

    /// Types `c` into the focused field. Returns `false` if no field has focus.
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        self.values.entry(field).or_default().push(c);
        self.errors.remove(&field);
        true
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if let Some(value) = self.values.get_mut(&field) {
            value.pop();
        }
        self.errors.remove(&field);
        true
    }

    fn validate_field(&mut self, field: ContactField) -> bool {
        match validate(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }

    fn blur(&mut self) {
        if let Some(field) = self.focused_field() {
            self.validate_field(field);
        }
    }

    /// Tab: validates the field being left and moves focus forward.
    pub fn focus_next(&mut self) -> Option<ContactControl> {
        if !self.open {
            return None;
        }
        self.blur();
        self.focus.focus_next()
    }

    /// Shift+Tab: validates the field being left and moves focus backward.
    pub fn focus_previous(&mut self) -> Option<ContactControl> {
        if !self.open {
            return None;
        }
        self.blur();
        self.focus.focus_previous()
    }

    /// Validates every field. Returns `true` if the form is valid.
    pub fn validate_all(&mut self) -> bool {
        ContactField::ALL
            .into_iter()
            .fold(true, |valid, field| self.validate_field(field) && valid)
    }

    /// Submits the form.
    ///
    /// On success the message is logged, the modal is closed and reset, and the
    /// trimmed message is returned. On failure every invalid field carries its
    /// error and the modal stays open.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if !self.open {
            return None;
        }
        if !self.validate_all() {
            tracing::debug!(invalid_fields = self.errors.len(), "contact form rejected");
            return None;
        }

        let message = ContactMessage {
            photographer: self.photographer.clone(),
            first_name: self.value(ContactField::FirstName).trim().to_string(),
            last_name: self.value(ContactField::LastName).trim().to_string(),
            email: self.value(ContactField::Email).trim().to_string(),
            message: self.value(ContactField::Message).trim().to_string(),
        };

        tracing::info!(
            photographer = %message.photographer,
            first_name = %message.first_name,
            last_name = %message.last_name,
            email = %message.email,
            message = %message.message,
            "contact form submitted"
        );

        self.close();
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.open("Mimi Keel");
        form.set_value(ContactField::FirstName, " Jane ");
        form.set_value(ContactField::LastName, "Doe");
        form.set_value(ContactField::Email, "jane@example.com");
        form.set_value(ContactField::Message, "Hello there");
        form
    }

    #[test]
    fn validation_rules() {
        assert_eq!(validate(ContactField::FirstName, "   "), Some(REQUIRED_MESSAGE));
        assert_eq!(validate(ContactField::FirstName, "J"), Some(MIN_LENGTH_MESSAGE));
        assert_eq!(validate(ContactField::FirstName, "Jo"), None);
        assert_eq!(validate(ContactField::Email, ""), Some(REQUIRED_MESSAGE));
        assert_eq!(validate(ContactField::Email, "a b@c.d"), Some(EMAIL_MESSAGE));
        assert_eq!(validate(ContactField::Email, "a@@c.d"), Some(EMAIL_MESSAGE));
        assert_eq!(validate(ContactField::Email, "@c.d"), Some(EMAIL_MESSAGE));
        assert_eq!(validate(ContactField::Email, "a@.d"), Some(EMAIL_MESSAGE));
        assert_eq!(validate(ContactField::Email, "a@c."), Some(EMAIL_MESSAGE));
        assert_eq!(validate(ContactField::Email, "a@c.d"), None);
    }

    #[test]
    fn open_focuses_first_field() {
        let mut form = ContactForm::default();
        assert_eq!(form.focused(), None);

        form.open("Mimi Keel");
        assert_eq!(form.focused(), Some(ContactControl::Field(ContactField::FirstName)));
    }

    #[test]
    fn focus_wraps_within_modal() {
        let mut form = ContactForm::default();
        form.open("Mimi Keel");

        assert_eq!(form.focus_previous(), Some(ContactControl::Close));
        assert_eq!(form.focus_next(), Some(ContactControl::Field(ContactField::FirstName)));
        for _ in 0..5 {
            form.focus_next();
        }
        assert_eq!(form.focused(), Some(ContactControl::Close));
    }

    #[test]
    fn leaving_a_field_validates_it_and_typing_clears_the_error() {
        let mut form = ContactForm::default();
        form.open("Mimi Keel");

        form.input_char('J');
        form.focus_next();
        assert_eq!(form.error(ContactField::FirstName), Some(MIN_LENGTH_MESSAGE));

        form.focus_previous();
        form.input_char('o');
        assert_eq!(form.error(ContactField::FirstName), None);
        assert_eq!(form.value(ContactField::FirstName), "Jo");
    }

    #[test]
    fn invalid_submit_keeps_modal_open() {
        let mut form = ContactForm::default();
        form.open("Mimi Keel");
        form.set_value(ContactField::Email, "nope");

        assert_eq!(form.submit(), None);
        assert!(form.is_open());
        assert_eq!(form.error(ContactField::FirstName), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error(ContactField::Email), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn valid_submit_returns_trimmed_message_and_resets() {
        let mut form = filled();

        let message = form.submit().expect("valid form");

        assert_eq!(message.first_name, "Jane");
        assert_eq!(message.photographer, "Mimi Keel");
        assert!(!form.is_open());
        assert_eq!(form.value(ContactField::FirstName), "");
    }

    #[test]
    fn close_resets_values_and_errors() {
        let mut form = filled();
        form.set_value(ContactField::Email, "bad");
        form.validate_all();

        assert!(form.close());
        assert_eq!(form.value(ContactField::Email), "");
        assert_eq!(form.error(ContactField::Email), None);
    }
}
