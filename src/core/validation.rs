//! # Form Validation
//!
//! Field-scoped, advisory checks run before anything is submitted. A failed
//! check never changes session or store state; the form just shows the
//! message next to the field.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::api::SignupRequest;
use crate::core::auth::LoginCredentials;
use crate::core::todo::TodoDraft;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const GENDERS: [&str; 3] = ["male", "female", "other"];

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Looks up the first message for `field`.
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Raw signup form input, before it becomes a [`SignupRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub gender: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Midnight UTC of `date` as `YYYY-MM-DDT00:00:00.000Z`.
pub fn to_iso_datetime(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(email.trim()) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
}

fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
}

fn require(value: &str, field: &'static str, message: &'static str, errors: &mut Vec<FieldError>) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
        false
    } else {
        true
    }
}

/// Checks the login form; returns trimmed credentials when valid.
pub fn validate_login(credentials: &LoginCredentials) -> Result<LoginCredentials, Vec<FieldError>> {
    let mut errors = Vec::new();
    check_email(&credentials.email, &mut errors);
    check_password(&credentials.password, &mut errors);

    if errors.is_empty() {
        Ok(LoginCredentials {
            email: credentials.email.trim().to_string(),
            password: credentials.password.clone(),
        })
    } else {
        Err(errors)
    }
}

/// Checks the signup form and builds the wire request.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    require(&form.username, "username", "Username is required", &mut errors);
    check_email(&form.email, &mut errors);
    require(&form.first_name, "first_name", "First name is required", &mut errors);
    require(&form.last_name, "last_name", "Last name is required", &mut errors);
    require(&form.phone_number, "phone_number", "Phone number is required", &mut errors);

    let date_of_birth =
        if require(&form.date_of_birth, "date_of_birth", "Date of birth is required", &mut errors) {
            let parsed = parse_date(&form.date_of_birth);
            if parsed.is_none() {
                errors.push(FieldError::new("date_of_birth", "Invalid date"));
            }
            parsed
        } else {
            None
        };

    if require(&form.gender, "gender", "Gender is required", &mut errors)
        && !GENDERS.contains(&form.gender.trim())
    {
        errors.push(FieldError::new("gender", "Gender must be male, female or other"));
    }

    check_password(&form.password, &mut errors);

    if form.confirm_password.is_empty() {
        errors.push(FieldError::new("confirm_password", "Please confirm your password"));
    } else if form.confirm_password != form.password {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    match (errors.is_empty(), date_of_birth) {
        (true, Some(date)) => Ok(SignupRequest {
            username: form.username.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            phone_number: form.phone_number.trim().to_string(),
            date_of_birth: to_iso_datetime(date),
            gender: form.gender.trim().to_string(),
        }),
        _ => Err(errors),
    }
}

/// Checks the add/edit form. Description may be empty.
pub fn validate_todo(draft: &TodoDraft) -> Result<TodoDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    require(&draft.title, "title", "Title is required", &mut errors);
    let deadline = if require(&draft.deadline, "deadline", "Deadline is required", &mut errors) {
        let parsed = parse_date(&draft.deadline);
        if parsed.is_none() {
            errors.push(FieldError::new("deadline", "Invalid date"));
        }
        parsed
    } else {
        None
    };

    match (errors.is_empty(), deadline) {
        (true, Some(date)) => Ok(TodoDraft {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            deadline: date.format("%Y-%m-%d").to_string(),
            status: draft.status,
        }),
        _ => Err(errors),
    }
}
