//! Input validation shared by registration, profile edits and the survey.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::response::AppError;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 12;
pub const MAX_FEEDBACK_LEN: usize = 1000;

pub const DIFFICULTY_LEVELS: [&str; 3] = ["easy", "medium", "hard"];

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format")]
    Email,
    #[error("Username must be at least {MIN_USERNAME_LEN} characters long")]
    UsernameTooShort,
    #[error("Username can only contain letters, numbers, and underscores")]
    UsernameCharacters,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter")]
    PasswordUppercase,
    #[error("Password must contain at least one lowercase letter")]
    PasswordLowercase,
    #[error("Password must contain at least one number")]
    PasswordDigit,
    #[error("Rating must be between 1 and 5")]
    Rating,
    #[error("Feedback must be at most {MAX_FEEDBACK_LEN} characters")]
    FeedbackTooLong,
    #[error("Difficulty must be one of easy, medium, hard")]
    Difficulty,
    #[error("Answer must be one of a, b, c, d")]
    AnswerOption,
    #[error("{0} is required")]
    Required(&'static str),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|err| panic!("email pattern: {err}"))
    })
}

fn username_re() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_]+$").unwrap_or_else(|err| panic!("username pattern: {err}"))
    })
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email_re().is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if !username_re().is_match(username) {
        return Err(ValidationError::UsernameCharacters);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordDigit);
    }
    Ok(())
}

/// Strips characters that could break out of HTML attributes and trims.
pub fn sanitize_input(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn validate_rating(rating: i64) -> Result<(), ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::Rating)
    }
}

pub fn validate_feedback(text: &str) -> Result<(), ValidationError> {
    if text.chars().count() > MAX_FEEDBACK_LEN {
        Err(ValidationError::FeedbackTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_difficulty(level: &str) -> Result<String, ValidationError> {
    let normalized = level.trim().to_ascii_lowercase();
    if DIFFICULTY_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ValidationError::Difficulty)
    }
}

pub fn validate_answer_option(answer: &str) -> Result<String, ValidationError> {
    let normalized = answer.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "a" | "b" | "c" | "d" => Ok(normalized),
        _ => Err(ValidationError::AnswerOption),
    }
}

pub fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Required(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(validate_email("learner@example.edu").is_ok());
        assert!(validate_email("first.last+tag@mail.co").is_ok());
        assert_eq!(validate_email("no-at-sign.com"), Err(ValidationError::Email));
        assert_eq!(validate_email("a@b.c"), Err(ValidationError::Email));
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("learner_01").is_ok());
        assert_eq!(validate_username("ab"), Err(ValidationError::UsernameTooShort));
        assert_eq!(
            validate_username("has space"),
            Err(ValidationError::UsernameCharacters)
        );
    }

    #[test]
    fn password_strength() {
        assert!(validate_password("CorrectHorse42").is_ok());
        assert_eq!(validate_password("Short1A"), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("alllowercase123"),
            Err(ValidationError::PasswordUppercase)
        );
        assert_eq!(
            validate_password("ALLUPPERCASE123"),
            Err(ValidationError::PasswordLowercase)
        );
        assert_eq!(
            validate_password("NoDigitsAtAllHere"),
            Err(ValidationError::PasswordDigit)
        );
    }

    #[test]
    fn sanitize_strips_markup_characters() {
        assert_eq!(
            sanitize_input("  <b>\"great\" course</b>  "),
            "bgreat course/b"
        );
        assert_eq!(sanitize_input("it's fine"), "its fine");
    }

    #[test]
    fn survey_fields() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert_eq!(validate_rating(0), Err(ValidationError::Rating));
        assert_eq!(validate_rating(6), Err(ValidationError::Rating));
        assert!(validate_feedback(&"x".repeat(1000)).is_ok());
        assert_eq!(
            validate_feedback(&"x".repeat(1001)),
            Err(ValidationError::FeedbackTooLong)
        );
        assert_eq!(validate_difficulty(" Hard ").as_deref(), Ok("hard"));
        assert!(validate_difficulty("extreme").is_err());
    }

    #[test]
    fn answer_options_are_case_insensitive() {
        assert_eq!(validate_answer_option("C").as_deref(), Ok("c"));
        assert_eq!(validate_answer_option("e"), Err(ValidationError::AnswerOption));
    }

    #[test]
    fn required_rejects_blank() {
        assert_eq!(required(Some("  x "), "name"), Ok("x"));
        assert_eq!(required(Some("   "), "name"), Err(ValidationError::Required("name")));
        assert_eq!(required(None, "name"), Err(ValidationError::Required("name")));
    }
}
