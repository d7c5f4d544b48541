use crate::constants::*;
use crate::error::AppError;

/// Validate a display name at registration
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().len() < NAME_MIN_LEN {
        return Err(AppError::Validation(format!(
            "Name must be at least {NAME_MIN_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an email address
///
/// Syntactic check only: one '@' with a non-empty local part and a domain
/// containing a dot. Deliverability is not our problem.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }
    Ok(())
}

/// Validate a password at registration
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < PASSWORD_MIN_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a post title
pub fn validate_post_title(title: &str) -> Result<(), AppError> {
    let len = title.chars().count();
    if len < TITLE_MIN_LEN {
        return Err(AppError::Validation(format!(
            "Title must be at least {TITLE_MIN_LEN} characters"
        )));
    }
    if len > TITLE_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Title must be at most {TITLE_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate post content
pub fn validate_post_content(content: &str) -> Result<(), AppError> {
    if content.chars().count() < POST_CONTENT_MIN_LEN {
        return Err(AppError::Validation(format!(
            "Content must be at least {POST_CONTENT_MIN_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate comment content
pub fn validate_comment_content(content: &str) -> Result<(), AppError> {
    let len = content.chars().count();
    if len < COMMENT_MIN_LEN {
        return Err(AppError::Validation(format!(
            "Comment must be at least {COMMENT_MIN_LEN} characters"
        )));
    }
    if len > COMMENT_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Comment must be at most {COMMENT_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a vote value: exactly -1 or +1
///
/// Zero is not a storable vote; retraction happens by repeating the same
/// value, so 0 is rejected here before any store access.
pub fn validate_vote_value(value: i16) -> Result<(), AppError> {
    if value != -1 && value != 1 {
        return Err(AppError::Validation(ERR_INVALID_VOTE_VALUE.to_string()));
    }
    Ok(())
}
