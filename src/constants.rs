/// Minimum length for a user's display name
pub const NAME_MIN_LEN: usize = 2;

/// Minimum length for a password at registration
pub const PASSWORD_MIN_LEN: usize = 8;

/// Post title length bounds
pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 100;

/// Minimum length for post content
pub const POST_CONTENT_MIN_LEN: usize = 10;

/// Comment content length bounds
pub const COMMENT_MIN_LEN: usize = 3;
pub const COMMENT_MAX_LEN: usize = 500;

/// Number of posts shown on the recent-posts listing
pub const RECENT_POSTS_LIMIT: i64 = 10;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a registration attempt with an email already in use
pub const ERR_EMAIL_TAKEN: &str = "User with this email already exists";

/// Error message for a vote value outside {-1, +1}
pub const ERR_INVALID_VOTE_VALUE: &str = "Vote value must be -1 or +1";

/// Generic message for store failures; detail stays in the logs
pub const ERR_OPERATION_FAILED: &str = "Operation failed";
