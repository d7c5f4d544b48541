pub mod admin;
pub mod categories;
pub mod comments;
pub mod health;
pub mod posts;
pub mod register;
pub mod users;
pub mod validation;
pub mod votes;

pub use admin::{admin_stats, reset_database, seed_database};
pub use categories::{get_category, list_categories};
pub use comments::create_comment;
pub use health::health_check;
pub use posts::{create_post, get_post, list_posts, list_posts_by_author};
pub use register::register_user;
pub use users::get_user_profile;
pub use votes::vote_post;
