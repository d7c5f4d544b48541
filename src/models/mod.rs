pub mod category;
pub mod comment;
pub mod post;
pub mod user;
pub mod vote;

pub use category::{Category, CategorySummary};
pub use comment::CommentWithAuthor;
pub use post::{Post, PostSummary};
pub use user::User;
pub use vote::VoteAction;
