pub mod categories;
pub mod comments;
pub mod pool;
pub mod posts;
pub mod users;
pub mod votes;

pub use pool::create_pool;
