mod auth;
mod skiplist;

pub use auth::TokenManager;
pub use skiplist::SkipList;
