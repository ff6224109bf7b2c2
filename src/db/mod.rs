pub mod connection;
pub mod reviews;

pub use connection::{init_db, Database};
pub use reviews::SqliteReviews;
