pub mod backends;
mod connection;
pub mod live;
pub mod repository;
pub(crate) mod schema;
pub mod traits;

pub use backends::libsql::LibSqlBackend;
pub use connection::Database;
pub use live::{watch_messages, watch_projects};
pub use traits::*;
