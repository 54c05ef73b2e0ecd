pub mod errors;
pub mod id;

pub use errors::{ConfigError, MasakError};
pub use id::{new_id, SessionId};
