pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod ranking;
pub mod source;

pub use client::MovieDbClient;
pub use config::ClientConfig;
pub use error::LookupError;
pub use model::{Actor, CastMember, MediaType, Movie, SearchResult};
pub use source::EntitySource;
