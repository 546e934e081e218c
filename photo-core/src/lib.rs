pub mod asset;
pub mod cloudinary;
pub mod config;
pub mod delete;
pub mod error;
pub mod request;
pub mod signing;

pub use asset::AssetMetadata;
pub use cloudinary::{AssetService, CloudinaryClient, DeleteResult, FetchResult};
pub use config::{CloudinaryConfig, Credentials};
pub use delete::{delete_authorized_asset, DeleteOutcome};
pub use error::{ConfigError, DeleteError, ErrorKind, RemoteError};
pub use request::DeleteRequest;
