mod client;
mod dates;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::{CredentialErrorDetail, Error, ParameterErrorDetail};
pub use self::query::{ConnectorFilters, Query, TransactionFilters};
