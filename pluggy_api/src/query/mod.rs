mod common;
pub use self::common::Query;

mod connector;
pub use self::connector::ConnectorFilters;

mod transaction;
pub use self::transaction::TransactionFilters;
