mod common;
pub use self::common::{PageResponse, Parameters};

mod connector;
pub use self::connector::{
    Connector, ConnectorCredential, ConnectorHealth, ConnectorType, CredentialType,
};

mod item;
pub use self::item::{Item, ItemError, ItemStatus};

mod account;
pub use self::account::{
    Account, AccountSubtype, AccountType, BankData, CreditData, CurrencyCode,
};

mod transaction;
pub use self::transaction::Transaction;

mod investment;
pub use self::investment::{Investment, InvestmentType};

mod identity;
pub use self::identity::{
    Address, ContactType, Email, Identity, IdentityRelation, PhoneNumber, PhoneNumberType,
    RelationType,
};

mod category;
pub use self::category::Category;

mod token;
pub use self::token::{ConnectToken, ConnectTokenOptions};
