//! HTTP client for the Pluggy aggregation API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    errors::{classify_status, truncate_body},
    query::{ConnectorFilters, Query, TransactionFilters},
    types::{
        Account, AccountType, Category, ConnectToken, ConnectTokenOptions, Connector, Identity,
        Investment, InvestmentType, Item, PageResponse, Parameters, Transaction,
    },
    Error,
};

/// Request timeout for all API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_BASE_URL: &str = "https://api.pluggy.ai";

/// Client for the Pluggy aggregation API.
///
/// Authenticates every request with the `X-API-KEY` header. The same client
/// works with a full API key or with a scoped connect token.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    ///
    /// Fails with [`Error::MissingApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock, and for pointing at non-production environments.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}/{}", self.base_url, path)).map_err(|e| {
            tracing::error!("Invalid URL constructed for {}: {}", path, e);
            Error::InvalidUrl(e)
        })
    }

    async fn execute<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.execute_raw(method, url, body).await?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&text)
            );
            Error::Decode(e)
        })
    }

    /// Sends the request and returns the response body, classifying
    /// non-success statuses into domain errors.
    async fn execute_raw<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<String, Error>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method, url)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| {
            tracing::error!("HTTP request failed: {}", e);
            Error::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let err = classify_status(status.as_u16(), &text);
            tracing::warn!("Request failed with status {}: {}", status, err);
            return Err(err);
        }
        Ok(text)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        self.execute(Method::GET, url, None::<&()>).await
    }

    /// Fetches all available connectors matching the given filters.
    pub async fn fetch_connectors(
        &self,
        filters: &ConnectorFilters,
        include_health: bool,
    ) -> Result<PageResponse<Connector>, Error> {
        let mut url = filters.add_to_url(&self.endpoint_url("connectors")?);
        url.query_pairs_mut()
            .append_pair("includeHealth", bool_str(include_health));
        self.get(url).await
    }

    /// Fetches a single connector by its numeric ID.
    pub async fn fetch_connector(
        &self,
        id: i64,
        include_health: bool,
    ) -> Result<Connector, Error> {
        let mut url = self.endpoint_url(&format!("connectors/{id}"))?;
        url.query_pairs_mut()
            .append_pair("includeHealth", bool_str(include_health));
        self.get(url).await
    }

    /// Fetches all items of the client.
    pub async fn fetch_items(&self) -> Result<PageResponse<Item>, Error> {
        let url = self.endpoint_url("items")?;
        self.get(url).await
    }

    /// Fetches a single item.
    pub async fn fetch_item(&self, id: &str) -> Result<Item, Error> {
        let url = self.endpoint_url(&format!("items/{id}"))?;
        self.get(url).await
    }

    /// Creates an item: starts a connector execution with the given
    /// credential parameters.
    pub async fn create_item(
        &self,
        connector_id: i64,
        parameters: &Parameters,
        webhook_url: Option<&str>,
    ) -> Result<Item, Error> {
        let url = self.endpoint_url("items")?;
        let body = CreateItemRequest {
            connector_id,
            parameters,
            webhook_url,
        };
        self.execute(Method::POST, url, Some(&body)).await
    }

    /// Updates an item's stored credentials, triggering a new sync.
    pub async fn update_item(
        &self,
        id: &str,
        parameters: Option<&Parameters>,
        webhook_url: Option<&str>,
    ) -> Result<Item, Error> {
        let url = self.endpoint_url(&format!("items/{id}"))?;
        let body = UpdateItemRequest {
            id,
            parameters,
            webhook_url,
        };
        self.execute(Method::PATCH, url, Some(&body)).await
    }

    /// Answers an MFA challenge for an item waiting on user input.
    pub async fn update_item_mfa(
        &self,
        id: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Item, Error> {
        let url = self.endpoint_url(&format!("items/{id}/mfa"))?;
        self.execute(Method::POST, url, parameters).await
    }

    /// Deletes an item and all data retrieved through it.
    pub async fn delete_item(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint_url(&format!("items/{id}"))?;
        self.execute_raw(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    /// Fetches the accounts of an item, optionally filtered by type.
    pub async fn fetch_accounts(
        &self,
        item_id: &str,
        account_type: Option<AccountType>,
    ) -> Result<PageResponse<Account>, Error> {
        let mut url = self.endpoint_url("accounts")?;
        url.query_pairs_mut().append_pair("itemId", item_id);
        if let Some(account_type) = account_type {
            url.query_pairs_mut()
                .append_pair("type", &account_type.to_string());
        }
        self.get(url).await
    }

    /// Fetches a single account.
    pub async fn fetch_account(&self, id: &str) -> Result<Account, Error> {
        let url = self.endpoint_url(&format!("accounts/{id}"))?;
        self.get(url).await
    }

    /// Fetches the transactions of an account matching the given filters.
    pub async fn fetch_transactions(
        &self,
        account_id: &str,
        filters: &TransactionFilters,
    ) -> Result<PageResponse<Transaction>, Error> {
        let mut url = filters.add_to_url(&self.endpoint_url("transactions")?);
        url.query_pairs_mut().append_pair("accountId", account_id);
        self.get(url).await
    }

    /// Fetches a single transaction.
    pub async fn fetch_transaction(&self, id: &str) -> Result<Transaction, Error> {
        let url = self.endpoint_url(&format!("transactions/{id}"))?;
        self.get(url).await
    }

    /// Fetches the investments of an item, optionally filtered by type.
    pub async fn fetch_investments(
        &self,
        item_id: &str,
        investment_type: Option<InvestmentType>,
    ) -> Result<PageResponse<Investment>, Error> {
        let mut url = self.endpoint_url("investments")?;
        url.query_pairs_mut().append_pair("itemId", item_id);
        if let Some(investment_type) = investment_type {
            url.query_pairs_mut()
                .append_pair("type", &investment_type.to_string());
        }
        self.get(url).await
    }

    /// Fetches a single investment.
    pub async fn fetch_investment(&self, id: &str) -> Result<Investment, Error> {
        let url = self.endpoint_url(&format!("investments/{id}"))?;
        self.get(url).await
    }

    /// Fetches an identity record by its own ID.
    pub async fn fetch_identity(&self, id: &str) -> Result<Identity, Error> {
        let url = self.endpoint_url(&format!("identity/{id}"))?;
        self.get(url).await
    }

    /// Fetches the identity record associated with an item.
    pub async fn fetch_identity_by_item_id(&self, item_id: &str) -> Result<Identity, Error> {
        let mut url = self.endpoint_url("identity")?;
        url.query_pairs_mut().append_pair("itemId", item_id);
        self.get(url).await
    }

    /// Fetches all transaction categories.
    pub async fn fetch_categories(&self) -> Result<PageResponse<Category>, Error> {
        let url = self.endpoint_url("categories")?;
        self.get(url).await
    }

    /// Fetches a single category.
    pub async fn fetch_category(&self, id: &str) -> Result<Category, Error> {
        let url = self.endpoint_url(&format!("categories/{id}"))?;
        self.get(url).await
    }

    /// Creates a connect token: a scoped API key for connecting items from
    /// a frontend. Pass an item ID to scope the token to updating that item.
    pub async fn create_connect_token(
        &self,
        item_id: Option<&str>,
        options: Option<&ConnectTokenOptions>,
    ) -> Result<ConnectToken, Error> {
        let url = self.endpoint_url("connect_token")?;
        let body = ConnectTokenRequest { item_id, options };
        self.execute(Method::POST, url, Some(&body)).await
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// Request bodies. Optional fields are skipped when unset so the serialized
// JSON never carries null keys.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateItemRequest<'a> {
    connector_id: i64,
    parameters: &'a Parameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateItemRequest<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a Parameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectTokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    item_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a ConnectTokenOptions>,
}
