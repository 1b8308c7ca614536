use url::Url;

use crate::types::ConnectorType;

use super::common::Query;

/// Search filters for the `/connectors` endpoint.
#[derive(Default, Clone)]
pub struct ConnectorFilters {
    /// Connector name, or part of it.
    pub name: Option<String>,
    /// Countries to include (ISO 3166-1 alpha-2 codes).
    pub countries: Vec<String>,
    /// Connector types to include.
    pub types: Vec<ConnectorType>,
    /// Whether to include sandbox connectors. The API defaults to false.
    pub sandbox: Option<bool>,
}

impl Query for ConnectorFilters {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name.as_str());
        }
        // List parameters travel as a single comma-joined value.
        if !self.countries.is_empty() {
            url.query_pairs_mut()
                .append_pair("countries", &self.countries.join(","));
        }
        if !self.types.is_empty() {
            let types = self
                .types
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            url.query_pairs_mut().append_pair("types", &types);
        }
        if let Some(sandbox) = self.sandbox {
            url.query_pairs_mut()
                .append_pair("sandbox", if sandbox { "true" } else { "false" });
        }
        url
    }
}

impl ConnectorFilters {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.push(country.to_string());
        self
    }
    pub fn with_countries(mut self, countries: &[String]) -> Self {
        self.countries.extend_from_slice(countries);
        self
    }
    pub fn with_type(mut self, connector_type: ConnectorType) -> Self {
        self.types.push(connector_type);
        self
    }
    pub fn with_types(mut self, types: &[ConnectorType]) -> Self {
        self.types.extend_from_slice(types);
        self
    }
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{ConnectorFilters, Query},
        types::ConnectorType,
    };

    fn base_url() -> Url {
        Url::parse("https://example.com/connectors").unwrap()
    }

    #[test]
    fn default_filters_add_nothing() {
        let url = ConnectorFilters::default().add_to_url(&base_url());
        assert!(url.query().is_none());
    }

    #[test]
    fn countries_are_comma_joined() {
        let url = ConnectorFilters::default()
            .with_country("AR")
            .with_country("BR")
            .add_to_url(&base_url());
        assert!(url.query().unwrap().contains("countries=AR%2CBR"));
    }

    #[test]
    fn name_and_sandbox() {
        let url = ConnectorFilters::default()
            .with_name("Pluggy Bank")
            .with_sandbox(true)
            .add_to_url(&base_url());
        let query = url.query().unwrap();
        assert!(query.contains("name=Pluggy+Bank"));
        assert!(query.contains("sandbox=true"));
    }

    #[test]
    fn types_are_comma_joined() {
        let url = ConnectorFilters::default()
            .with_types(&[ConnectorType::PersonalBank, ConnectorType::Investment])
            .add_to_url(&base_url());
        assert!(url
            .query()
            .unwrap()
            .contains("types=PERSONAL_BANK%2CINVESTMENT"));
    }
}
