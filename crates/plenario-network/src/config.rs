//! Column mappings for the input tables
//!
//! The enrichment step names its columns after the data source, and the two
//! table kinds do not even agree with each other (`nome_deputado` vs `nome`).
//! The mappings below default to those names and can be overridden from TOML.

use crate::error::{NetworkError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Columns identifying a legislator, shared by both table kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityColumns<'a> {
    /// Integer legislator id
    pub legislator_id: &'a str,
    /// Display name
    pub legislator_name: &'a str,
    /// Party acronym
    pub party: &'a str,
    /// State acronym
    pub state: &'a str,
}

impl<'a> IdentityColumns<'a> {
    fn names(&self) -> [&'a str; 4] {
        [self.legislator_id, self.legislator_name, self.party, self.state]
    }
}

/// Column names of a front/committee membership table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipColumns {
    /// Integer legislator id
    pub legislator_id: String,
    /// Display name
    pub legislator_name: String,
    /// Party acronym
    pub party: String,
    /// State acronym
    pub state: String,
    /// Front/committee label
    pub group_label: String,
}

impl Default for MembershipColumns {
    fn default() -> Self {
        Self {
            legislator_id: "id_deputado".to_string(),
            legislator_name: "nome_deputado".to_string(),
            party: "siglaPartido_deputado".to_string(),
            state: "siglaUf_deputado".to_string(),
            group_label: "titulo".to_string(),
        }
    }
}

impl MembershipColumns {
    /// Identity columns of this mapping
    pub fn identity(&self) -> IdentityColumns<'_> {
        IdentityColumns {
            legislator_id: &self.legislator_id,
            legislator_name: &self.legislator_name,
            party: &self.party,
            state: &self.state,
        }
    }

    /// Every column the membership policy reads
    pub fn required(&self) -> Vec<&str> {
        let mut names = self.identity().names().to_vec();
        names.push(&self.group_label);
        names
    }
}

/// Column names of a roll-call vote table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgreementColumns {
    /// Integer legislator id
    pub legislator_id: String,
    /// Display name
    pub legislator_name: String,
    /// Party acronym
    pub party: String,
    /// State acronym
    pub state: String,
    /// Ballot (roll call) identifier
    pub ballot_id: String,
    /// Categorical vote choice
    pub vote_choice: String,
}

impl Default for AgreementColumns {
    fn default() -> Self {
        Self {
            legislator_id: "id_deputado".to_string(),
            legislator_name: "nome".to_string(),
            party: "siglaPartido".to_string(),
            state: "siglaUf".to_string(),
            ballot_id: "id".to_string(),
            vote_choice: "tipoVoto".to_string(),
        }
    }
}

impl AgreementColumns {
    /// Identity columns of this mapping
    pub fn identity(&self) -> IdentityColumns<'_> {
        IdentityColumns {
            legislator_id: &self.legislator_id,
            legislator_name: &self.legislator_name,
            party: &self.party,
            state: &self.state,
        }
    }

    /// Every column the agreement policy reads
    pub fn required(&self) -> Vec<&str> {
        let mut names = self.identity().names().to_vec();
        names.push(&self.ballot_id);
        names.push(&self.vote_choice);
        names
    }
}

/// Configuration for network construction
///
/// # Examples
///
/// ```
/// use plenario_network::NetworkConfig;
///
/// let config = NetworkConfig::from_toml(r#"
///     [agreement]
///     ballot_id = "idVotacao"
/// "#).unwrap();
/// assert_eq!(config.agreement.ballot_id, "idVotacao");
/// assert_eq!(config.agreement.vote_choice, "tipoVoto");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Membership table columns
    pub membership: MembershipColumns,

    /// Vote table columns
    pub agreement: AgreementColumns,
}

impl NetworkConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        check_mapping("membership", &self.membership.required())?;
        check_mapping("agreement", &self.agreement.required())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| NetworkError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NetworkError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

fn check_mapping(section: &str, names: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(NetworkError::Config(format!(
                "[{}] column names must not be empty",
                section
            )));
        }
        if !seen.insert(*name) {
            return Err(NetworkError::Config(format!(
                "[{}] column '{}' is mapped more than once",
                section, name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NetworkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.membership.group_label, "titulo");
        assert_eq!(config.agreement.legislator_name, "nome");
    }

    #[test]
    fn test_required_columns() {
        let config = NetworkConfig::default();
        assert_eq!(
            config.membership.required(),
            vec![
                "id_deputado",
                "nome_deputado",
                "siglaPartido_deputado",
                "siglaUf_deputado",
                "titulo"
            ]
        );
        assert_eq!(
            config.agreement.required(),
            vec!["id_deputado", "nome", "siglaPartido", "siglaUf", "id", "tipoVoto"]
        );
    }

    #[test]
    fn test_empty_column_name_rejected() {
        let mut config = NetworkConfig::default();
        config.membership.group_label = " ".to_string();
        assert!(matches!(config.validate(), Err(NetworkError::Config(_))));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut config = NetworkConfig::default();
        config.agreement.ballot_id = "id_deputado".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("id_deputado"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = NetworkConfig::from_toml("[membership]\ngroup_label = \"frente\"\n").unwrap();
        assert_eq!(config.membership.group_label, "frente");
        assert_eq!(config.membership.legislator_id, "id_deputado");
        assert_eq!(config.agreement, AgreementColumns::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(NetworkConfig::from_toml("[membership\n").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = NetworkConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = NetworkConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
