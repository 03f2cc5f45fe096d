use crate::core::{DecoratorKind, Demo, LogisticsKind, ObserverKind, ScenarioProvider};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Scenario file. Every section is optional; missing parts fall back to the
/// stock run (road then sea, A wrapping B, attach A and B then detach B).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub demos: Vec<Demo>,
    pub factory: FactoryConfig,
    pub decorator: DecoratorConfig,
    pub observer: ObserverConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub logistics: Vec<LogisticsKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Outermost first.
    pub layers: Vec<DecoratorKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub attach: Vec<ObserverKind>,
    pub detach: Vec<ObserverKind>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demos: Demo::ALL.to_vec(),
            factory: FactoryConfig::default(),
            decorator: DecoratorConfig::default(),
            observer: ObserverConfig::default(),
        }
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            logistics: vec![LogisticsKind::Road, LogisticsKind::Sea],
        }
    }
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            layers: vec![DecoratorKind::A, DecoratorKind::B],
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            attach: vec![ObserverKind::A, ObserverKind::B],
            detach: vec![ObserverKind::B],
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_path("config", &path.to_string_lossy())?;

        let content = fs::read_to_string(path).map_err(|e| DemoError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let config = Self::parse(&content)?;
        tracing::debug!("Loaded scenario from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("demos", &self.demos)
    }
}

impl ScenarioProvider for DemoConfig {
    fn demos(&self) -> &[Demo] {
        &self.demos
    }

    fn logistics(&self) -> &[LogisticsKind] {
        &self.factory.logistics
    }

    fn decorator_layers(&self) -> &[DecoratorKind] {
        &self.decorator.layers
    }

    fn observers_to_attach(&self) -> &[ObserverKind] {
        &self.observer.attach
    }

    fn observers_to_detach(&self) -> &[ObserverKind] {
        &self.observer.detach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_stock_scenario() {
        let config = DemoConfig::parse("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = DemoConfig::parse(
            r#"
            [decorator]
            layers = ["b", "b", "a"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.decorator.layers,
            vec![DecoratorKind::B, DecoratorKind::B, DecoratorKind::A]
        );
        assert_eq!(config.factory, FactoryConfig::default());
        assert_eq!(config.observer, ObserverConfig::default());
        assert_eq!(config.demos, Demo::ALL.to_vec());
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = DemoConfig::parse(
            r#"
            [factory]
            logistics = ["air"]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, DemoError::TomlError(_)));
    }

    #[test]
    fn test_empty_demo_list_fails_validation() {
        let config = DemoConfig::parse("demos = []").unwrap();
        assert!(matches!(
            config.validate(),
            Err(DemoError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = DemoConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, DemoError::ConfigError { .. }));
    }
}
