//! CLI configuration.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sock_commerce::catalog::{Product, Variant};
use sock_commerce::storefront::DEFAULT_BRAND;
use sock_commerce::Storefront;

/// Names searched for when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["socks.toml", ".socks.toml", "socks.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store-wide settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// The product on sale.
    #[serde(default)]
    pub product: ProductConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Build a storefront from this config.
    pub fn storefront(&self) -> Result<Storefront> {
        let variants = self
            .product
            .variants
            .iter()
            .map(|v| Variant::new(v.id, v.color.clone(), v.image_url.clone(), v.quantity))
            .collect();
        let product = Product::new(
            self.product.name.clone(),
            self.product.details.clone(),
            variants,
        )
        .context("Invalid product configuration")?;

        Ok(Storefront::new(
            self.store.brand.clone(),
            self.store.premium,
            product,
        ))
    }

    /// Check the config for errors and suspicious values.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.store.brand.trim().is_empty() {
            report.errors.push("store.brand is required".to_string());
        }
        if self.product.name.trim().is_empty() {
            report.errors.push("product.name is required".to_string());
        }
        if self.product.variants.is_empty() {
            report
                .errors
                .push("product.variants must list at least one variant".to_string());
        }

        let mut seen = HashSet::new();
        for (i, variant) in self.product.variants.iter().enumerate() {
            if !seen.insert(variant.id) {
                report.errors.push(format!(
                    "product.variants[{}].id {} is already used",
                    i, variant.id
                ));
            }
            if variant.color.trim().is_empty() {
                report
                    .errors
                    .push(format!("product.variants[{}].color is required", i));
            }
            if variant.image_url.trim().is_empty() {
                report
                    .errors
                    .push(format!("product.variants[{}].image_url is required", i));
            } else if !variant.image_url.starts_with("http://")
                && !variant.image_url.starts_with("https://")
            {
                report.warnings.push(format!(
                    "product.variants[{}].image_url '{}' is not an http(s) URL",
                    i, variant.image_url
                ));
            }
        }

        if !self.product.variants.iter().any(|v| v.quantity > 0) {
            report
                .warnings
                .push("no variant is in stock; cart buttons stay disabled".to_string());
        }

        report
    }
}

/// Outcome of [`CliConfig::validate`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Store-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Brand shown in the nav bar and title.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Premium customers get free shipping.
    #[serde(default = "default_true")]
    pub premium: bool,
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            premium: true,
        }
    }
}

/// Product settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductConfig {
    /// Product name.
    pub name: String,

    /// Bullet-point details.
    #[serde(default)]
    pub details: Vec<String>,

    /// Color variants, in swatch order.
    #[serde(default)]
    pub variants: Vec<VariantConfig>,
}

impl Default for ProductConfig {
    fn default() -> Self {
        let product = Product::default();
        Self {
            name: product.name().to_string(),
            details: product.details().to_vec(),
            variants: product
                .variants()
                .iter()
                .map(|v| VariantConfig {
                    id: v.id.get(),
                    color: v.color.clone(),
                    image_url: v.image_url.clone(),
                    quantity: v.quantity,
                })
                .collect(),
        }
    }
}

/// One color variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantConfig {
    /// Variant id, unique within the product.
    pub id: u64,
    /// Swatch color.
    pub color: String,
    /// Image shown while selected.
    pub image_url: String,
    /// Units in stock.
    #[serde(default)]
    pub quantity: u32,
}

/// Generate a default socks.toml config file.
pub fn generate_default_config(brand: &str) -> String {
    format!(
        r#"# SockShop storefront configuration

[store]
brand = "{brand}"
premium = true

[product]
name = "Socks"
details = ["80% cotton", "20% polyester", "Gender-neutral"]

[[product.variants]]
id = 2234
color = "green"
image_url = "https://www.vuemastery.com/images/challenges/vmSocks-green-onWhite.jpg"
quantity = 10

[[product.variants]]
id = 2235
color = "blue"
image_url = "https://www.vuemastery.com/images/challenges/vmSocks-blue-onWhite.jpg"
quantity = 0
"#,
        brand = brand
    )
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_generated_file() {
        let parsed: CliConfig = toml::from_str(&generate_default_config(DEFAULT_BRAND)).unwrap();
        assert_eq!(parsed, CliConfig::default());
        assert!(parsed.validate().is_valid());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed: CliConfig = toml::from_str("[store]\npremium = false\n").unwrap();
        assert!(!parsed.store.premium);
        assert_eq!(parsed.store.brand, DEFAULT_BRAND);
        assert_eq!(parsed.product.variants.len(), 2);
    }

    #[test]
    fn test_storefront_from_config() {
        let mut config = CliConfig::default();
        config.store.premium = false;
        let store = config.storefront().unwrap();
        assert_eq!(store.shipping(), "2.99");
        assert_eq!(store.selector().title(), "Vue Mastery Socks");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut config = CliConfig::default();
        config.product.variants[1].id = config.product.variants[0].id;

        let report = config.validate();
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("already used"));
        assert!(config.storefront().is_err());
    }

    #[test]
    fn test_warnings() {
        let mut config = CliConfig::default();
        config.product.variants[0].image_url = "socks.jpg".to_string();
        config.product.variants[0].quantity = 0;

        let report = config.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("socks.toml");

        let mut config = CliConfig::default();
        config.store.brand = "Acme".to_string();
        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("socks.json");

        let config = CliConfig::default();
        config.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.trim_start().starts_with('{'));
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }
}
