use std::path::Path;

use serde::{Deserialize, Serialize};

use oldglory_core::{FlagParameters, Rgba};

use crate::error::IoError;

/// On-disk flag configuration.
///
/// Every option is optional; anything left out keeps the value it is applied
/// over (the built-in defaults for [`FlagConfig::into_parameters`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlagConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proportion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rows: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_cols: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_color")]
    pub odd_stripe_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_color")]
    pub even_stripe_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_color")]
    pub canton_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_color")]
    pub star_color: Option<Rgba>,
    /// Number of stacked copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jasperize: Option<f64>,
}

impl FlagConfig {
    pub fn from_json(json: &str) -> Result<Self, IoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded flag configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, IoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Overlay `other` on top of this config; options set in `other` win.
    pub fn merge(self, other: FlagConfig) -> Self {
        Self {
            flag_size: other.flag_size.or(self.flag_size),
            proportion: other.proportion.or(self.proportion),
            stripe_count: other.stripe_count.or(self.stripe_count),
            star_rows: other.star_rows.or(self.star_rows),
            star_cols: other.star_cols.or(self.star_cols),
            odd_stripe_color: other.odd_stripe_color.or(self.odd_stripe_color),
            even_stripe_color: other.even_stripe_color.or(self.even_stripe_color),
            canton_color: other.canton_color.or(self.canton_color),
            star_color: other.star_color.or(self.star_color),
            jasperize: other.jasperize.or(self.jasperize),
        }
    }

    pub fn apply_to(&self, mut params: FlagParameters) -> FlagParameters {
        if let Some(v) = self.flag_size {
            params.flag_size = v;
        }
        if let Some(v) = self.proportion {
            params.proportion = v;
        }
        if let Some(v) = self.stripe_count {
            params.stripe_count = v;
        }
        if let Some(v) = self.star_rows {
            params.star_rows = v;
        }
        if let Some(v) = self.star_cols {
            params.star_cols = v;
        }
        if let Some(c) = self.odd_stripe_color {
            params.odd_stripe_color = c;
        }
        if let Some(c) = self.even_stripe_color {
            params.even_stripe_color = c;
        }
        if let Some(c) = self.canton_color {
            params.canton_color = c;
        }
        if let Some(c) = self.star_color {
            params.star_color = c;
        }
        if let Some(v) = self.jasperize {
            params.repeat_count = v;
        }
        params
    }

    pub fn into_parameters(self) -> FlagParameters {
        self.apply_to(FlagParameters::default())
    }
}

/// Colors in a config file are written the way people type them: CSS hex
/// or a color name.
mod hex_color {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use oldglory_core::Rgba;

    pub fn serialize<S>(color: &Option<Rgba>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(c) => serializer.serialize_str(&c.to_css_hex()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Rgba>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| s.parse().map_err(de::Error::custom))
            .transpose()
    }
}
