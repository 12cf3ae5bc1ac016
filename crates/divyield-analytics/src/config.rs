//! Configuration for dividend yield computation.

use divyield_core::ValueScale;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// What to emit for a price point whose value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPricePolicy {
    /// Keep the point with the IEEE 754 quotient (`inf`, `-inf` or `NaN`).
    #[default]
    NonFinite,
    /// Leave the point out of the series.
    Skip,
}

/// Reference amount the dividends are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldBasis {
    /// Dividends relative to the market price on each date.
    #[default]
    Actual,
    /// Dividends relative to the amount initially invested.
    ///
    /// Not available: how purchases after the first one should weigh in
    /// has not been settled.
    Investment,
}

/// Configuration for the yield series builder.
///
/// # Example
///
/// ```rust
/// use divyield_analytics::{YieldConfig, ZeroPricePolicy};
///
/// let config = YieldConfig::from_json(r#"{ "zero_price_policy": "skip" }"#).unwrap();
/// assert_eq!(config.zero_price_policy, ZeroPricePolicy::Skip);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldConfig {
    /// Fixed-point factors of money, shares and quotes.
    pub scale: ValueScale,

    /// Handling of zero prices.
    pub zero_price_policy: ZeroPricePolicy,

    /// Yield basis.
    pub basis: YieldBasis,
}

impl YieldConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> AnalyticsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the value scale.
    #[must_use]
    pub fn with_scale(mut self, scale: ValueScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the zero price policy.
    #[must_use]
    pub fn with_zero_price_policy(mut self, policy: ZeroPricePolicy) -> Self {
        self.zero_price_policy = policy;
        self
    }

    /// Sets the yield basis.
    #[must_use]
    pub fn with_basis(mut self, basis: YieldBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Checks that the config can be used for computation.
    pub fn validate(&self) -> AnalyticsResult<()> {
        self.scale.validate()?;
        if self.basis == YieldBasis::Investment {
            return Err(AnalyticsError::not_implemented("investment basis dividend yield"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = YieldConfig::default();
        assert_eq!(config.scale, ValueScale::default());
        assert_eq!(config.zero_price_policy, ZeroPricePolicy::NonFinite);
        assert_eq!(config.basis, YieldBasis::Actual);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = YieldConfig::new()
            .with_scale(ValueScale::new(100, 1_000_000, 10_000))
            .with_zero_price_policy(ZeroPricePolicy::Skip);
        assert_eq!(config.scale.quote_factor, 10_000);
        assert_eq!(config.zero_price_policy, ZeroPricePolicy::Skip);
    }

    #[test]
    fn test_investment_basis_rejected() {
        let config = YieldConfig::new().with_basis(YieldBasis::Investment);
        assert!(matches!(
            config.validate(),
            Err(AnalyticsError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let config = YieldConfig::new().with_scale(ValueScale::new(100, 1, 0));
        assert!(matches!(config.validate(), Err(AnalyticsError::Core(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "scale": { "money_factor": 100, "share_factor": 1000000, "quote_factor": 10000 },
            "basis": "actual"
        }"#;
        let config = YieldConfig::from_json(json).unwrap();
        assert_eq!(config.scale, ValueScale::new(100, 1_000_000, 10_000));
        assert_eq!(config.zero_price_policy, ZeroPricePolicy::NonFinite);

        assert!(YieldConfig::from_json(r#"{ "basis": "investment" }"#).is_err());
        assert!(matches!(
            YieldConfig::from_json("{ not json"),
            Err(AnalyticsError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = YieldConfig::new().with_zero_price_policy(ZeroPricePolicy::Skip);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"skip\""));
        let parsed: YieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
