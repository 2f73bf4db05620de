use serde::{Deserialize, Serialize};

/// Tax bracket a property transfer falls into, determined by the sale value
/// expressed in UVT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxBracket {
    /// Up to 20,000 UVT inclusive. No tax is due.
    Exempt,
    /// Above 20,000 UVT up to 50,000 UVT inclusive. Taxed at 1.5%.
    Low,
    /// Above 50,000 UVT. Taxed at 3% plus a fixed 450 UVT component.
    High,
}

impl TaxBracket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::Low => "low",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exempt" => Some(Self::Exempt),
            "low" => Some(Self::Low),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Human-readable label with the bracket's UVT range, in the es-CO
    /// notation used throughout the reports.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Exempt => "Exenta (0,00 - 20.000,00 UVT)",
            Self::Low => "Baja (20.000,00 - 50.000,00 UVT)",
            Self::High => "Alta (> 50.000,00 UVT)",
        }
    }
}

impl std::fmt::Display for TaxBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
