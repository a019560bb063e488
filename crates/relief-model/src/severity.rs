use serde::{Deserialize, Serialize};

/// Ordinal impact level of a district. Drives every derived quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Low, Severity::Medium, Severity::High, Severity::Critical];

    /// Exact, case-sensitive match against the four labels.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Severity::Low),
            "Medium" => Some(Severity::Medium),
            "High" => Some(Severity::High),
            "Critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Scaling applied to every resource quantity.
    pub fn multiplier(self) -> f64 {
        match self {
            Severity::Low => 1.0,
            Severity::Medium => 1.5,
            Severity::High => 2.0,
            Severity::Critical => 2.5,
        }
    }

    /// Fraction of the affected population counted as casualties.
    pub fn casualty_rate(self) -> f64 {
        match self {
            Severity::Low => 0.0001,
            Severity::Medium => 0.0005,
            Severity::High => 0.001,
            Severity::Critical => 0.002,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multiplier for a raw label; unknown labels scale by 1.0.
pub fn multiplier_for(label: &str) -> f64 {
    Severity::parse(label).map(Severity::multiplier).unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Severity::parse("High"), Some(Severity::High));
        assert_eq!(Severity::parse("high"), None);
        assert_eq!(Severity::parse(" High"), None);
        assert_eq!(Severity::parse(""), None);
    }

    #[test]
    fn test_labels_round_trip() {
        for s in Severity::ALL {
            assert_eq!(Severity::parse(s.as_str()), Some(s));
        }
    }

    #[test]
    fn test_unknown_label_scales_by_one() {
        assert_eq!(multiplier_for("Severe"), 1.0);
        assert_eq!(multiplier_for("Critical"), 2.5);
    }
}
