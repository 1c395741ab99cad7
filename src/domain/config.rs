// ============================================================================
// Arithmetic Configuration
// Operand handling and reporting behavior for the fraction calculator
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Operand Normalization
// ============================================================================

/// Which operands of a binary operation are normalized before combining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperandNormalization {
    /// Only the left operand is normalized; the right one is used as given.
    /// A zero right denominator is still rejected before combining.
    #[default]
    LeftOnly,

    /// Both operands are normalized, so a zero right denominator is
    /// rejected before any combination happens.
    Both,
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Configuration for a [`FractionCalculator`](crate::engine::FractionCalculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Operand normalization policy for add/subtract/multiply
    pub operand_normalization: OperandNormalization,

    /// Whether the calculator reports to its event handler
    pub emit_events: bool,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self::compatible()
    }
}

impl ArithmeticConfig {
    /// Create a new configuration with the given normalization policy
    pub fn new(operand_normalization: OperandNormalization) -> Self {
        Self {
            operand_normalization,
            emit_events: true,
        }
    }

    /// Builder method: Set operand normalization policy
    pub fn with_operand_normalization(mut self, policy: OperandNormalization) -> Self {
        self.operand_normalization = policy;
        self
    }

    /// Builder method: Enable or disable event reporting
    pub fn with_events(mut self, emit_events: bool) -> Self {
        self.emit_events = emit_events;
        self
    }

    /// Whether the right operand is normalized before combining
    pub fn normalizes_rhs(&self) -> bool {
        self.operand_normalization == OperandNormalization::Both
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ArithmeticConfig {
    /// Left operand normalized only; the right operand is combined as given
    pub fn compatible() -> Self {
        Self::new(OperandNormalization::LeftOnly)
    }

    /// Both operands normalized before combining
    pub fn strict() -> Self {
        Self::new(OperandNormalization::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compatible() {
        let config = ArithmeticConfig::default();
        assert_eq!(config.operand_normalization, OperandNormalization::LeftOnly);
        assert!(config.emit_events);
        assert!(!config.normalizes_rhs());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArithmeticConfig::compatible()
            .with_operand_normalization(OperandNormalization::Both)
            .with_events(false);

        assert!(config.normalizes_rhs());
        assert!(!config.emit_events);
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(
            ArithmeticConfig::strict().operand_normalization,
            OperandNormalization::Both
        );
        assert_eq!(
            ArithmeticConfig::compatible(),
            ArithmeticConfig::new(OperandNormalization::LeftOnly)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = ArithmeticConfig::strict().with_events(false);
        let json = serde_json::to_string(&config).unwrap();
        let back: ArithmeticConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
