// ============================================================================
// Engine Module
// Configured arithmetic entry points built on the numeric core
// ============================================================================

mod calculator;

pub mod builder;

pub use builder::FractionCalculatorBuilder;
pub use calculator::FractionCalculator;
