// ============================================================================
// Domain Models Module
// Configuration value objects for the arithmetic engine
// ============================================================================

pub mod config;

pub use config::{ArithmeticConfig, OperandNormalization};
