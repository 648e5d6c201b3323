//! Decimal-aware comparisons for the `decassert-host` assertion library.
//!
//! ```ignore
//! let mut host = Host::new();
//! decassert_core::install(&mut host)?;
//! host.expect("10.6").bignumber()?.gt(10)?;
//! ```

pub mod bignumber;
pub mod config;
pub mod expect;
pub mod normalize;
pub mod numeric;
pub mod predicates;
pub mod registry;

pub use bignumber::{BigNumber, BIG_NUMBER_TYPE_NAME, DIVISION_PLACES, MAX_EXPONENT, MIN_EXPONENT};
pub use config::PluginOptions;
pub use expect::BigNumberExpectation;
pub use normalize::{
    classify, is_big_number, normalize, normalize_with, ExternalBigInt, InputKind,
    InvalidOperandError, EXTERNAL_BIG_INTEGER_TYPE_NAME,
};
pub use numeric::{Decimal, NumericError};
pub use predicates::{
    family, ClassificationCheck, Comparison, ComparisonFamily, CLASSIFICATION_CHECKS,
    COMPARISON_FAMILIES,
};
pub use registry::{install, BigNumberPlugin, BIGNUMBER_FLAG, PLUGIN_NAME};
