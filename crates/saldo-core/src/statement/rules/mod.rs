//! Rule-based extractors for the statement layout.

pub mod amounts;
pub mod anchor;
pub mod fields;
pub mod patterns;
pub mod window;

pub use amounts::{amount_tokens, format_amount, parse_amount};
pub use anchor::{find_anchor, Anchor};
pub use fields::{BalanceExtractor, SummaryAmounts, SummaryExtractor};
pub use patterns::*;
pub use window::{WindowFields, WindowSearch};

/// Trait for single-line field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from one line, or `None` if the line does not qualify.
    fn extract(&self, line: &str) -> Option<Self::Output>;
}
