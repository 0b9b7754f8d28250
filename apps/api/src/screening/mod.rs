// Voice screening: transcript analysis and aggregation into the screening
// sub-score consumed by the scoring engine.

pub mod analysis;
pub mod handlers;
