// onetap-core: Pure transformation library behind the onetap CLI.
//
// Every public function here maps input to output with no IO and no
// shared state. Randomized generators draw from the thread RNG; all
// other modules are deterministic.

pub mod calc;
pub mod codec;
pub mod color;
pub mod datetime;
pub mod digest;
pub mod error;
pub mod finance;
pub mod generate;
pub mod network;
pub mod structured;
pub mod text;
pub mod token;
pub mod units;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::ToolError;
pub use codec::Codec;
pub use digest::{HashAlgorithm, HashResult};
pub use text::{ExtractKind, TextOp, TextStats};
pub use token::DecodedToken;

// Re-export result types at the crate root for ergonomics.
pub use color::{ColorTriple, Hsl, Rgb};
pub use datetime::{AgeInfo, DateBreakdown};
pub use finance::{CompoundResult, LoanResult, TipResult};
pub use network::{IpInfo, IpVersion, SubnetInfo};
pub use units::{CurrencyUnit, LengthUnit, TemperatureUnit, WeightUnit};
