//! # onboard-core: Foundational Types for Consent Parameters
//!
//! Leaf crate of the onboarding workspace. Defines the quantities every
//! consent-parameter row is made of and the arithmetic performed on them.
//!
//! ## Key Design Principles
//!
//! 1. **Durations keep the user's text.** [`Duration::number`] is the decimal
//!    text as typed, possibly empty. An empty or non-numeric number never
//!    participates in a comparison.
//!
//! 2. **Closed unit set.** [`DurationUnit`] is `Day`, `Month`, `Year` or the
//!    `tenure` sentinel. Unknown unit text is rejected at the deserialization
//!    boundary with a [`CoreError`].
//!
//! 3. **Fixed calendar approximations.** A month is 30 days and a year is
//!    365 days. Conversions never round; only [`convert_duration`] floors,
//!    and only when rendering the result back to text.
//!
//! 4. **Catalog strings degrade, never fail.** Period and frequency strings
//!    from the template catalog parse to `Option<Duration>`. Anything
//!    unparseable is "no constraint".
//!
//! ## Crate Policy
//!
//! - No dependencies on other `onboard-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod convert;
pub mod duration;
pub mod error;
pub mod fetch;
pub mod parse;

pub use convert::{convert_duration, from_days, to_days, DAYS_PER_MONTH, DAYS_PER_YEAR};
pub use duration::{Duration, DurationUnit};
pub use error::CoreError;
pub use fetch::FetchType;
pub use parse::{duration_to_string, parse_frequency_string, parse_period_string};
