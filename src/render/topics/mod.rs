//! One table source per topic.
//!
//! These are formatting leaves only: each names its columns and pulls the
//! matching fields out of a payload item. Everything else (fetching,
//! caching, staleness) lives in the shared `TableRenderer`.

mod assets;
mod datasets;
mod defined_exchange_rates;
mod instances;
mod merchants;
mod personal_units;
mod products;
mod projects;
mod service_errors;
mod undefined_exchange_rates;
mod units;

pub use assets::Assets;
pub use datasets::Datasets;
pub use defined_exchange_rates::DefinedExchangeRates;
pub use instances::Instances;
pub use merchants::Merchants;
pub use personal_units::PersonalUnits;
pub use products::Products;
pub use projects::Projects;
pub use service_errors::ServiceErrors;
pub use undefined_exchange_rates::UndefinedExchangeRates;
pub use units::Units;
