//! The closed set of displayable topics.
//!
//! Every topic belongs to exactly one of the two remote services and maps to
//! a single API endpoint. The set is fixed at build time.

use std::fmt;
use std::str::FromStr;

use crate::error::SquadError;

/// Which remote service owns a topic's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// The Account Server (AS).
    Account,
    /// The Data Manager (DM).
    Data,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Account => write!(f, "AS"),
            Service::Data => write!(f, "DM"),
        }
    }
}

/// A displayable topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Assets,
    Datasets,
    DefinedExchangeRates,
    Instances,
    Merchants,
    PersonalUnits,
    Products,
    Projects,
    ServiceErrors,
    UndefinedExchangeRates,
    Units,
}

impl Topic {
    /// Every supported topic, in display order.
    ///
    /// `TopicState` stores the active topic as an index into this table, so
    /// the order here is load-bearing: never reorder without revisiting
    /// `Topic::index`.
    pub const ALL: [Topic; 11] = [
        Topic::Assets,
        Topic::Datasets,
        Topic::DefinedExchangeRates,
        Topic::Instances,
        Topic::Merchants,
        Topic::PersonalUnits,
        Topic::Products,
        Topic::Projects,
        Topic::ServiceErrors,
        Topic::UndefinedExchangeRates,
        Topic::Units,
    ];

    /// The topic shown before the operator picks anything.
    pub const DEFAULT: Topic = Topic::Instances;

    /// Kebab-case identifier, as used on the command surface.
    pub fn name(&self) -> &'static str {
        match self {
            Topic::Assets => "assets",
            Topic::Datasets => "datasets",
            Topic::DefinedExchangeRates => "defined-exchange-rates",
            Topic::Instances => "instances",
            Topic::Merchants => "merchants",
            Topic::PersonalUnits => "personal-units",
            Topic::Products => "products",
            Topic::Projects => "projects",
            Topic::ServiceErrors => "service-errors",
            Topic::UndefinedExchangeRates => "undefined-exchange-rates",
            Topic::Units => "units",
        }
    }

    /// The single-character key that selects this topic in the TUI.
    pub fn key(&self) -> char {
        match self {
            Topic::Assets => 'a',
            Topic::Datasets => 'd',
            Topic::Instances => 'i',
            Topic::Merchants => 'm',
            Topic::PersonalUnits => 'n',
            Topic::Units => 'o',
            Topic::Projects => 'p',
            Topic::DefinedExchangeRates => 'r',
            Topic::ServiceErrors => 's',
            Topic::Products => 't',
            Topic::UndefinedExchangeRates => 'u',
        }
    }

    /// Resolve a key press to a topic, if bound.
    pub fn from_key(key: char) -> Option<Topic> {
        Topic::ALL.iter().copied().find(|t| t.key() == key)
    }

    /// Which service serves this topic.
    pub fn service(&self) -> Service {
        match self {
            Topic::Datasets | Topic::Instances | Topic::Projects => Service::Data,
            _ => Service::Account,
        }
    }

    /// API path, relative to the owning service's base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Topic::Assets => "asset",
            Topic::Datasets => "dataset",
            Topic::DefinedExchangeRates => "exchange-rate/defined",
            Topic::Instances => "instance",
            Topic::Merchants => "merchant",
            Topic::PersonalUnits => "unit/personal",
            Topic::Products => "product",
            Topic::Projects => "project",
            Topic::ServiceErrors => "service-error",
            Topic::UndefinedExchangeRates => "exchange-rate/undefined",
            Topic::Units => "unit",
        }
    }

    /// Key under which the service's JSON response carries this topic's
    /// item array.
    pub fn items_key(&self) -> &'static str {
        match self {
            Topic::Assets => "assets",
            Topic::Datasets => "datasets",
            Topic::DefinedExchangeRates => "exchange_rates",
            Topic::Instances => "instances",
            Topic::Merchants => "merchants",
            Topic::PersonalUnits => "units",
            Topic::Products => "products",
            Topic::Projects => "projects",
            Topic::ServiceErrors => "service_errors",
            Topic::UndefinedExchangeRates => "exchange_rates",
            Topic::Units => "units",
        }
    }

    /// Position in [`Topic::ALL`]. Relies on `ALL` following declaration
    /// order, which `test_index_matches_all_order` pins down.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = SquadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| SquadError::UnsupportedTopic {
                requested: s.to_string(),
            })
    }
}
