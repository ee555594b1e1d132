//! squad - terminal dashboard for a Squonk2 Account Server / Data Manager
//! pair

pub mod dashboard;
pub mod environment;
pub mod error;
pub mod gateway;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod topic;
pub mod tui;

pub use dashboard::{Dashboard, DashboardHandle};
pub use environment::Environment;
pub use error::{FixSuggestion, SquadError};
pub use gateway::{DataGateway, GatewayError, HttpGateway, MockGateway, Payload};
pub use render::{RenderedOutput, TopicRegistry, TopicRenderer};
pub use scheduler::{DisplaySink, RefreshScheduler};
pub use state::TopicState;
pub use topic::{Service, Topic};
