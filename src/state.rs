//! The active-topic state cell.
//!
//! One field, shared between the input dispatcher (writer) and the refresh
//! scheduler (reader). The topic is stored as an atomic index into
//! [`Topic::ALL`], so reads never block, a torn value is impossible, and a
//! completed `set` is visible to the next `get` (acquire/release pairing).
//! Racing writers are last-writer-wins.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::SquadError;
use crate::render::TopicRegistry;
use crate::topic::Topic;

/// Cloneable handle to the single active-topic field.
#[derive(Clone)]
pub struct TopicState {
    current: Arc<AtomicUsize>,
    /// Snapshot of the registered topics, taken at construction. The
    /// registry is immutable after construction so this never goes stale.
    registered: Arc<[Topic]>,
}

impl TopicState {
    /// Create the state cell. The initial topic must be registered.
    pub fn new(initial: Topic, registry: &TopicRegistry) -> Result<Self, SquadError> {
        if !registry.contains(initial) {
            return Err(SquadError::TopicNotRegistered {
                topic: initial.to_string(),
            });
        }
        Ok(Self {
            current: Arc::new(AtomicUsize::new(initial.index())),
            registered: registry.topics().into(),
        })
    }

    /// The currently active topic. Never blocks.
    pub fn get(&self) -> Topic {
        Topic::ALL[self.current.load(Ordering::Acquire)]
    }

    /// Attempt a topic change. An unknown or unregistered candidate is
    /// rejected, leaving the current topic unchanged; the rejection is
    /// warned exactly once, here.
    pub fn set(&self, candidate: &str) -> Result<Topic, SquadError> {
        match candidate.parse::<Topic>() {
            Ok(topic) if self.registered.contains(&topic) => {
                self.current.store(topic.index(), Ordering::Release);
                info!(%topic, "topic changed");
                Ok(topic)
            }
            Ok(topic) => {
                warn!(%topic, "topic change rejected: no renderer registered");
                Err(SquadError::TopicNotRegistered {
                    topic: topic.to_string(),
                })
            }
            Err(e) => {
                warn!(requested = candidate, "topic change rejected: unsupported topic");
                Err(e)
            }
        }
    }

    /// Topics this state will accept.
    pub fn registered(&self) -> &[Topic] {
        &self.registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockGateway;
    use crate::render::{TableRenderer, TopicRegistry};
    use crate::render::topics::{Assets, Instances};

    fn full_state() -> TopicState {
        let registry = TopicRegistry::standard(Arc::new(MockGateway::new()));
        TopicState::new(Topic::DEFAULT, &registry).unwrap()
    }

    fn partial_registry() -> TopicRegistry {
        let gateway: Arc<dyn crate::gateway::DataGateway> = Arc::new(MockGateway::new());
        TopicRegistry::with_renderers(vec![
            Box::new(TableRenderer::new(Instances, Arc::clone(&gateway))),
            Box::new(TableRenderer::new(Assets, gateway)),
        ])
    }

    #[test]
    fn test_set_then_get_for_every_topic() {
        let state = full_state();
        for topic in Topic::ALL {
            state.set(topic.name()).unwrap();
            assert_eq!(state.get(), topic);
        }
    }

    #[test]
    fn test_unknown_topic_leaves_state_unchanged() {
        let state = full_state();
        assert_eq!(state.get(), Topic::Instances);
        assert!(state.set("bogus").is_err());
        assert_eq!(state.get(), Topic::Instances);
    }

    #[test]
    fn test_unregistered_topic_rejected() {
        let state = TopicState::new(Topic::Instances, &partial_registry()).unwrap();
        assert!(state.set("assets").is_ok());
        // Known identifier, but no renderer in this registry.
        assert!(state.set("units").is_err());
        assert_eq!(state.get(), Topic::Assets);
    }

    #[test]
    fn test_initial_topic_must_be_registered() {
        assert!(TopicState::new(Topic::Units, &partial_registry()).is_err());
    }

    #[test]
    fn test_racing_writers_yield_one_of_the_written_values() {
        let state = full_state();
        let a = state.clone();
        let b = state.clone();

        let ta = std::thread::spawn(move || a.set("assets").unwrap());
        let tb = std::thread::spawn(move || b.set("units").unwrap());
        ta.join().unwrap();
        tb.join().unwrap();

        let observed = state.get();
        assert!(observed == Topic::Assets || observed == Topic::Units);
    }
}
