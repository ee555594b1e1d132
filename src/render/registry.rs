//! The immutable topic → renderer lookup table.

use std::collections::HashMap;
use std::sync::Arc;

use super::topics;
use super::{TableRenderer, TopicRenderer};
use crate::error::SquadError;
use crate::gateway::DataGateway;
use crate::topic::Topic;

/// Registry of renderers, built once at startup. There is no way to add or
/// remove entries after construction.
pub struct TopicRegistry {
    renderers: HashMap<Topic, Box<dyn TopicRenderer>>,
}

impl TopicRegistry {
    /// Build the full standard registry: one renderer for every supported
    /// topic, all sharing the given gateway.
    pub fn standard(gateway: Arc<dyn DataGateway>) -> Self {
        let renderers: Vec<Box<dyn TopicRenderer>> = vec![
            Box::new(TableRenderer::new(topics::Assets, Arc::clone(&gateway))),
            Box::new(TableRenderer::new(topics::Datasets, Arc::clone(&gateway))),
            Box::new(TableRenderer::new(
                topics::DefinedExchangeRates,
                Arc::clone(&gateway),
            )),
            Box::new(TableRenderer::new(topics::Instances, Arc::clone(&gateway))),
            Box::new(TableRenderer::new(topics::Merchants, Arc::clone(&gateway))),
            Box::new(TableRenderer::new(
                topics::PersonalUnits,
                Arc::clone(&gateway),
            )),
            Box::new(TableRenderer::new(topics::Products, Arc::clone(&gateway))),
            Box::new(TableRenderer::new(topics::Projects, Arc::clone(&gateway))),
            Box::new(TableRenderer::new(
                topics::ServiceErrors,
                Arc::clone(&gateway),
            )),
            Box::new(TableRenderer::new(
                topics::UndefinedExchangeRates,
                Arc::clone(&gateway),
            )),
            Box::new(TableRenderer::new(topics::Units, gateway)),
        ];
        Self::with_renderers(renderers)
    }

    /// Build a registry from explicit renderers. Later entries for the same
    /// topic replace earlier ones.
    pub fn with_renderers(renderers: Vec<Box<dyn TopicRenderer>>) -> Self {
        let renderers = renderers
            .into_iter()
            .map(|r| (r.topic(), r))
            .collect::<HashMap<_, _>>();
        Self { renderers }
    }

    /// Look up a topic's renderer. The renderer is handed out exclusively;
    /// only one caller (the scheduler) drives rendering.
    pub fn lookup_mut(
        &mut self,
        topic: Topic,
    ) -> Result<&mut (dyn TopicRenderer + '_), SquadError> {
        match self.renderers.get_mut(&topic) {
            Some(renderer) => Ok(renderer.as_mut()),
            None => Err(SquadError::TopicNotRegistered {
                topic: topic.to_string(),
            }),
        }
    }

    pub fn contains(&self, topic: Topic) -> bool {
        self.renderers.contains_key(&topic)
    }

    /// Registered topics, in [`Topic::ALL`] order.
    pub fn topics(&self) -> Vec<Topic> {
        Topic::ALL
            .iter()
            .copied()
            .filter(|t| self.renderers.contains_key(t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockGateway;

    #[test]
    fn test_standard_registry_covers_every_topic() {
        let registry = TopicRegistry::standard(Arc::new(MockGateway::new()));
        assert_eq!(registry.len(), Topic::ALL.len());
        for topic in Topic::ALL {
            assert!(registry.contains(topic));
        }
        assert_eq!(registry.topics(), Topic::ALL.to_vec());
    }

    #[test]
    fn test_lookup_unregistered_topic_fails() {
        let gateway: Arc<dyn crate::gateway::DataGateway> = Arc::new(MockGateway::new());
        let mut registry = TopicRegistry::with_renderers(vec![Box::new(TableRenderer::new(
            topics::Instances,
            gateway,
        ))]);

        assert!(registry.lookup_mut(Topic::Instances).is_ok());
        assert!(registry.lookup_mut(Topic::Assets).is_err());
        assert_eq!(registry.topics(), vec![Topic::Instances]);
    }

    // The borrowed renderer must be usable for a full render cycle while the
    // registry stays borrowed.
    #[tokio::test]
    async fn test_lookup_hands_out_a_working_renderer() {
        let mut registry = TopicRegistry::standard(Arc::new(MockGateway::new()));

        let renderer = registry.lookup_mut(Topic::Instances).unwrap();
        assert_eq!(renderer.topic(), Topic::Instances);
        let output = renderer.render().await.unwrap();
        assert_eq!(output.title, "instances (0)");
    }
}
