//! Component weight queries over a stream of unite/query commands.
//!
//! Elements `0..n` start as weightless singletons. `Unite` joins two
//! components and adds the given weight to the result; `Query` reports the
//! accumulated weight of an element's component.

use crate::algorithms::union_find::UnionFind;
use crate::models::{NodeId, Weight};
use crate::{GraphError, Result};

/// A single command in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Join the components of `a` and `b`, adding `weight` to the merged set.
    Unite {
        a: NodeId,
        b: NodeId,
        weight: Weight,
    },
    /// Report the weight of the component containing `x`.
    Query { x: NodeId },
}

/// Stateful command processor.
#[derive(Debug, Clone)]
pub struct ComponentWeights {
    forest: UnionFind,
    commands_applied: usize,
}

impl ComponentWeights {
    /// Create a processor over `n` weightless elements.
    ///
    /// Fails with [`GraphError::TooManyNodes`] when `n` exceeds the id space.
    pub fn new(n: usize) -> Result<Self> {
        NodeId::check_capacity(n)?;
        Ok(Self {
            forest: UnionFind::new(n),
            commands_applied: 0,
        })
    }

    /// Apply one command. Returns the answer for queries, `None` for unites.
    ///
    /// Commands naming an element outside `0..n` are rejected without
    /// touching the forest.
    pub fn apply(&mut self, command: &Command) -> Result<Option<Weight>> {
        let answer = match *command {
            Command::Unite { a, b, weight } => {
                self.check(a)?;
                self.check(b)?;
                let outcome = self.forest.union(a, b, weight);
                tracing::trace!(
                    a = a.get(),
                    b = b.get(),
                    weight = weight.get(),
                    root = outcome.root.get(),
                    merged = outcome.merged,
                    "unite"
                );
                None
            }
            Command::Query { x } => {
                self.check(x)?;
                Some(self.forest.weight(x))
            }
        };

        self.commands_applied += 1;
        Ok(answer)
    }

    /// Number of commands applied successfully.
    pub fn commands_applied(&self) -> usize {
        self.commands_applied
    }

    /// The underlying forest.
    pub fn forest(&self) -> &UnionFind {
        &self.forest
    }

    /// Consume the processor and return the forest.
    pub fn into_forest(self) -> UnionFind {
        self.forest
    }

    fn check(&self, node: NodeId) -> Result<()> {
        if node.index() >= self.forest.len() {
            return Err(GraphError::InvalidNodeId(node.get() as u64));
        }
        Ok(())
    }
}

/// Replay `commands` over `n` elements and collect the query answers in order.
///
/// Stops at the first command with an out-of-range element.
pub fn replay_commands(n: usize, commands: &[Command]) -> Result<Vec<Weight>> {
    let mut processor = ComponentWeights::new(n)?;
    let mut answers = Vec::new();

    for command in commands {
        if let Some(weight) = processor.apply(command)? {
            answers.push(weight);
        }
    }

    tracing::debug!(
        elements = n,
        commands = commands.len(),
        queries = answers.len(),
        components = processor.forest().num_components(),
        "replayed component weight commands"
    );

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unite(a: u32, b: u32, weight: u64) -> Command {
        Command::Unite {
            a: NodeId(a),
            b: NodeId(b),
            weight: Weight(weight),
        }
    }

    fn query(x: u32) -> Command {
        Command::Query { x: NodeId(x) }
    }

    #[test]
    fn test_replay_basic() {
        let commands = [
            unite(0, 1, 3),
            query(0),
            unite(2, 3, 4),
            query(3),
            unite(1, 2, 10),
            query(0),
            query(4),
        ];

        let answers = replay_commands(5, &commands).unwrap();
        assert_eq!(answers, vec![Weight(3), Weight(4), Weight(17), Weight(0)]);
    }

    #[test]
    fn test_unite_within_component_adds_weight() {
        let commands = [unite(0, 1, 2), unite(1, 0, 5), unite(0, 0, 1), query(1)];

        let answers = replay_commands(2, &commands).unwrap();
        assert_eq!(answers, vec![Weight(8)]);
    }

    #[test]
    fn test_query_only() {
        let answers = replay_commands(3, &[query(0), query(2)]).unwrap();
        assert_eq!(answers, vec![Weight::ZERO, Weight::ZERO]);
    }

    #[test]
    fn test_invalid_element() {
        let result = replay_commands(2, &[unite(0, 1, 1), query(2)]);
        assert!(matches!(result, Err(GraphError::InvalidNodeId(2))));

        let result = replay_commands(2, &[unite(5, 1, 1)]);
        assert!(matches!(result, Err(GraphError::InvalidNodeId(5))));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_too_many_elements() {
        let result = replay_commands(NodeId::MAX_NODES + 1, &[query(0)]);
        assert!(matches!(result, Err(GraphError::TooManyNodes(_))));
        assert!(ComponentWeights::new(NodeId::MAX_NODES + 1).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_wide_index_is_rejected() {
        let wide = NodeId::from(u32::MAX as usize + 1);
        let result = replay_commands(2, &[Command::Query { x: wide }]);
        assert!(matches!(result, Err(GraphError::InvalidNodeId(_))));
    }

    #[test]
    fn test_rejected_command_leaves_state_untouched() {
        let mut processor = ComponentWeights::new(3).unwrap();
        processor.apply(&unite(0, 1, 4)).unwrap();

        assert!(processor.apply(&unite(1, 9, 100)).is_err());
        assert_eq!(processor.commands_applied(), 1);
        assert_eq!(processor.apply(&query(1)).unwrap(), Some(Weight(4)));
        assert_eq!(processor.forest().num_components(), 2);
    }

    #[test]
    fn test_into_forest() {
        let mut processor = ComponentWeights::new(4).unwrap();
        processor.apply(&unite(0, 3, 1)).unwrap();

        let mut forest = processor.into_forest();
        assert!(forest.connected(NodeId(0), NodeId(3)));
        assert!(forest.validate().is_ok());
    }
}
