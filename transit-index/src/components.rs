//! Connected-component labelling for undirected graphs.
//!
//! Used to validate both the station graph and the line graph. The traversal
//! is an iterative depth-first search over an explicit stack, so graph size
//! is bounded by memory rather than call-stack depth.

/// Component labels for the nodes `0..n` of an undirected graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Number of connected components. An empty graph has none.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True if all nodes are in one component (vacuously true when empty).
    pub fn is_connected(&self) -> bool {
        self.count <= 1
    }
}

/// Label the connected components of an undirected graph on `n` nodes.
///
/// `neighbours(u)` must yield every node adjacent to `u`; adjacency is
/// assumed symmetric.
///
/// # Examples
///
/// ```
/// use transit_index::components::label_components;
///
/// // 0 - 1    2
/// let adjacency = vec![vec![1], vec![0], vec![]];
/// let components = label_components(3, |u| adjacency[u].clone());
///
/// assert_eq!(components.count(), 2);
/// assert!(!components.is_connected());
/// ```
pub fn label_components<F, I>(n: usize, mut neighbours: F) -> Components
where
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut count = 0;

    for root in 0..n {
        if labels[root].is_some() {
            continue;
        }

        labels[root] = Some(count);
        stack.push(root);

        while let Some(node) = stack.pop() {
            for next in neighbours(node) {
                if labels[next].is_none() {
                    labels[next] = Some(count);
                    stack.push(next);
                }
            }
        }

        count += 1;
    }

    Components {
        // Every node was labelled by the loop above
        labels: labels.into_iter().map(|l| l.unwrap_or(0)).collect(),
        count,
    }
}
