//! Grouping of elements into clusters of flush neighbors

use std::collections::{HashMap, VecDeque};

use crate::geometry::{DirectionSet, IntPoint};

use super::boundary;
use super::error::BoundaryError;
use super::path::Path;
use super::pixel::Element;

/// A maximal set of elements connected through mutual flush corners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCluster {
    elements: Vec<Element>,
}

impl ElementCluster {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Position of the element the cluster was grown from
    ///
    /// This is the smallest position in row-major order.
    pub fn seed_position(&self) -> Option<IntPoint> {
        self.elements.first().map(|element| element.position)
    }

    /// The silhouette of the cluster as closed outlines
    pub fn combined_paths(&self) -> Result<Vec<Path>, BoundaryError> {
        boundary::extract_boundary(self)
    }

    /// Partition elements into clusters
    ///
    /// Seeds are taken in row-major position order, ties broken by the
    /// element's index in `elements`; clusters are returned in seed order.
    pub fn find_clusters(elements: Vec<Element>) -> Vec<ElementCluster> {
        let mut seeds: Vec<(IntPoint, usize)> = elements
            .iter()
            .enumerate()
            .map(|(id, element)| (element.position, id))
            .collect();
        seeds.sort_unstable();

        let mut pool = ElementPool::new(elements);
        let mut clusters = Vec::new();
        for (_, seed) in seeds {
            let Some(element) = pool.take(seed) else {
                continue;
            };
            clusters.push(Self::grow(&mut pool, element));
        }

        tracing::debug!(clusters = clusters.len(), "found element clusters");
        clusters
    }

    /// Flood fill from `seed`, draining the pool of every absorbed element
    fn grow(pool: &mut ElementPool, seed: Element) -> ElementCluster {
        let mut elements = Vec::new();
        let mut queue = VecDeque::from([seed]);
        while let Some(element) = queue.pop_front() {
            for id in pool.mutual_neighbors(&element) {
                if let Some(neighbor) = pool.take(id) {
                    queue.push_back(neighbor);
                }
            }
            elements.push(element);
        }
        ElementCluster { elements }
    }
}

/// Elements not yet assigned to a cluster, indexed by grid position
struct ElementPool {
    by_position: HashMap<IntPoint, Vec<usize>>,
    slots: Vec<Option<Element>>,
}

impl ElementPool {
    fn new(elements: Vec<Element>) -> Self {
        let mut by_position: HashMap<IntPoint, Vec<usize>> = HashMap::new();
        for (id, element) in elements.iter().enumerate() {
            by_position.entry(element.position).or_default().push(id);
        }
        Self {
            by_position,
            slots: elements.into_iter().map(Some).collect(),
        }
    }

    fn take(&mut self, id: usize) -> Option<Element> {
        self.slots.get_mut(id).and_then(Option::take)
    }

    /// Ids of unassigned elements sharing a flush corner with `element`
    ///
    /// For each connecting quadrant, the two cells across its flanking
    /// edges are checked for an element connecting at the mirrored quadrant.
    fn mutual_neighbors(&self, element: &Element) -> Vec<usize> {
        let mut found = Vec::new();
        for quadrant in element.connecting_quadrants {
            for edge in quadrant.neighbors() {
                let (dx, dy) = edge.offset();
                let position = element.position.offset_by(dx, dy);
                let Some(ids) = self.by_position.get(&position) else {
                    continue;
                };
                let mirrored = quadrant.mirror(edge);
                found.extend(ids.iter().copied().filter(|&id| {
                    self.slots[id]
                        .as_ref()
                        .is_some_and(|other| other.connecting_quadrants.contains(mirrored))
                }));
            }
        }
        found.sort_unstable();
        found.dedup();
        found
    }
}
