//! Single-source single-target shortest path (Dijkstra)

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::types::{PathResult, Route};
use crate::graph::Graph;

/// Heap entry ordered by tentative distance; wrapped in `Reverse` to turn
/// `BinaryHeap` into a min-heap. Weights are validated finite at insertion,
/// so `total_cmp` is a plain total order here.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    vertex: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Minimum total weight and one shortest path from `src` to `dest`
///
/// Lazy deletion: superseded heap entries are discarded on extraction
/// instead of being decreased in place. Extraction of `dest` stops the
/// search early. `src == dest` trivially yields distance 0 and the
/// single-vertex path.
#[tracing::instrument(skip(graph), fields(n = graph.vertex_count()))]
pub fn shortest_path(graph: &Graph, src: usize, dest: usize) -> Result<PathResult> {
    graph.check_vertex(src)?;
    graph.check_vertex(dest)?;

    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[src] = 0.0;
    heap.push(Reverse(HeapEntry {
        distance: 0.0,
        vertex: src,
    }));

    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        if distance > dist[vertex] {
            continue; // superseded entry
        }
        if vertex == dest {
            break;
        }
        for (next, weight) in graph.neighbors(vertex)? {
            let candidate = distance + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                parent[next] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: next,
                }));
            }
        }
    }

    if dist[dest].is_infinite() {
        tracing::debug!(src, dest, "destination unreachable");
        return Ok(PathResult::Unreachable);
    }

    let mut vertices = vec![dest];
    let mut current = dest;
    while let Some(p) = parent[current] {
        vertices.push(p);
        current = p;
    }
    vertices.reverse();

    Ok(PathResult::Found(Route {
        distance: dist[dest],
        vertices,
    }))
}
