//! Minimum spanning trees: Prim and Kruskal
//!
//! Prim grows a tree from a start vertex with a frontier heap and lazy
//! deletion. Kruskal sorts the edge arena once (each undirected edge is
//! stored exactly once, so nothing is sorted twice) and joins components
//! with a union-find.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::types::{Mst, MstResult, TreeEdge};
use crate::graph::Graph;

/// Frontier entry for Prim's heap, ordered by weight with endpoint
/// tie-breaking for determinism.
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    weight: f64,
    from: usize,
    to: usize,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| (self.from, self.to).cmp(&(other.from, other.to)))
    }
}

/// Prim's algorithm from `start`
///
/// Multiple frontier entries may target the same vertex; entries whose
/// target is already in the tree are discarded on extraction. The frontier
/// emptying before `n - 1` edges are accepted means the graph is
/// disconnected from `start`.
#[tracing::instrument(skip(graph), fields(n = graph.vertex_count()))]
pub fn prim(graph: &Graph, start: usize) -> Result<MstResult> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut heap = BinaryHeap::new();
    for (v, w) in graph.neighbors(start)? {
        heap.push(Reverse(FrontierEdge {
            weight: w,
            from: start,
            to: v,
        }));
    }

    let mut edges = Vec::new();
    let mut total_weight = 0.0;
    while edges.len() + 1 < n {
        let Some(Reverse(FrontierEdge { weight, from, to })) = heap.pop() else {
            break;
        };
        if visited[to] {
            continue;
        }
        visited[to] = true;
        edges.push(TreeEdge { from, to, weight });
        total_weight += weight;
        for (next, w) in graph.neighbors(to)? {
            if !visited[next] {
                heap.push(Reverse(FrontierEdge {
                    weight: w,
                    from: to,
                    to: next,
                }));
            }
        }
    }

    if edges.len() + 1 == n {
        Ok(MstResult::Tree(Mst {
            edges,
            total_weight,
        }))
    } else {
        tracing::debug!(accepted = edges.len(), n, "frontier exhausted early");
        Ok(MstResult::Disconnected)
    }
}

/// Kruskal's algorithm over the whole graph
///
/// Edges are sorted by `(weight, min endpoint, max endpoint)` so the
/// accepted sequence is deterministic. A graph with at most one vertex
/// trivially yields an empty tree of weight 0.
#[tracing::instrument(skip(graph), fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn kruskal(graph: &Graph) -> MstResult {
    let n = graph.vertex_count();
    if n <= 1 {
        return MstResult::Tree(Mst {
            edges: Vec::new(),
            total_weight: 0.0,
        });
    }

    let mut sorted: Vec<(f64, usize, usize)> = graph
        .edges()
        .map(|(u, v, w)| (w, u.min(v), u.max(v)))
        .collect();
    sorted.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| (a.1, a.2).cmp(&(b.1, b.2)))
    });

    let mut sets = UnionFind::new(n);
    let mut edges = Vec::new();
    let mut total_weight = 0.0;
    for (w, u, v) in sorted {
        if sets.union(u, v) {
            edges.push(TreeEdge {
                from: u,
                to: v,
                weight: w,
            });
            total_weight += w;
            if edges.len() == n - 1 {
                break;
            }
        }
    }

    if edges.len() == n - 1 {
        MstResult::Tree(Mst {
            edges,
            total_weight,
        })
    } else {
        MstResult::Disconnected
    }
}

/// Disjoint-set forest with union by rank and path compression
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of `x`'s set, halving the path on the way up
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`; false if they were already joined
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}
