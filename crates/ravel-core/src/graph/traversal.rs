//! Depth-first and breadth-first spanning trees
//!
//! Both visit a vertex's neighbors in adjacency insertion order: whichever
//! neighbor was connected earlier is discovered first. That is the
//! documented tie-break policy, not an accident of implementation.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::types::{SpanningTree, TreeEdge};
use crate::graph::Graph;

/// Depth-first spanning tree rooted at `start`
///
/// Iterative: each stack frame holds a vertex and a cursor into its
/// adjacency list, so deep path graphs cannot overflow the call stack.
#[tracing::instrument(skip(graph), fields(n = graph.vertex_count()))]
pub fn dfs_spanning_tree(graph: &Graph, start: usize) -> Result<SpanningTree> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    visited[start] = true;
    let mut edges = Vec::new();
    let mut stack = vec![(start, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (u, cursor) = *frame;
        match graph.neighbor_at(u, cursor) {
            None => {
                stack.pop();
            }
            Some((v, w)) => {
                frame.1 += 1;
                if !visited[v] {
                    visited[v] = true;
                    edges.push(TreeEdge {
                        from: u,
                        to: v,
                        weight: w,
                    });
                    stack.push((v, 0));
                }
            }
        }
    }

    Ok(SpanningTree {
        root: start,
        edges,
        unreached: unreached(&visited),
    })
}

/// Breadth-first spanning tree rooted at `start`
#[tracing::instrument(skip(graph), fields(n = graph.vertex_count()))]
pub fn bfs_spanning_tree(graph: &Graph, start: usize) -> Result<SpanningTree> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    visited[start] = true;
    let mut edges = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        for (v, w) in graph.neighbors(u)? {
            if !visited[v] {
                visited[v] = true;
                edges.push(TreeEdge {
                    from: u,
                    to: v,
                    weight: w,
                });
                queue.push_back(v);
            }
        }
    }

    Ok(SpanningTree {
        root: start,
        edges,
        unreached: unreached(&visited),
    })
}

fn unreached(visited: &[bool]) -> Vec<usize> {
    visited
        .iter()
        .enumerate()
        .filter(|(_, &seen)| !seen)
        .map(|(i, _)| i)
        .collect()
}
