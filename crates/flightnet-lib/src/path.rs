use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::network::{FlightNetwork, Route};

/// Edge weight used when comparing candidate paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathMetric {
    /// Cheapest total ticket cost.
    #[default]
    Cost,
    /// Shortest total great-circle distance.
    Distance,
}

impl PathMetric {
    fn weight(self, route: &Route) -> f64 {
        match self {
            PathMetric::Cost => route.cost,
            PathMetric::Distance => route.distance,
        }
    }
}

impl fmt::Display for PathMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathMetric::Cost => "cost",
            PathMetric::Distance => "distance",
        };
        f.write_str(value)
    }
}

/// Aggregates over the legs of a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathTotals {
    pub hops: usize,
    pub cost: f64,
    pub distance: f64,
    pub duration: f64,
}

impl PathTotals {
    pub fn from_routes(routes: &[Route]) -> Self {
        routes.iter().fold(Self::default(), |totals, route| Self {
            hops: totals.hops + 1,
            cost: totals.cost + route.cost,
            distance: totals.distance + route.distance,
            duration: totals.duration + route.duration,
        })
    }
}

/// Run Dijkstra's algorithm from `start` to `end` weighting routes by `metric`.
///
/// With `direct_only` set, only routes landing on `end` are relaxed, so the
/// only paths that can be found are single legs out of `start`.
///
/// Returns `None` when either code is unknown, when `end` is unreachable, and
/// when `start == end` (an empty path is never produced).
pub fn find_path(
    network: &FlightNetwork,
    start: &str,
    end: &str,
    metric: PathMetric,
    direct_only: bool,
) -> Option<Vec<Route>> {
    if !network.contains_airport(start) || !network.contains_airport(end) {
        debug!(start, end, "path search with unknown endpoint");
        return None;
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &Route> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if !visited.insert(entry.node) {
            continue;
        }
        if entry.node == end {
            break;
        }

        let current_distance = distances.get(entry.node).copied().unwrap_or(f64::INFINITY);
        for route in network.routes_from(entry.node) {
            if direct_only && route.to != end {
                continue;
            }

            let next = route.to.as_str();
            let next_cost = current_distance + metric.weight(route);
            if next_cost < distances.get(next).copied().unwrap_or(f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, route);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    if !parents.contains_key(end) {
        debug!(start, end, %metric, direct_only, "no path found");
        return None;
    }

    let Some(path) = reconstruct_path(&parents, start, end) else {
        warn!(start, end, %metric, "predecessor chain does not reach start");
        return None;
    };
    debug!(start, end, %metric, direct_only, hops = path.len(), "path found");
    Some(path)
}

/// Walk predecessor routes back from `end`. Negative weights can leave a
/// cycle in the chain, so the walk is bounded by the number of predecessors
/// and gives up when it cannot reach `start`.
fn reconstruct_path(
    parents: &HashMap<&str, &Route>,
    start: &str,
    end: &str,
) -> Option<Vec<Route>> {
    let mut path = Vec::new();
    let mut current = end;
    while current != start {
        if path.len() >= parents.len() {
            return None;
        }
        let route = parents.get(current)?;
        path.push((*route).clone());
        current = route.from.as_str();
    }
    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
