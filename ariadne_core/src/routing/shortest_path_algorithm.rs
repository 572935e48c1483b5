use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::RoutingError;

use super::{
    astar::AStar,
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    routing_request::ShortestPathRequest,
    search_observer::{NoopObserver, SearchObserver},
    shortest_path_solution::ShortestPathSolution,
};

pub trait ShortestPathAlgorithm: Send + Sync {
    fn name(&self) -> &'static str;

    fn run_with_observer<'a>(
        &self,
        request: &ShortestPathRequest<'a>,
        observer: &mut dyn SearchObserver,
    ) -> Result<ShortestPathSolution<'a>, RoutingError>;

    fn run<'a>(
        &self,
        request: &ShortestPathRequest<'a>,
    ) -> Result<ShortestPathSolution<'a>, RoutingError> {
        self.run_with_observer(request, &mut NoopObserver)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown algorithm '{0}'")]
pub struct UnknownAlgorithmError(String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingAlgorithm {
    Dijkstra,
    Astar,
    BellmanFord,
}

impl RoutingAlgorithm {
    pub const ALL: [RoutingAlgorithm; 3] = [
        RoutingAlgorithm::Dijkstra,
        RoutingAlgorithm::Astar,
        RoutingAlgorithm::BellmanFord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RoutingAlgorithm::Dijkstra => "dijkstra",
            RoutingAlgorithm::Astar => "astar",
            RoutingAlgorithm::BellmanFord => "bellman-ford",
        }
    }

    pub fn algorithm(&self) -> Box<dyn ShortestPathAlgorithm> {
        match self {
            RoutingAlgorithm::Dijkstra => Box::new(Dijkstra),
            RoutingAlgorithm::Astar => Box::new(AStar),
            RoutingAlgorithm::BellmanFord => Box::new(BellmanFord),
        }
    }
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutingAlgorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RoutingAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == value)
            .ok_or_else(|| UnknownAlgorithmError(value.to_string()))
    }
}
