use std::{fmt, time::Duration};

use serde::Serialize;

use crate::{path::Path, weighting::Mode};

use super::routing_request::ShortestPathRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolutionStatus {
    Feasible,
    Infeasible,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Feasible => f.write_str("FEASIBLE"),
            SolutionStatus::Infeasible => f.write_str("INFEASIBLE"),
        }
    }
}

pub struct ShortestPathSolution<'a> {
    status: SolutionStatus,
    path: Option<Path<'a>>,
    cost: Option<f64>,
    mode: Mode,
    algorithm: &'static str,
    solving_time: Duration,
}

impl<'a> ShortestPathSolution<'a> {
    /// The cost is summed in path order, the same order the search adds
    /// arc costs in.
    pub fn feasible(
        request: &ShortestPathRequest<'a>,
        path: Path<'a>,
        algorithm: &'static str,
    ) -> Self {
        let weighting = request.weighting();
        let cost = path.arcs().fold(0.0, |cost, arc| cost + weighting.cost(arc));

        ShortestPathSolution {
            status: SolutionStatus::Feasible,
            path: Some(path),
            cost: Some(cost),
            mode: request.mode(),
            algorithm,
            solving_time: Duration::ZERO,
        }
    }

    pub fn infeasible(request: &ShortestPathRequest<'a>, algorithm: &'static str) -> Self {
        ShortestPathSolution {
            status: SolutionStatus::Infeasible,
            path: None,
            cost: None,
            mode: request.mode(),
            algorithm,
            solving_time: Duration::ZERO,
        }
    }

    pub(crate) fn with_solving_time(mut self, solving_time: Duration) -> Self {
        self.solving_time = solving_time;
        self
    }

    pub fn status(&self) -> SolutionStatus {
        self.status
    }

    pub fn is_feasible(&self) -> bool {
        self.status == SolutionStatus::Feasible
    }

    pub fn path(&self) -> Option<&Path<'a>> {
        self.path.as_ref()
    }

    pub fn into_path(self) -> Option<Path<'a>> {
        self.path
    }

    /// Cost of the path under the request's weighting: meters or seconds
    /// depending on [`ShortestPathSolution::mode`].
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn solving_time(&self) -> Duration {
        self.solving_time
    }
}

impl fmt::Display for ShortestPathSolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.algorithm, self.status)?;
        if let Some(path) = &self.path {
            write!(
                f,
                ": {} arcs, {}, {:.1}s minimum travel time",
                path.arc_ids().len(),
                path.length(),
                path.minimum_travel_time()
            )?;
        }
        write!(f, " in {:?}", self.solving_time)
    }
}
