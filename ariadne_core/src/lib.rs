pub mod constants;
pub mod distance;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_builder;
pub mod label;
pub mod path;
pub mod priority_queue;
pub mod road_information;
pub mod routing;
mod stopwatch;
pub mod types;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_graph_utils;
