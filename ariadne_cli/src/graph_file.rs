use std::{fs, path::Path};

use anyhow::{Context, bail};
use ariadne_core::{
    geopoint::GeoPoint, graph::Graph, graph_builder::GraphBuilder,
    road_information::RoadInformation, types::Kmh,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// JSON description of a road graph.
///
/// Node ids are their index in `nodes`. Each arc refers to its road by index
/// in `roads`, and gets a reverse arc unless that road is one-way.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphDescription {
    pub name: String,
    /// Raises the graph maximum speed above the fastest road speed limit.
    #[serde(default)]
    pub maximum_speed: Option<Kmh>,
    pub nodes: Vec<GeoPoint>,
    pub roads: Vec<RoadInformation>,
    pub arcs: Vec<ArcDescription>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArcDescription {
    pub origin: usize,
    pub destination: usize,
    /// Meters
    pub length: f64,
    pub road: usize,
    #[serde(default)]
    pub points: Vec<GeoPoint>,
}

impl GraphDescription {
    pub fn into_graph(self) -> Result<Graph, anyhow::Error> {
        let mut builder = GraphBuilder::new(self.name);
        for point in self.nodes {
            builder.add_node(point);
        }

        if let Some(maximum_speed) = self.maximum_speed {
            builder.set_maximum_speed(Some(maximum_speed));
        }

        for (index, arc) in self.arcs.into_iter().enumerate() {
            let Some(road) = self.roads.get(arc.road) else {
                bail!("Arc #{index} refers to unknown road #{}", arc.road);
            };

            builder
                .link_nodes(
                    arc.origin,
                    arc.destination,
                    arc.length,
                    road.clone(),
                    arc.points,
                )
                .with_context(|| format!("Invalid arc #{index}"))?;
        }

        Ok(builder.build())
    }
}

pub fn load_graph(path: &Path) -> Result<Graph, anyhow::Error> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;
    let description: GraphDescription = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse graph file {}", path.display()))?;

    let graph = description.into_graph()?;
    let statistics = graph.statistics();
    info!(
        "Loaded graph '{}': {} nodes, {} arcs, {} total",
        graph.name(),
        statistics.node_count,
        statistics.arc_count,
        statistics.total_length
    );

    Ok(graph)
}
