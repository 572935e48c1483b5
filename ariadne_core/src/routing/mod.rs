pub mod astar;
pub mod astar_heuristic;
pub mod bellman_ford;
pub mod dijkstra;
mod label_search;
mod routing_path_builder;
pub mod routing_request;
pub mod search_observer;
pub mod shortest_path_algorithm;
pub mod shortest_path_solution;
