pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod recorder;
pub mod runner;
pub mod validate;
