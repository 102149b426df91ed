//! Graph algorithm implementations, one file per routine.

pub mod bipartite;
pub mod clone;
pub mod components;
pub mod cycles;
pub mod network_delay;
pub mod shortest_path;
pub mod topo;
pub mod union_find;
