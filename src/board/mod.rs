//! Board storage, directional scanning and fixed geometry.
//!
//! - `grid`: the 7x7 occupancy model
//! - `scan`: the one scanning rule behind movement, threats and mills
//! - `geometry`: ring points, hit-test ids and drawn segments

pub mod geometry;
pub mod grid;
pub mod scan;

pub use geometry::{connections, node_id, ring_of, NodeId, Ring, NODES, NODE_COUNT};
pub use grid::{Board, BoardSnapshot};
pub use scan::{neighbour, neighbours, scan, scan_until, Scan, ScanDepth};
