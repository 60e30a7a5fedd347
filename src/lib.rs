//! Puzzle-solving helpers.
//!
//! The crate is built around two components:
//! - [`grid`]: a bounded 2D grid parsed from a block of text, with bounds
//!   checking and 4/8-directional neighbor enumeration
//! - [`graph_algos`]: a generic shortest-path engine (Dijkstra with full
//!   predecessor tracking) over caller-built adjacency-list graphs
//!
//! A grid is typically used to build the graph the engine consumes, but the
//! two are independent: the engine works on any node type that is hashable
//! and comparable for equality.
//!
//! The remaining modules are thin plumbing for daily puzzle solving:
//! [`input`] for splitting raw puzzle input and [`solver`] for timing a
//! solver function and reporting its answer through the [`log`] facade.

pub mod collections;
pub mod errors;
pub mod graph_algos;
pub mod grid;
pub mod input;
pub mod solver;
