//! Maximum Weight Independent Set on vertex-weighted undirected graphs

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// weighted undirected graph (vertices, edges and their invariants)
pub mod graph;

/// errors raised by graph operations and instance readers
pub mod error;

/// MWIS algorithms: exact path solver, GWMIN, GWMAX and the alpha minorant
pub mod search;

/// independent set checker
pub mod checker;

/// read weighted DIMACS instances
pub mod dimacs;

/// read/write JSON instances
pub mod json_instance;

/// random instance generation
pub mod generator;

/// helper and utility methods for executables
pub mod util;
