//! STL file parsing for the weight engine.
//!
//! Turns raw bytes, a reader, or a path into a [`mesh_types::TriangleMesh`]:
//!
//! - **Binary STL** - 80-byte header, triangle count, 50-byte records
//! - **ASCII STL** - `solid` / `facet` / `vertex` text
//!
//! The encoding is detected from the content, never from a file extension.
//! Parsing is a pure function of the bytes: the same buffer always yields the
//! same mesh or the same error, and a failure never returns a partial mesh.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_stl, parse_stl};
//!
//! // From disk
//! let mesh = load_stl("pendant.stl").unwrap();
//!
//! // From an uploaded buffer
//! let bytes = std::fs::read("pendant.stl").unwrap();
//! let same = parse_stl(&bytes).unwrap();
//! assert_eq!(mesh.triangle_count(), same.triangle_count());
//! ```
//!
//! # Out of scope
//!
//! Writing STL, repairing meshes, and other mesh formats.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{StlEncoding, detect_encoding, load_stl, parse_stl, read_stl};
