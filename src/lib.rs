//! Docsift - extract doc-style comments from source text.
//!
//! Docsift reads source text and emits the payload of doc-comment lines
//! (lines starting with `///`, `---`, or `###`) as plain formatted text,
//! dropping everything else. Code wrapped in ``` ``` ``` fences is passed
//! through verbatim, so documentation can embed source straight from the
//! file it describes.
//!
//! # Quick Start
//!
//! ```
//! use docsift::stream::extract;
//!
//! let source = b"\
//! /// # My module
//! /// Frobnicates the widget.
//! fn frobnicate() {}
//! ";
//!
//! let docs = extract(source);
//! assert_eq!(docs, b"# My module\nFrobnicates the widget.\n");
//! ```
//!
//! # Modules
//!
//! - [`classify`] - Per-line classification state machine
//! - [`stream`] - Bounded line reading and the filter loop
//! - [`errors`] - Error types and exit-code mapping
//!
//! # Recognized markers
//!
//! - `///` (C/C++/Rust doc comments)
//! - `---` (Lua/Haskell-style comments, YAML front matter)
//! - `###` (shell/Python-style comments)
//!
//! A marker only counts in the first three bytes of a line. One space after
//! the marker is stripped; anything beyond that is payload.

pub mod classify;
pub mod errors;
pub mod stream;

// Re-export key types at crate root for convenience
pub use classify::{StreamState, DOC_MARKERS, FENCE_MARKER};
pub use errors::DocsiftError;
pub use stream::{copy_filtered, extract, MAX_LINE_LEN};
