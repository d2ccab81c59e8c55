//! Dotted-path configuration trees.
//!
//! [`domain::ConfigTree`] is an ordered, nested mapping addressed by paths such
//! as `"server.port"`. Sections along a path are created on demand:
//!
//! ```
//! use cfgtree::domain::ConfigTree;
//!
//! let mut root = ConfigTree::new();
//! root.set("server.port", 25565);
//!
//! assert_eq!(root.get_int("server.port"), Some(25565));
//! assert!(root.has("server"));
//! assert!(!root.has("server.host"));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
