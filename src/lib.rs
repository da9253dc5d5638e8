mod bounds;
pub mod command;
pub mod config;
mod error;
pub mod from_wkt;
mod internal_node;
mod leaf_node;
mod node;
mod quadtree;
mod rectangle;
pub mod script;
mod utils;

pub use bounds::{Bounds, Quadrant};
pub use command::{Command, Outcome};
pub use config::TreeConfig;
pub use error::{Error, ParseError, QuadtreeError, Result};
pub use internal_node::{InternalNode, LEAF_CAPACITY_FACTOR};
pub use leaf_node::LeafNode;
pub use node::{Node, SpatialNode};
pub use quadtree::Quadtree;
pub use rectangle::Rectangle;
