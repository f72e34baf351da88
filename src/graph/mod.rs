pub mod adj_list;
pub mod traits;

pub use adj_list::AdjListGraph;
pub use traits::{Graph, NodeId};
