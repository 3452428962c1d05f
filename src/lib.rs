// Library exports for gridsweep
pub mod connectivity;
pub mod error;
pub mod grid;
pub mod scan;
pub mod union_find;

pub use connectivity::ConnectivityModel;
pub use error::GridError;
pub use grid::{Classification, GridBuffer, PixelSource};
pub use scan::GridConnectivityBuilder;
pub use union_find::DisjointSet;
