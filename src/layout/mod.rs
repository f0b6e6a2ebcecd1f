//! Physical layout of board blocks and placed units

/// Centred block positions on the board
pub mod board;
/// Unit slot projection and container sizing
pub mod projection;

pub use board::BoardGeometry;
pub use projection::{LayoutProjector, PhysicalPosition, Projection};
