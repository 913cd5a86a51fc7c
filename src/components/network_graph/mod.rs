mod component;
mod noise;
mod render;
mod state;
mod types;

pub use component::NetworkGraph;
pub use types::SelectionEvent;
