pub mod chat;
pub mod content_panel;
pub mod network_graph;
