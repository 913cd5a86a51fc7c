mod component;
mod service;
mod transcript;

pub use component::ChatWidget;
