/// UI module exports

pub mod app;
pub mod components;
pub mod tree_view;
