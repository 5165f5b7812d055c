pub mod config;
pub mod logging;

pub mod content_index;
pub mod endpoint;
pub mod menu;
pub mod render;
pub mod resolver;
pub mod url_model;
