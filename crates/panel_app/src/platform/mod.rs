pub mod app;
pub mod dom;
pub mod effects;
pub mod events;
pub mod logging;
pub mod media;
pub mod render;
