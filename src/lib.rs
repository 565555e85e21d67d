pub mod config;
pub mod locale;
pub mod model;
pub mod video;
pub mod web;
