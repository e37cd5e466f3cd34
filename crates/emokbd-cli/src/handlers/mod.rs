pub mod cache;
pub mod config;
pub mod layouts;
pub mod pick;
pub mod recent;
pub mod search;
