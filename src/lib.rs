pub mod config;
pub mod model;
pub mod output;
pub mod promote;
pub mod remote;
