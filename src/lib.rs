pub mod browser;
pub mod canonical;
pub mod catalog;
pub mod diff;
pub mod model;
pub mod remote;
pub mod store;
pub mod sync;
pub mod time_fmt;
