#![warn(clippy::all, clippy::pedantic, clippy::nursery, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]
#![forbid(unsafe_code)]
pub mod client;
pub mod flickr;
pub mod page;
pub mod photo;
pub mod pipeline;
pub mod source;
pub mod store;
