//! HTTP surface over a shared [`crate::tournament::Tournament`].
//!
//! - [`Arena`] — the tournament behind one async lock
//! - [`Server`] — actix-web server and route table
//! - [`Config`] — bind address and worker count
mod arena;
mod config;
mod handlers;
mod request;
mod response;
mod server;

pub use arena::*;
pub use config::*;
pub use handlers::*;
pub use request::*;
pub use response::*;
pub use server::*;
