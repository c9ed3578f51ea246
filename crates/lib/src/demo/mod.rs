//! Demo chat surface: HTTP server and the self-contained widget page.

mod page;
mod server;

pub use server::{demo_router, run_demo, DemoState};
