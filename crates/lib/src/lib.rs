//! SupportAgent demo core library — config, support API client, canned
//! replies, markup formatting, transcripts, and the demo web server
//! used by the `supportagent` CLI.

pub mod agent;
pub mod config;
pub mod demo;
pub mod markup;
pub mod resolver;
pub mod responses;
pub mod transcript;
