//! MCP server for the Open-Meteo weather APIs.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! Open-Meteo forecast and archive queries as tools, and common weather
//! questions as prompts, to AI assistants.

pub mod health;
pub mod prompts;
mod server;
pub mod tools;

pub use server::{MCP_PATH, MeteoMcpServer, ServerError};
