//! Logger module
//!
//! Logging utilities for the server: startup banner, access logging, and
//! error output. Access log lines carry a local timestamp.

use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server started successfully!");
    println!("Listening on: http://{addr}");
    if let Some(workers) = config.workers {
        println!("Worker threads: {workers}");
    }
    println!("Endpoints:");
    println!("  GET  /                        home page");
    println!("  GET  /api                     API documentation");
    println!("  GET  /api/add/{{a}}/{{b}}         add two numbers");
    println!("  GET  /api/subtract/{{a}}/{{b}}    subtract two numbers");
    println!("  GET  /api/multiply/{{a}}/{{b}}    multiply two numbers");
    println!("  GET  /api/divide/{{a}}/{{b}}      divide two numbers");
    println!("  GET  /health                  health check");
    println!("======================================\n");
}

/// Access log line for an incoming request
pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] \"{} {} {:?}\"", timestamp(), method, uri, version);
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
