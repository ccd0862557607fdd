mod catalog;
mod chart;
mod config;
mod cost;
mod resolve;
mod utils;
