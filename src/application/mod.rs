/// Two-stage request pipelines
pub mod chain;
/// Client facade over the executor and the task queue
pub mod client;
/// Application configuration module
pub mod config;
/// In-process worker pool running tasks
pub mod queue;
/// Task command objects
pub mod task;
/// One constructor per Client Portal endpoint
pub mod tasks;
