#[path = "helpers/mod.rs"]
mod helpers;

#[path = "adapter/mod.rs"]
mod adapter;

#[path = "resolve/mod.rs"]
mod resolve;

#[path = "emit/mod.rs"]
mod emit;
