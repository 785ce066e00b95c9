pub mod feeds;
pub mod jobs;
pub mod pages;
pub mod probes;
