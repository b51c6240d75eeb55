pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod grader;
pub mod matcher;
pub mod normalizer;
pub mod scanner;
pub mod sheet;
