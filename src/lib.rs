//! Huginn file utilities: the I/O layer of the Huginn vision pipeline
//!
//! This library provides small, stateless helpers for every file the pipeline
//! touches: YAML configs, JSON metrics, binary artifacts, and base64 image
//! payloads. Each operation logs what it did and returns a typed error
//! instead of guessing.

pub mod artifact;
pub mod dirs;
pub mod error;
pub mod image;
pub mod json;
pub mod mapping;
pub mod size;
pub mod yaml;

// Re-export the error taxonomy
pub use error::{FileUtilsError, Result};

// Re-export the configuration mapping
pub use mapping::ConfigMap;

// Re-export all file operations for convenience
pub use artifact::{load_binary, save_binary};
pub use dirs::create_directories;
pub use image::{decode_image, encode_image_to_base64};
pub use json::{load_json, save_json};
pub use size::get_size;
pub use yaml::read_yaml;
