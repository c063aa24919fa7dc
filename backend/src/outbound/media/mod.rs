//! Remote media hosting adapters.

mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryMediaStore, CloudinarySetupError};
