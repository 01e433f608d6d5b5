//! Artwork data model

mod artwork;
pub mod display;
mod field;
mod id;

pub use artwork::Artwork;
pub use field::Field;
pub use id::ArtworkId;
