pub mod profile;
pub mod square_path;

pub use profile::{Profile, ProfilePoint};
pub use square_path::SquarePath;
