pub mod directory;
pub mod seed;

pub use directory::Directory;
pub use seed::seed_directory;
