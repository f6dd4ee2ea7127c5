mod scaffold_filesystem;

pub use scaffold_filesystem::ScaffoldFilesystem;
