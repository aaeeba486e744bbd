pub mod config;
pub mod logging;

pub mod container;
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod naming;
pub mod resolver;

pub use container::{ContainerPath, DirectoryContainer, LibraryEntry};
pub use error::{ConfigError, ContainerPathError, DirectoryError, DirectoryErrorKind};
pub use resolver::{is_contained, resolve, ResolvedLibrary, ResolverConfig};
