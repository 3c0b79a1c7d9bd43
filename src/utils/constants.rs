/// Application constants used throughout the application
/// This file centralizes all application naming and branding constants

/// The display name of the application (with proper casing)
pub const APP_NAME: &str = "Tasklane";

/// The lowercase version for file names, directories, etc.
pub const APP_NAME_LOWERCASE: &str = "tasklane";

/// Short description of the application
pub const APP_DESCRIPTION_SHORT: &str = "A three-lane kanban board for the desktop";

/// Version of the application (should match Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
