//! Built-in practices.
//!
//! Each practice is a small unit struct implementing [`crate::practice::Practice`].
//! Existence practices treat any single qualifying artifact as sufficient;
//! content practices state their own conjunction.

pub mod ci;
pub mod docker;
pub mod gitignore;
pub mod java_gitignore;
pub mod license;
pub mod properties_file;
pub mod readme;

pub use ci::CiConfigured;
pub use docker::DockerfilePresent;
pub use gitignore::GitignorePresent;
pub use java_gitignore::JavaGitignoreCorrectlySet;
pub use license::LicensePresent;
pub use properties_file::PropertiesFileUsed;
pub use readme::ReadmePresent;

use crate::error::Result;
use crate::inspector::FileInspector;

/// Whether any of the patterns matches at least one file.
pub(crate) fn any_exists(inspector: &dyn FileInspector, patterns: &[&str]) -> Result<bool> {
    for pattern in patterns {
        if inspector.exists(pattern)? {
            return Ok(true);
        }
    }
    Ok(false)
}
