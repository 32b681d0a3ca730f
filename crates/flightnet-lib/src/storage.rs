use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the saved network.
const NETWORK_FILENAME: &str = "network.fnsn";

/// Environment variable that overrides the default network location.
pub const NETWORK_PATH_ENV: &str = "FLIGHTNET_NETWORK";

/// Resolve the default network location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "flightnet", "flightnet").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Pick the network file to operate on.
///
/// An explicit path wins, then the `FLIGHTNET_NETWORK` environment variable,
/// then [`default_network_path`].
pub fn resolve_network_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit network path");
        return Ok(path.to_path_buf());
    }

    if let Some(value) = env::var_os(NETWORK_PATH_ENV).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(value);
        debug!(path = %path.display(), "using network path from environment");
        return Ok(path);
    }

    default_network_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/custom.json");
        assert_eq!(resolve_network_path(Some(path)).unwrap(), path);
    }

    #[test]
    fn default_path_uses_network_filename() {
        if let Ok(path) = default_network_path() {
            assert_eq!(path.file_name().unwrap(), NETWORK_FILENAME);
        }
    }
}
