use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::{FormatGuardError, Result};

/// SHA-256 fingerprint of a file's exact bytes.
///
/// Digests only support equality. There is deliberately no ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    #[must_use]
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    /// Hash a file by streaming its contents.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn of_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| FormatGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher).map_err(|source| FormatGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self(hasher.finalize().into()))
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({self})")
    }
}
