//! Archive container formats

use serde::{Deserialize, Serialize};

/// Compression container used for project snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArchiveFormat {
    /// Zip container with deflate compression
    #[default]
    #[serde(rename = "zip")]
    Zip,
    /// Tar stream wrapped in gzip
    #[serde(rename = "tar.gz")]
    TarGz,
}

impl ArchiveFormat {
    /// File extension for artifacts in this format (without the leading dot)
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ArchiveFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zip" => Ok(Self::Zip),
            "tar.gz" | "targz" | "tar-gz" | "tgz" => Ok(Self::TarGz),
            _ => Err(format!("Unknown archive format: {s}. Use 'zip' or 'tar.gz'")),
        }
    }
}
