//! Content fingerprints tying a sidecar to the photo it was extracted from

use std::fs::File;
use std::io::Read;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

const HASH_BUFFER_SIZE: usize = 65536; // 64KB

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHash(String);

impl FileHash {
	/// Hash of the file's first 64KB
	pub fn compute(path: &Path) -> std::io::Result<Self> {
		let mut buffer = Vec::with_capacity(HASH_BUFFER_SIZE);
		File::open(path)?
			.take(HASH_BUFFER_SIZE as u64)
			.read_to_end(&mut buffer)?;
		Ok(Self::from_bytes(&buffer))
	}

	pub fn from_bytes(bytes: &[u8]) -> Self {
		Self(format!("{:016x}", xxh3_64(bytes)))
	}

	/// Wrap a hash string read back from a sidecar
	pub fn from_hex(hex: impl Into<String>) -> Self {
		Self(hex.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for FileHash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
