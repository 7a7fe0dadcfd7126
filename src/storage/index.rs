//! Sidecar discovery and loading

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{REPORT_FILE, SIDECAR_DIR, SIDECAR_EXT};
use crate::core::{EmbeddingRecord, FileHash};
use crate::ui;

use super::sidecar::Sidecar;

/// A sidecar file and the directory holding the photo it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarEntry {
	pub sidecar_path: PathBuf,
	pub media_dir: PathBuf,
}

/// Embeddings ready for the similarity core, plus discovery counts
#[derive(Debug, Default)]
pub struct LoadedEmbeddings {
	/// Ordered by identifier, one record per photo
	pub records: Vec<EmbeddingRecord>,
	/// Sidecars discovered
	pub total: usize,
	/// Sidecars that could not be read
	pub failed: usize,
	/// Extra sidecars for one photo whose hash no longer matches it
	pub stale: usize,
}

/// A readable sidecar and the photo it names
struct Candidate {
	identifier: String,
	photo_path: PathBuf,
	sidecar_path: PathBuf,
	sidecar: Sidecar,
}

/// Why a sidecar no longer describes a photo on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanReason {
	Missing,
	Modified,
}

#[derive(Debug, Clone)]
pub struct Orphan {
	pub sidecar_path: PathBuf,
	pub photo_path: PathBuf,
	pub reason: OrphanReason,
}

/// Scan directory for all sidecars
pub fn scan(root: &Path, recursive: bool) -> Vec<SidecarEntry> {
	// root/.curate/x.msgpack sits at depth 2
	let max_depth = if recursive { usize::MAX } else { 2 };

	WalkDir::new(root)
		.min_depth(2)
		.max_depth(max_depth)
		.sort_by_file_name()
		.into_iter()
		.filter_map(|e| e.ok())
		.filter(|e| e.file_type().is_file() && is_sidecar(e.path()))
		.filter_map(|e| {
			let sidecar_path = e.into_path();
			let media_dir = sidecar_path.parent()?.parent()?.to_path_buf();
			Some(SidecarEntry { sidecar_path, media_dir })
		})
		.collect()
}

fn is_sidecar(path: &Path) -> bool {
	let in_sidecar_dir = path
		.parent()
		.and_then(|p| p.file_name())
		.is_some_and(|name| name == SIDECAR_DIR);
	let has_ext = path.extension().and_then(|s| s.to_str()) == Some(SIDECAR_EXT);
	let is_report = path.file_name().is_some_and(|name| name == REPORT_FILE);

	in_sidecar_dir && has_ext && !is_report
}

/// Load every sidecar under `dir` as an ordered, duplicate-free record list.
///
/// Records are sorted by photo path; unreadable sidecars are counted and
/// skipped. A photo that was edited and re-extracted has one sidecar per
/// version: the one whose hash matches the file on disk wins, and if none
/// does the photo is left out. The losers are counted as stale.
pub fn load_all(dir: &Path, recursive: bool) -> LoadedEmbeddings {
	let entries = scan(dir, recursive);
	let total = entries.len();
	let mut failed = 0;
	let mut candidates = Vec::with_capacity(total);

	for entry in entries {
		match super::sidecar::load(&entry.sidecar_path) {
			Ok(sidecar) => {
				ui::debug(&format!(
					"Read {} (extractor {})",
					entry.sidecar_path.display(),
					sidecar.version()
				));
				let photo_path = entry.media_dir.join(sidecar.filename());
				candidates.push(Candidate {
					identifier: photo_path.to_string_lossy().to_string(),
					photo_path,
					sidecar_path: entry.sidecar_path,
					sidecar,
				});
			}
			Err(e) => {
				ui::debug(&format!("Skipping {}: {:#}", entry.sidecar_path.display(), e));
				failed += 1;
			}
		}
	}

	candidates.sort_by(|a, b| {
		a.identifier
			.cmp(&b.identifier)
			.then_with(|| a.sidecar_path.cmp(&b.sidecar_path))
	});

	let mut records = Vec::with_capacity(candidates.len());
	let mut stale = 0;

	for group in candidates.chunk_by(|a, b| a.identifier == b.identifier) {
		let chosen = match group {
			[only] => Some(only),
			_ => {
				let current = FileHash::compute(&group[0].photo_path).ok();
				let fresh = group.iter().find(|c| current.as_ref() == Some(&c.sidecar.hash()));
				stale += group.len() - usize::from(fresh.is_some());
				if fresh.is_none() {
					ui::debug(&format!(
						"No sidecar matches {}, leaving it out",
						group[0].photo_path.display()
					));
				}
				fresh
			}
		};

		if let Some(c) = chosen {
			records.push(EmbeddingRecord::new(c.identifier.clone(), c.sidecar.embedding()));
		}
	}

	LoadedEmbeddings {
		records,
		total,
		failed,
		stale,
	}
}

/// Sidecars whose photo was deleted or changed since extraction
pub fn find_orphans(dir: &Path, recursive: bool) -> Vec<Orphan> {
	let mut orphans = Vec::new();

	for entry in scan(dir, recursive) {
		let Ok(sidecar) = super::sidecar::load(&entry.sidecar_path) else {
			continue;
		};
		let photo_path = entry.media_dir.join(sidecar.filename());

		let reason = if !photo_path.exists() {
			OrphanReason::Missing
		} else {
			match FileHash::compute(&photo_path) {
				Ok(hash) if hash == sidecar.hash() => continue,
				_ => OrphanReason::Modified,
			}
		};

		orphans.push(Orphan {
			sidecar_path: entry.sidecar_path,
			photo_path,
			reason,
		});
	}

	orphans
}
