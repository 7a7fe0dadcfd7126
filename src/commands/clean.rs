//! Clean command - remove sidecars of deleted or modified photos

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::*;

use crate::storage::{self, OrphanReason};
use crate::ui;

pub fn run(dir: &Path, recursive: bool, auto_confirm: bool) -> anyhow::Result<()> {
	ui::info(&format!("Scanning: {}", ui::path_link(dir, 40)));

	let orphaned = storage::find_orphans(dir, recursive);

	if orphaned.is_empty() {
		ui::success("No orphaned sidecars found");
		return Ok(());
	}

	ui::warn(&format!("Found {} orphaned sidecars", orphaned.len()));
	for orphan in &orphaned {
		let reason = match orphan.reason {
			OrphanReason::Missing => "missing",
			OrphanReason::Modified => "modified",
		};
		eprintln!("  {} {}", orphan.photo_path.display().to_string().dimmed(), format!("({})", reason).yellow());
	}

	if !auto_confirm && !confirm("Delete these sidecars?", &mut io::stdin().lock())? {
		ui::info("Cancelled");
		return Ok(());
	}

	let mut deleted = 0;
	let mut errors = 0;
	for orphan in orphaned {
		match fs::remove_file(&orphan.sidecar_path) {
			Ok(_) => {
				deleted += 1;
				ui::debug(&format!("Deleted: {}", orphan.sidecar_path.display()));
			}
			Err(e) => {
				ui::error(&format!("Failed to delete {}: {}", orphan.sidecar_path.display(), e));
				errors += 1;
			}
		}
	}

	ui::success(&format!("Cleaned {} sidecars", deleted));
	if errors > 0 {
		ui::warn(&format!("{} errors", errors));
	}

	Ok(())
}

fn confirm(question: &str, input: &mut impl BufRead) -> io::Result<bool> {
	eprint!("\n{} [y/N]: ", question);
	io::stderr().flush()?;

	let mut answer = String::new();
	input.read_line(&mut answer)?;
	Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_yes_confirms() {
		assert!(confirm("?", &mut "y\n".as_bytes()).unwrap());
		assert!(confirm("?", &mut "Y".as_bytes()).unwrap());
		assert!(!confirm("?", &mut "\n".as_bytes()).unwrap());
		assert!(!confirm("?", &mut "yes please\n".as_bytes()).unwrap());
	}
}
