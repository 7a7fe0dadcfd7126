//! Unified logging system
//!
//! Messages go to stderr so that `--export -` can own stdout.

use colored::*;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	eprintln!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	eprintln!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	eprintln!("\n{}", format!("─── {} ───", text).bright_blue().bold());
}

/// Similarity score, green when it crosses the threshold
pub fn similarity(value: f32, threshold: f32) -> ColoredString {
	let text = format!("{:.3}", value);
	if value > threshold {
		text.bright_green()
	} else {
		text.dimmed()
	}
}

/// Clickable file path (OSC 8 terminal hyperlink)
///
/// Identifiers that are not paths on disk are shown as plain text.
pub fn path_link(path: &Path, max_len: usize) -> String {
	let display_name = truncate(
		path.file_name()
			.and_then(|n| n.to_str())
			.unwrap_or_else(|| path.to_str().unwrap_or("unknown")),
		max_len,
	);

	let Ok(absolute) = path.canonicalize() else {
		return display_name;
	};

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, display_name)
}

fn truncate(name: &str, max_len: usize) -> String {
	let chars: Vec<char> = name.chars().collect();
	if chars.len() <= max_len || max_len < 8 {
		return name.to_string();
	}
	let head: String = chars[..max_len / 2].iter().collect();
	let tail: String = chars[chars.len() - (max_len / 2 - 3)..].iter().collect();
	format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn long_names_are_shortened_around_the_middle() {
		let name = "IMG_20240812_183455_burst_0001_cover.jpg";
		let short = truncate(name, 20);
		assert_eq!(short, "IMG_202408...ver.jpg");
		assert_eq!(short.chars().count(), 20);
	}

	#[test]
	fn short_names_are_kept() {
		assert_eq!(truncate("a.jpg", 20), "a.jpg");
	}

	#[test]
	fn missing_files_render_as_plain_names() {
		let link = path_link(Path::new("/definitely/not/here/beach.jpg"), 40);
		assert_eq!(link, "beach.jpg");
	}
}
