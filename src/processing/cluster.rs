//! Seed-anchored greedy clustering over a similarity matrix

use super::duplicates::check_identifiers;
use crate::core::error::{check_threshold, Result};
use crate::core::{Cluster, SimilarityMatrix};

/// Partitions photos into near-duplicate clusters in a single sweep.
///
/// Photos are taken in order. Each photo not yet assigned becomes the seed of
/// a new cluster and absorbs every later unassigned photo whose similarity to
/// the *seed* is strictly above `threshold`. Members are never compared with
/// each other, so two members of one cluster need not be similar themselves.
pub fn cluster(
	matrix: &SimilarityMatrix,
	identifiers: &[String],
	threshold: f32,
) -> Result<Vec<Cluster>> {
	check_threshold(threshold)?;
	check_identifiers(matrix, identifiers)?;

	let n = matrix.len();
	let mut visited = vec![false; n];
	let mut clusters = Vec::new();

	for seed in 0..n {
		if visited[seed] {
			continue;
		}
		visited[seed] = true;
		let mut indices = vec![seed];

		for j in (seed + 1)..n {
			if !visited[j] && matrix.get(seed, j) > threshold {
				indices.push(j);
				visited[j] = true;
			}
		}

		clusters.push(Cluster {
			id: clusters.len(),
			identifiers: indices.iter().map(|&i| identifiers[i].clone()).collect(),
			representative: identifiers[seed].clone(),
			cohesion: cohesion(matrix, &indices),
			indices,
		});
	}

	crate::ui::debug(&format!(
		"Grouped {} photos into {} clusters at threshold {}",
		n,
		clusters.len(),
		threshold
	));

	Ok(clusters)
}

/// Mean pairwise similarity among members
fn cohesion(matrix: &SimilarityMatrix, indices: &[usize]) -> f32 {
	if indices.len() < 2 {
		return 1.0;
	}

	let mut total = 0.0;
	let mut count = 0;
	for (a, &i) in indices.iter().enumerate() {
		for &j in &indices[a + 1..] {
			total += matrix.get(i, j);
			count += 1;
		}
	}

	total / count as f32
}
