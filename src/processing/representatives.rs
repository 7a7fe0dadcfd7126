//! Curated photo selection

use crate::core::Cluster;

/// The representative (seed) of every cluster, in cluster order
pub fn select_representatives(clusters: &[Cluster]) -> Vec<String> {
	clusters.iter().map(|c| c.representative.clone()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cluster(id: usize, indices: &[usize]) -> Cluster {
		let identifiers: Vec<String> = indices.iter().map(|i| format!("{}.png", i)).collect();
		Cluster {
			id,
			indices: indices.to_vec(),
			representative: identifiers[0].clone(),
			identifiers,
			cohesion: 1.0,
		}
	}

	#[test]
	fn one_photo_per_cluster_in_order() {
		let clusters = vec![cluster(0, &[0, 2, 5]), cluster(1, &[1]), cluster(2, &[3, 4])];
		assert_eq!(select_representatives(&clusters), vec!["0.png", "1.png", "3.png"]);
	}

	#[test]
	fn no_clusters_no_photos() {
		assert!(select_representatives(&[]).is_empty());
	}
}
