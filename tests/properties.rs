// Behavioral properties of the similarity core on randomized collections

use std::collections::BTreeSet;

use rand::prelude::*;
use rand::rngs::StdRng;

use ::curate::processing::{build_matrix, cluster, curate, find_duplicate_pairs, select_representatives, Curation};
use ::curate::{Embedding, EmbeddingRecord};

fn random_records(rng: &mut StdRng, n: usize, dim: usize) -> Vec<EmbeddingRecord> {
    // A few base directions with jitter so some pairs land above the threshold
    let bases: Vec<Vec<f32>> = (0..3)
        .map(|_| (0..dim).map(|_| rng.random_range(-1.0f32..1.0)).collect())
        .collect();

    (0..n)
        .map(|i| {
            let base = &bases[rng.random_range(0..bases.len())];
            let embedding: Vec<f32> = base.iter().map(|x| x + rng.random_range(-0.3f32..0.3)).collect();
            EmbeddingRecord::new(format!("photo_{:03}.jpg", i), embedding)
        })
        .collect()
}

fn split(records: &[EmbeddingRecord]) -> (Vec<String>, Vec<Embedding>) {
    records.iter().map(|r| (r.identifier.clone(), r.embedding.clone())).unzip()
}

#[test]
fn matrix_is_symmetric_with_unit_diagonal() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut records = random_records(&mut rng, 40, 16);
    records.push(EmbeddingRecord::new("blank.jpg", vec![0.0; 16]));

    let (_, embeddings) = split(&records);
    let m = build_matrix(&embeddings).unwrap();

    for i in 0..m.len() {
        let expected = if i == m.len() - 1 { 0.0 } else { 1.0 };
        assert_eq!(m.get(i, i), expected);
        for j in 0..m.len() {
            assert_eq!(m.get(i, j), m.get(j, i));
        }
    }
}

#[test]
fn clusters_partition_every_photo() {
    let mut rng = StdRng::seed_from_u64(23);
    for &threshold in &[0.0, 0.5, 0.85, 0.95, 1.0] {
        for n in [0, 1, 2, 17, 60] {
            let records = random_records(&mut rng, n, 8);
            let result = curate(&records, threshold).unwrap();

            let mut seen = BTreeSet::new();
            for c in &result.clusters {
                assert!(!c.is_empty());
                assert_eq!(c.seed(), *c.indices.iter().min().unwrap());
                for &i in &c.indices {
                    assert!(seen.insert(i), "index {} appears twice", i);
                }
            }
            assert_eq!(seen, (0..n).collect::<BTreeSet<_>>());
            assert_eq!(result.recommended.len(), result.clusters.len());
        }
    }
}

#[test]
fn every_member_beats_the_threshold_against_its_seed() {
    let mut rng = StdRng::seed_from_u64(5);
    let records = random_records(&mut rng, 50, 12);
    let threshold = 0.8;
    let result = curate(&records, threshold).unwrap();

    for c in &result.clusters {
        for &member in &c.indices[1..] {
            assert!(result.matrix.get(c.seed(), member) > threshold);
        }
    }
}

#[test]
fn raising_the_threshold_never_adds_pairs() {
    let mut rng = StdRng::seed_from_u64(42);
    let records = random_records(&mut rng, 50, 12);
    let (ids, embeddings) = split(&records);
    let m = build_matrix(&embeddings).unwrap();

    let thresholds = [0.3, 0.6, 0.8, 0.9, 0.97];
    for window in thresholds.windows(2) {
        let loose: BTreeSet<(usize, usize)> = find_duplicate_pairs(&m, &ids, window[0])
            .unwrap()
            .iter()
            .map(|p| (p.index1, p.index2))
            .collect();
        let strict: BTreeSet<(usize, usize)> = find_duplicate_pairs(&m, &ids, window[1])
            .unwrap()
            .iter()
            .map(|p| (p.index1, p.index2))
            .collect();
        assert!(strict.is_subset(&loose));
    }
}

#[test]
fn first_cluster_only_shrinks_as_threshold_rises() {
    let mut rng = StdRng::seed_from_u64(8);
    let records = random_records(&mut rng, 30, 6);
    let (ids, embeddings) = split(&records);
    let m = build_matrix(&embeddings).unwrap();

    let loose = cluster(&m, &ids, 0.5).unwrap();
    let strict = cluster(&m, &ids, 0.9).unwrap();
    let loose_first: BTreeSet<usize> = loose[0].indices.iter().copied().collect();
    let strict_first: BTreeSet<usize> = strict[0].indices.iter().copied().collect();
    assert!(strict_first.is_subset(&loose_first));
}

#[test]
fn pairs_are_in_ascending_order() {
    let mut rng = StdRng::seed_from_u64(99);
    let records = random_records(&mut rng, 40, 10);
    let result = curate(&records, 0.7).unwrap();

    let order: Vec<(usize, usize)> = result.duplicate_pairs.iter().map(|p| (p.index1, p.index2)).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
    assert!(order.iter().all(|(i, j)| i < j));
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    let records = random_records(&mut rng, 80, 32);

    let first = curate(&records, 0.85).unwrap();
    for _ in 0..3 {
        assert_eq!(curate(&records, 0.85).unwrap(), first);
    }
}

#[test]
fn representatives_follow_cluster_order() {
    let mut rng = StdRng::seed_from_u64(17);
    let records = random_records(&mut rng, 25, 4);
    let result = curate(&records, 0.9).unwrap();

    let seeds: Vec<usize> = result.clusters.iter().map(|c| c.seed()).collect();
    assert!(seeds.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(select_representatives(&result.clusters), result.recommended);
    for (c, rep) in result.clusters.iter().zip(&result.recommended) {
        assert_eq!(&records[c.seed()].identifier, rep);
    }
}

#[test]
fn higher_threshold_can_regroup_non_seed_members() {
    // At 0.8, A absorbs B and C stays alone. At 0.92, A no longer matches B,
    // so B seeds its own cluster and picks up C.
    let records = vec![
        EmbeddingRecord::new("A", vec![1.0, 0.0, 0.0]),
        EmbeddingRecord::new("B", vec![0.9, 0.4359, 0.0]),
        EmbeddingRecord::new("C", vec![0.7, 0.7141, 0.0]),
    ];

    let loose = curate(&records, 0.8).unwrap();
    let strict = curate(&records, 0.92).unwrap();

    let members = |r: &Curation| -> Vec<Vec<usize>> { r.clusters.iter().map(|c| c.indices.clone()).collect() };
    assert_eq!(members(&loose), vec![vec![0, 1], vec![2]]);
    assert_eq!(members(&strict), vec![vec![0], vec![1, 2]]);
}
