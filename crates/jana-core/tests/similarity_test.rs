//! Similarity ranking tests for the embedding service

use async_trait::async_trait;
use jana_core::{
    cosine_similarity, EmbeddingCandidate, EmbeddingService, EmbeddingTransformer, Result,
};
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;

/// Transformer stub that always returns the same vector
struct FixedTransformer {
    vector: Vec<f32>,
}

#[async_trait]
impl EmbeddingTransformer for FixedTransformer {
    async fn generate_embedding(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(self.vector.clone())
    }

    fn dimension(&self) -> usize {
        self.vector.len()
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn model(&self) -> &str {
        "fixed-test-model"
    }
}

fn service() -> EmbeddingService {
    EmbeddingService::new(Arc::new(FixedTransformer {
        vector: vec![1.0, 0.0, 0.0],
    }))
}

fn candidate(id: &str, embedding: Vec<f32>) -> EmbeddingCandidate {
    EmbeddingCandidate {
        id: id.to_string(),
        embedding,
        data: None,
    }
}

#[test]
fn results_are_sorted_descending_and_limited() {
    let service = service();
    let query = vec![1.0, 0.0];
    let candidates = vec![
        candidate("far", vec![0.0, 1.0]),
        candidate("near", vec![1.0, 0.1]),
        candidate("mid", vec![1.0, 1.0]),
    ];

    let matches = service.find_similar(&query, &candidates, 2);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "near");
    assert_eq!(matches[1].id, "mid");
    assert!(matches[0].similarity >= matches[1].similarity);
}

#[test]
fn empty_query_or_candidates_yield_nothing() {
    let service = service();
    assert!(service.find_similar(&[], &[candidate("a", vec![1.0])], 5).is_empty());
    assert!(service.find_similar(&[1.0], &[], 5).is_empty());
}

#[test]
fn incomplete_candidates_are_skipped() {
    let service = service();
    let query = vec![1.0, 0.0];
    let candidates = vec![
        candidate("", vec![1.0, 0.0]),
        candidate("no-embedding", vec![]),
        candidate("kept", vec![1.0, 0.0]),
    ];

    let matches = service.find_similar(&query, &candidates, 10);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "kept");
}

#[test]
fn equal_scores_keep_insertion_order() {
    let service = service();
    let query = vec![1.0, 0.0];
    let candidates = vec![
        candidate("first", vec![2.0, 0.0]),
        candidate("second", vec![3.0, 0.0]),
        candidate("third", vec![4.0, 0.0]),
    ];

    let matches = service.find_similar(&query, &candidates, 10);
    let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn candidate_data_is_carried_through() {
    let service = service();
    let candidates = vec![EmbeddingCandidate {
        id: "with-data".to_string(),
        embedding: vec![1.0, 0.0],
        data: Some(json!({"source": "note"})),
    }];

    let matches = service.find_similar(&[1.0, 0.0], &candidates, 1);
    assert_eq!(matches[0].data, Some(json!({"source": "note"})));
}

proptest! {
    #[test]
    fn self_similarity_is_one(v in prop::collection::vec(-100.0f32..100.0, 1..64)) {
        prop_assume!(v.iter().any(|x| x.abs() > 1e-3));
        let sim = cosine_similarity(&v, &v);
        prop_assert!((sim - 1.0).abs() < 1e-3);
    }

    #[test]
    fn similarity_is_symmetric(
        a in prop::collection::vec(-100.0f32..100.0, 1..64),
        b in prop::collection::vec(-100.0f32..100.0, 1..64),
    ) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-4);
    }

    #[test]
    fn similarity_stays_in_range(
        a in prop::collection::vec(-100.0f32..100.0, 1..64),
        b in prop::collection::vec(-100.0f32..100.0, 1..64),
    ) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!((-1.0 - 1e-4..=1.0 + 1e-4).contains(&sim));
    }
}
