//! Integration tests for embedding storage and nearest-neighbor retrieval
//!
//! Uses a deterministic transformer stub over an in-memory database, so the
//! ranking behavior of the real pipeline is exercised without a provider.

use async_trait::async_trait;
use jana_core::{
    Database, EmbeddingService, EmbeddingStore, EmbeddingTransformer, JanaError, Result,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Transformer stub that maps known texts to fixed vectors
struct TableTransformer {
    vectors: HashMap<&'static str, Vec<f32>>,
    dimension: usize,
}

#[async_trait]
impl EmbeddingTransformer for TableTransformer {
    async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>> {
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| JanaError::MalformedResponse(format!("no vector for: {}", text)))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "table"
    }

    fn model(&self) -> &str {
        "test-embedding-model"
    }
}

/// Transformer stub that always fails like an unreachable provider
struct FailingTransformer;

#[async_trait]
impl EmbeddingTransformer for FailingTransformer {
    async fn generate_embedding(&self, _text: &str) -> Result<Vec<f32>> {
        Err(JanaError::Provider {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }

    fn dimension(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "failing-model"
    }
}

/// Fruit cluster points one way, tech cluster the other
fn cluster_vectors() -> HashMap<&'static str, Vec<f32>> {
    let mut vectors = HashMap::new();
    vectors.insert("apple fruit red delicious", vec![0.1, 0.1, 0.0, 0.0]);
    vectors.insert("banana yellow fruit tropical", vec![0.2, 0.2, 0.0, 0.0]);
    vectors.insert("orange citrus fruit", vec![0.3, 0.3, 0.0, 0.0]);
    vectors.insert("computer technology device", vec![0.0, 0.0, 0.2, 0.2]);
    vectors.insert("smartphone mobile technology", vec![0.0, 0.0, 0.3, 0.3]);
    vectors.insert("technology device", vec![0.0, 0.0, 0.9, 0.9]);
    vectors.insert("This is a test embedding", vec![0.5, 0.5, 0.5, 0.5]);
    vectors
}

fn store_with_table() -> EmbeddingStore {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();
    let service = EmbeddingService::new(Arc::new(TableTransformer {
        vectors: cluster_vectors(),
        dimension: 4,
    }));
    EmbeddingStore::new(db, service)
}

#[tokio::test]
async fn stored_embedding_is_retrievable() {
    let store = store_with_table();

    let record = store
        .store_embedding("This is a test embedding", "test", Some("123"))
        .await
        .unwrap();

    assert_eq!(record.content_type, "test");
    assert_eq!(record.content_id.as_deref(), Some("123"));
    assert_eq!(record.model, "test-embedding-model");
    assert_eq!(record.dimension, 4);
    assert_eq!(record.dimension, record.vector.len());
    assert!(!record.vector.is_empty());

    let fetched = store.db().get_embedding(record.id).unwrap().unwrap();
    assert_eq!(fetched.text, "This is a test embedding");
    assert_eq!(fetched.vector, record.vector);
}

#[tokio::test]
async fn tech_query_ranks_tech_cluster_first() {
    let store = store_with_table();

    for text in [
        "apple fruit red delicious",
        "banana yellow fruit tropical",
        "orange citrus fruit",
        "computer technology device",
        "smartphone mobile technology",
    ] {
        store.store_embedding(text, "test", None).await.unwrap();
    }

    let results = store
        .find_similar_by_text("technology device", Some("test"), 2)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    let texts: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
    assert!(texts.contains(&"computer technology device"));
    assert!(texts.contains(&"smartphone mobile technology"));

    for result in &results {
        let distance = result.distance.expect("distance attached");
        assert!(distance < 0.5, "tech cluster should be close, got {}", distance);
        assert!(result.similarity().unwrap() > 0.5);
    }
}

#[tokio::test]
async fn content_type_filter_restricts_results() {
    let store = store_with_table();

    store
        .store_embedding("computer technology device", "test", None)
        .await
        .unwrap();
    store
        .store_embedding("smartphone mobile technology", "other", None)
        .await
        .unwrap();

    let results = store
        .find_similar_by_text("technology device", Some("other"), 10)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].content_type, "other");
}

#[tokio::test]
async fn identical_text_stored_twice_creates_two_records() {
    let store = store_with_table();

    store
        .store_embedding("orange citrus fruit", "test", None)
        .await
        .unwrap();
    store
        .store_embedding("orange citrus fruit", "test", None)
        .await
        .unwrap();

    assert_eq!(store.db().count_embeddings().unwrap(), 2);
}

#[tokio::test]
async fn provider_failure_propagates_and_stores_nothing() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();
    let store = EmbeddingStore::new(db, EmbeddingService::new(Arc::new(FailingTransformer)));

    let err = store
        .store_embedding("anything", "test", None)
        .await
        .unwrap_err();

    assert!(matches!(err, JanaError::Provider { status: 503, .. }));
    assert!(err.is_provider_failure());
    assert_eq!(store.db().count_embeddings().unwrap(), 0);
}

#[tokio::test]
async fn similar_texts_score_high_and_unrelated_low() {
    // Deterministic stand-ins for the provider-dependent sentence scenarios
    let mut vectors = HashMap::new();
    vectors.insert(
        "The quick brown fox jumps over the lazy dog.",
        vec![0.8, 0.59, 0.05, 0.02],
    );
    vectors.insert(
        "The quick brown fox jumped over the lazy dog.",
        vec![0.79, 0.6, 0.06, 0.02],
    );
    vectors.insert("Simmer the sauce over low heat.", vec![0.05, 0.9, 0.02, 0.1]);
    vectors.insert(
        "The rocket reached orbit after launch.",
        vec![0.9, 0.02, 0.1, 0.05],
    );

    let service = EmbeddingService::new(Arc::new(TableTransformer {
        vectors,
        dimension: 4,
    }));

    let a = service
        .generate_embedding("The quick brown fox jumps over the lazy dog.")
        .await
        .unwrap();
    let b = service
        .generate_embedding("The quick brown fox jumped over the lazy dog.")
        .await
        .unwrap();
    assert!(service.calculate_similarity(&a, &b) > 0.9);

    let cooking = service
        .generate_embedding("Simmer the sauce over low heat.")
        .await
        .unwrap();
    let space = service
        .generate_embedding("The rocket reached orbit after launch.")
        .await
        .unwrap();
    assert!(service.calculate_similarity(&cooking, &space) < 0.3);
}
