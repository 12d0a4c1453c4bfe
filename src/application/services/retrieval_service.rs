use std::cmp::Ordering;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::DocumentChunk;
use crate::domain::repositories::ChunkRepository;
use crate::domain::similarity::cosine_similarity;

#[derive(Debug)]
pub enum RetrievalError {
    RepositoryError(String),
    VectorError(String),
}

impl std::fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrievalError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            RetrievalError::VectorError(msg) => write!(f, "Vector error: {}", msg),
        }
    }
}

impl std::error::Error for RetrievalError {}

/// Which chunks are eligible for a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchScope {
    All,
    Document(Uuid),
}

#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub chunk: DocumentChunk,
    pub score: f32,
}

/// Brute-force nearest-neighbor search over stored embeddings: load every
/// candidate in scope, score it against the query vector, rank descending.
/// O(candidates x dimension) per search, which is fine at resume-corpus scale.
pub struct RetrievalService {
    chunk_repository: Arc<dyn ChunkRepository>,
}

impl RetrievalService {
    pub fn new(chunk_repository: Arc<dyn ChunkRepository>) -> Self {
        Self { chunk_repository }
    }

    pub async fn search(
        &self,
        query_vector: &[f32],
        scope: SearchScope,
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, RetrievalError> {
        let candidates = match scope {
            SearchScope::Document(document_id) => {
                self.chunk_repository.find_by_document_id(document_id).await
            }
            SearchScope::All => self.chunk_repository.find_all().await,
        }
        .map_err(|e| RetrievalError::RepositoryError(e.to_string()))?;

        let mut scored = Vec::with_capacity(candidates.len());
        for chunk in candidates {
            let score = cosine_similarity(chunk.embedding(), query_vector)
                .map_err(|e| RetrievalError::VectorError(e.to_string()))?;
            scored.push(ScoredChunk { chunk, score });
        }

        // Stable sort keeps the original retrieval order for equal scores.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(limit);

        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::repositories::chunk_repository::ChunkRepositoryError;
    use crate::infrastructure::persistence::InMemoryChunkRepository;

    async fn seed(
        repository: &InMemoryChunkRepository,
        document_id: Uuid,
        index: i32,
        text: &str,
        embedding: Vec<f32>,
    ) -> Result<(), ChunkRepositoryError> {
        repository
            .save(&DocumentChunk::new(
                document_id,
                index,
                text.to_string(),
                embedding,
            ))
            .await
    }

    #[tokio::test]
    async fn test_results_ranked_descending() {
        let repository = InMemoryChunkRepository::new();
        let document_id = Uuid::new_v4();

        seed(&repository, document_id, 0, "off-axis", vec![0.0, 1.0]).await.unwrap();
        seed(&repository, document_id, 1, "aligned", vec![1.0, 0.0]).await.unwrap();
        seed(&repository, document_id, 2, "diagonal", vec![1.0, 1.0]).await.unwrap();

        let service = RetrievalService::new(Arc::new(repository));
        let results = service
            .search(&[1.0, 0.0], SearchScope::All, 10)
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].chunk.text(), "aligned");
        assert_eq!(results[1].chunk.text(), "diagonal");
        assert_eq!(results[2].chunk.text(), "off-axis");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[tokio::test]
    async fn test_limit_bounds_result_count() {
        let repository = InMemoryChunkRepository::new();
        let document_id = Uuid::new_v4();
        for index in 0..5 {
            seed(
                &repository,
                document_id,
                index,
                &format!("chunk {}", index),
                vec![index as f32 + 1.0, 1.0],
            )
            .await
            .unwrap();
        }

        let service = RetrievalService::new(Arc::new(repository));

        let results = service.search(&[1.0, 1.0], SearchScope::All, 2).await.unwrap();
        assert_eq!(results.len(), 2);

        // A generous limit returns at most the candidate count.
        let results = service.search(&[1.0, 1.0], SearchScope::All, 50).await.unwrap();
        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn test_document_scope_filters_candidates() {
        let repository = InMemoryChunkRepository::new();
        let target = Uuid::new_v4();
        let other = Uuid::new_v4();

        seed(&repository, target, 0, "in scope", vec![1.0, 0.0]).await.unwrap();
        seed(&repository, other, 0, "out of scope", vec![1.0, 0.0]).await.unwrap();

        let service = RetrievalService::new(Arc::new(repository));
        let results = service
            .search(&[1.0, 0.0], SearchScope::Document(target), 10)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk.text(), "in scope");
    }

    #[tokio::test]
    async fn test_identical_embedding_scores_one() {
        let repository = InMemoryChunkRepository::new();
        let document_id = Uuid::new_v4();
        let embedding = vec![0.3, -0.7, 0.9];

        seed(&repository, document_id, 0, "Skilled in Go and Rust.", embedding.clone())
            .await
            .unwrap();

        let service = RetrievalService::new(Arc::new(repository));
        let results = service
            .search(&embedding, SearchScope::Document(document_id), 5)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_dimension_mismatch_is_an_error() {
        let repository = InMemoryChunkRepository::new();
        seed(&repository, Uuid::new_v4(), 0, "text", vec![1.0, 2.0, 3.0]).await.unwrap();

        let service = RetrievalService::new(Arc::new(repository));
        let result = service.search(&[1.0, 2.0], SearchScope::All, 5).await;

        assert!(matches!(result, Err(RetrievalError::VectorError(_))));
    }

    #[tokio::test]
    async fn test_ties_keep_retrieval_order() {
        let repository = InMemoryChunkRepository::new();
        let document_id = Uuid::new_v4();

        // Parallel vectors: identical scores, order must be the stored order.
        seed(&repository, document_id, 0, "first", vec![1.0, 0.0]).await.unwrap();
        seed(&repository, document_id, 1, "second", vec![2.0, 0.0]).await.unwrap();

        let service = RetrievalService::new(Arc::new(repository));
        let results = service.search(&[1.0, 0.0], SearchScope::All, 10).await.unwrap();

        assert_eq!(results[0].chunk.text(), "first");
        assert_eq!(results[1].chunk.text(), "second");
    }
}
