use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resumable checkpoint for one document's chunking run: the char cursor into
/// the source text, the next chunk index to assign and a terminal completion
/// flag. At most one record exists per document; the position never moves
/// backwards and completion flips false to true exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkingProgress {
    document_id: Uuid,
    position: usize,
    chunk_index: i32,
    is_complete: bool,
    updated_at: DateTime<Utc>,
}

impl ChunkingProgress {
    pub fn new(document_id: Uuid) -> Self {
        Self {
            document_id,
            position: 0,
            chunk_index: 0,
            is_complete: false,
            updated_at: Utc::now(),
        }
    }

    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn chunk_index(&self) -> i32 {
        self.chunk_index
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Move the checkpoint forward. The position is monotonically
    /// non-decreasing; a smaller position means a stale or duplicated step.
    pub fn advance(&mut self, position: usize, chunk_index: i32) -> Result<(), String> {
        if self.is_complete {
            return Err("chunking already completed for this document".to_string());
        }
        if position < self.position {
            return Err(format!(
                "position {} is behind the checkpoint at {}",
                position, self.position
            ));
        }

        self.position = position;
        self.chunk_index = chunk_index;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Terminal transition; valid exactly once.
    pub fn complete(&mut self) -> Result<(), String> {
        if self.is_complete {
            return Err("chunking already completed for this document".to_string());
        }

        self.is_complete = true;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_progress() {
        let progress = ChunkingProgress::new(Uuid::new_v4());
        assert_eq!(progress.position(), 0);
        assert_eq!(progress.chunk_index(), 0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_advance_moves_cursor() {
        let mut progress = ChunkingProgress::new(Uuid::new_v4());
        assert!(progress.advance(200, 1).is_ok());
        assert_eq!(progress.position(), 200);
        assert_eq!(progress.chunk_index(), 1);
    }

    #[test]
    fn test_position_never_moves_backwards() {
        let mut progress = ChunkingProgress::new(Uuid::new_v4());
        progress.advance(200, 1).unwrap();
        assert!(progress.advance(100, 2).is_err());
        assert_eq!(progress.position(), 200);
    }

    #[test]
    fn test_advance_same_position_is_allowed() {
        let mut progress = ChunkingProgress::new(Uuid::new_v4());
        progress.advance(50, 1).unwrap();
        assert!(progress.advance(50, 1).is_ok());
    }

    #[test]
    fn test_completion_is_terminal() {
        let mut progress = ChunkingProgress::new(Uuid::new_v4());
        progress.advance(500, 3).unwrap();
        assert!(progress.complete().is_ok());
        assert!(progress.is_complete());

        assert!(progress.complete().is_err());
        assert!(progress.advance(600, 4).is_err());
    }
}
