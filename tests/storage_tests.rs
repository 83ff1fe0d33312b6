use visitor_portal::storage::{MemoryStorage, SessionStorage, StorageError};

#[cfg(test)]
mod memory_tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        storage.set_item("user", "{}".to_string()).await.unwrap();
        assert_eq!(storage.get_item("user").await.unwrap().as_deref(), Some("{}"));

        storage.set_item("user", "[]".to_string()).await.unwrap();
        assert_eq!(storage.get_item("user").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_memory_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("nothing").await.unwrap().is_none());
        // Removing an absent key is fine.
        assert!(storage.remove_item("nothing").await.is_ok());
    }

    #[tokio::test]
    async fn test_memory_clones_share_slot() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set_item("chat", "x".to_string()).await.unwrap();
        assert_eq!(handle.get_item("chat").await.unwrap().as_deref(), Some("x"));

        handle.remove_item("chat").await.unwrap();
        assert!(storage.get_item("chat").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let storage = MemoryStorage::new_failing();
        let result = storage.get_item("user").await;
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert!(storage.set_item("user", String::new()).await.is_err());
        assert!(storage.remove_item("user").await.is_err());
    }
}
