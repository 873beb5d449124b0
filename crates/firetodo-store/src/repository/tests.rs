//! Repository Integration Tests
//!
//! Store-and-mirror scenarios against the in-memory backend.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::actions;
    use crate::domain::{Item, ItemId, ItemInput, StoreError, StoreResult};
    use crate::mirror::{apply_change, ItemChange};
    use crate::repository::{ItemStore, MemoryStore};

    /// Backend that rejects every call
    struct UnreachableStore;

    #[async_trait]
    impl ItemStore for UnreachableStore {
        async fn list(&self) -> StoreResult<Vec<Item>> {
            Err(StoreError::Network("connection refused".to_string()))
        }

        async fn insert(&self, _input: &ItemInput) -> StoreResult<ItemId> {
            Err(StoreError::Network("connection refused".to_string()))
        }

        async fn set_completed(&self, _id: &ItemId, _completed: bool) -> StoreResult<()> {
            Err(StoreError::Auth("permission denied".to_string()))
        }

        async fn remove(&self, _id: &ItemId) -> StoreResult<()> {
            Err(StoreError::Network("connection refused".to_string()))
        }
    }

    /// Apply a confirmed change; reports whether there was one
    fn confirm(mirror: &mut Vec<Item>, change: Option<ItemChange>) -> bool {
        match change {
            Some(change) => {
                apply_change(mirror, change);
                true
            }
            None => false,
        }
    }

    #[tokio::test]
    async fn test_insert_returns_id_and_item_appears_once() {
        let store = MemoryStore::new();

        let id = store.insert(&ItemInput::new("Buy milk")).await.expect("Insert failed");
        assert!(!id.is_empty());

        let items = store.list().await.expect("List failed");
        assert_eq!(items.iter().filter(|i| i.id == id).count(), 1);
    }

    #[tokio::test]
    async fn test_buy_milk_scenario() {
        let store = MemoryStore::new();
        let mut mirror = Vec::new();

        let added = actions::submit(&store, "Buy milk").await;
        assert!(confirm(&mut mirror, added));

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "Buy milk");
        assert!(!listed[0].completed);
        assert_eq!(mirror, listed);

        let id = listed[0].id.clone();
        let toggled = actions::toggle(&store, &mirror, &id).await;
        assert!(confirm(&mut mirror, toggled));
        assert!(store.list().await.unwrap()[0].completed);
        assert!(mirror[0].completed);

        let toggled = actions::toggle(&store, &mirror, &id).await;
        assert!(confirm(&mut mirror, toggled));
        assert!(!store.list().await.unwrap()[0].completed);
        assert!(!mirror[0].completed);

        let removed = actions::remove(&store, &id).await;
        assert!(confirm(&mut mirror, removed));
        assert!(store.list().await.unwrap().is_empty());
        assert!(mirror.is_empty());
    }

    #[tokio::test]
    async fn test_two_inserts_have_distinct_ids() {
        let store = MemoryStore::new();
        let mut mirror = Vec::new();

        for text in ["A", "B"] {
            let added = actions::submit(&store, text).await;
            assert!(confirm(&mut mirror, added));
        }

        let listed = store.list().await.unwrap();
        let texts: Vec<&str> = listed.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
        assert_ne!(listed[0].id, listed[1].id);
    }

    #[tokio::test]
    async fn test_blank_entry_creates_nothing() {
        let store = MemoryStore::new();

        assert!(actions::submit(&store, "").await.is_none());
        assert!(actions::submit(&store, "   \t\n").await.is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_entry_text_is_stored_as_typed() {
        let store = MemoryStore::new();
        actions::submit(&store, "  padded ").await.unwrap();
        assert_eq!(store.list().await.unwrap()[0].text, "  padded ");
    }

    #[tokio::test]
    async fn test_double_toggle_restores_original() {
        let existing = ItemInput {
            text: "Done already".to_string(),
            completed: true,
            created_at: "2024-05-01T10:00:00.000Z".to_string(),
        }
        .into_item(ItemId::new("seed"));
        let store = MemoryStore::with_items(vec![existing.clone()]);
        let mut mirror = vec![existing.clone()];

        for _ in 0..2 {
            let change = actions::toggle(&store, &mirror, &existing.id).await;
            assert!(confirm(&mut mirror, change));
        }

        assert_eq!(mirror, vec![existing.clone()]);
        assert_eq!(store.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn test_toggle_unknown_item_skips_backend() {
        let mut mirror = Vec::new();
        // Would fail if it reached the backend; an unknown id must not get that far
        let change = actions::toggle(&UnreachableStore, &mirror, &ItemId::new("nope")).await;
        assert!(!confirm(&mut mirror, change));
    }

    #[tokio::test]
    async fn test_delete_then_list_excludes_item() {
        let store = MemoryStore::new();
        let keep = store.insert(&ItemInput::new("keep")).await.unwrap();
        let gone = store.insert(&ItemInput::new("drop")).await.unwrap();

        actions::remove(&store, &gone).await.unwrap();

        let ids: Vec<ItemId> = store.list().await.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[tokio::test]
    async fn test_set_completed_on_missing_item_fails() {
        let store = MemoryStore::new();
        let err = store
            .set_completed(&ItemId::new("missing"), true)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_failures_leave_mirror_unchanged() {
        let seeded = ItemInput::new("Existing").into_item(ItemId::new("e1"));
        let mut mirror = vec![seeded.clone()];
        let store = UnreachableStore;

        let change = actions::load(&store).await;
        assert!(!confirm(&mut mirror, change));
        let change = actions::submit(&store, "New").await;
        assert!(!confirm(&mut mirror, change));
        let change = actions::toggle(&store, &mirror, &seeded.id).await;
        assert!(!confirm(&mut mirror, change));
        let change = actions::remove(&store, &seeded.id).await;
        assert!(!confirm(&mut mirror, change));

        assert_eq!(mirror, vec![seeded]);
    }

    #[tokio::test]
    async fn test_load_replaces_mirror_in_backend_order() {
        let store = MemoryStore::new();
        store.insert(&ItemInput::new("first")).await.unwrap();
        store.insert(&ItemInput::new("second")).await.unwrap();
        let mut mirror = vec![ItemInput::new("stale").into_item(ItemId::new("old"))];

        let change = actions::load(&store).await;
        assert!(confirm(&mut mirror, change));

        let texts: Vec<&str> = mirror.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_probe_counts_documents() {
        let store = MemoryStore::new();
        store.insert(&ItemInput::new("one")).await.unwrap();
        assert_eq!(actions::probe(&store).await, Some(1));
        assert_eq!(actions::probe(&UnreachableStore).await, None);
    }
}
