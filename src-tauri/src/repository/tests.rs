//! Repository Integration Tests
//!
//! Tests for RizzRepository with an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Rizz, Vote};
    use crate::repository::{init_db, DbState, Repository, RizzRepository};
    use std::path::PathBuf;

    async fn setup_test_db() -> RizzRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        RizzRepository::new(db_state.conn.clone())
    }

    async fn submit(repo: &RizzRepository, text: &str) -> Rizz {
        repo.create(&Rizz::new(0, text.to_string())).await.expect("Failed to create")
    }

    #[tokio::test]
    async fn test_create_rizz() {
        let repo = setup_test_db().await;

        let created = submit(&repo, "Do you have a map?").await;

        assert!(created.id > 0);
        assert_eq!(created.rizz, "Do you have a map?");
        assert_eq!(created.votes, 0);
        assert!(created.created_at.is_some());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = setup_test_db().await;

        let first = submit(&repo, "one").await;
        let second = submit(&repo, "one").await;

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let repo = setup_test_db().await;

        let b = submit(&repo, "b").await;
        let a = submit(&repo, "a").await;
        repo.vote(a.id, Vote::Up).await.unwrap();

        let all = repo.list().await.expect("List failed");
        let ids: Vec<u32> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_downvote_goes_negative() {
        let repo = setup_test_db().await;
        let created = submit(&repo, "cringe").await;

        repo.vote(created.id, Vote::Down).await.unwrap();
        let updated = repo.vote(created.id, Vote::Down).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.votes, -2);
        assert_eq!(updated.rizz, "cringe");
    }

    #[tokio::test]
    async fn test_upvote_then_downvote() {
        let repo = setup_test_db().await;
        let created = submit(&repo, "smooth").await;

        repo.vote(created.id, Vote::Up).await.unwrap();
        repo.vote(created.id, Vote::Up).await.unwrap();
        let updated = repo.vote(created.id, Vote::Down).await.unwrap();
        assert_eq!(updated.votes, 1);

        let all = repo.list().await.unwrap();
        assert_eq!(all[0].votes, 1);
    }

    #[tokio::test]
    async fn test_vote_only_touches_target() {
        let repo = setup_test_db().await;
        let first = submit(&repo, "first").await;
        let second = submit(&repo, "second").await;

        repo.vote(first.id, Vote::Down).await.unwrap();

        let all = repo.list().await.unwrap();
        let untouched = all.iter().find(|r| r.id == second.id).unwrap();
        assert_eq!(untouched.votes, 0);
    }

    #[tokio::test]
    async fn test_vote_missing_rizz() {
        let repo = setup_test_db().await;

        let err = repo.vote(99, Vote::Down).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_vote_saturates_at_max() {
        let repo = setup_test_db().await;
        let top = Rizz { votes: i32::MAX, ..Rizz::new(0, "legend".to_string()) };
        let created = repo.create(&top).await.unwrap();

        let updated = repo.vote(created.id, Vote::Up).await.unwrap();
        assert_eq!(updated.votes, i32::MAX);

        let all = repo.list().await.expect("List failed after saturated vote");
        assert_eq!(all[0].votes, i32::MAX);
    }

    #[tokio::test]
    async fn test_vote_saturates_at_min() {
        let repo = setup_test_db().await;
        let bottom = Rizz { votes: i32::MIN, ..Rizz::new(0, "yikes".to_string()) };
        let created = repo.create(&bottom).await.unwrap();

        let updated = repo.vote(created.id, Vote::Down).await.unwrap();
        assert_eq!(updated.votes, i32::MIN);

        let recovered = repo.vote(created.id, Vote::Up).await.unwrap();
        assert_eq!(recovered.votes, i32::MIN + 1);
    }

    #[tokio::test]
    async fn test_uninitialized_state_errors() {
        let state = DbState::new();

        let repo = RizzRepository::new(state.conn.clone());
        let err = repo.list().await.unwrap_err();
        assert_eq!(err, DomainError::Internal("Database not initialized".to_string()));
    }

    #[tokio::test]
    async fn test_reopen_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("rizzclopedia.db");

        {
            let state = init_db(&db_path).await.unwrap();
            let repo = RizzRepository::new(state.conn.clone());
            let created = submit(&repo, "persisted").await;
            repo.vote(created.id, Vote::Up).await.unwrap();
        }

        let state = init_db(&db_path).await.unwrap();
        let repo = RizzRepository::new(state.conn.clone());
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rizz, "persisted");
        assert_eq!(all[0].votes, 1);
    }
}
