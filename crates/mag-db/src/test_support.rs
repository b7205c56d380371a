//! Shared test utilities for mag-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::MagDb;
    use crate::service::MagService;

    /// Create an in-memory service for repo tests.
    pub async fn test_service() -> MagService {
        let db = MagDb::open_local(":memory:").await.unwrap();
        MagService::from_db(db)
    }

    /// Insert a category and return its assigned id.
    pub async fn seed_category(svc: &MagService, name: &str) -> i64 {
        svc.create_category(name, None).await.unwrap().id
    }
}
