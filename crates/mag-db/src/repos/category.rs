//! Category repository — CRUD against `kategorie`.

use mag_core::entities::Category;

use crate::error::StoreError;
use crate::helpers::get_opt_string;
use crate::service::MagService;

fn row_to_category(row: &libsql::Row) -> Result<Category, StoreError> {
    Ok(Category {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        description: get_opt_string(row, 2)?,
    })
}

impl MagService {
    /// Fetch all categories ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, nazwa, opis FROM kategorie ORDER BY id", ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_category(&row)?);
        }
        Ok(results)
    }

    /// Insert a category and return the persisted row with its assigned id.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` (before any I/O) when the name is blank;
    /// otherwise `StoreError` on query failure.
    pub async fn create_category(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation("category name is required".into()));
        }
        let description = description.map(str::trim).filter(|d| !d.is_empty());

        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO kategorie (nazwa, opis) VALUES (?1, ?2)
                 RETURNING id, nazwa, opis",
                libsql::params![name, description],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_category(&row)
    }

    /// Delete a category by id.
    ///
    /// # Errors
    ///
    /// `StoreError::ReferentialIntegrity` when products still reference the
    /// category (the row and its products are left unchanged);
    /// `StoreError::NotFound` when the id does not exist.
    pub async fn delete_category(&self, id: i64) -> Result<(), StoreError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM kategorie WHERE id = ?1", [id])
            .await
            .map_err(|e| StoreError::from_mutation(e, "category", id))?;
        if affected == 0 {
            return Err(StoreError::NotFound {
                entity: "category",
                id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::StoreError;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_then_list_contains_exactly_the_new_entry() {
        let svc = test_service().await;
        let created = svc
            .create_category("Fruits", Some("fresh produce"))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Fruits");
        assert_eq!(created.description.as_deref(), Some("fresh produce"));

        let listed = svc.list_categories().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_any_insert() {
        let svc = test_service().await;
        let result = svc.create_category("   ", None).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(svc.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_description_is_stored_as_null() {
        let svc = test_service().await;
        let created = svc.create_category("Dairy", Some("  ")).await.unwrap();
        assert_eq!(created.description, None);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let svc = test_service().await;
        for name in ["Zebra", "Apple", "Mango"] {
            svc.create_category(name, None).await.unwrap();
        }
        let listed = svc.list_categories().await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed_with_distinct_ids() {
        let svc = test_service().await;
        let first = svc.create_category("Misc", None).await.unwrap();
        let second = svc.create_category("Misc", None).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(svc.list_categories().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_unreferenced_category() {
        let svc = test_service().await;
        let category = svc.create_category("Empty", None).await.unwrap();
        svc.delete_category(category.id).await.unwrap();
        assert!(svc.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_category_is_not_found() {
        let svc = test_service().await;
        let result = svc.delete_category(999).await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound {
                entity: "category",
                id: 999
            })
        ));
    }

    #[tokio::test]
    async fn delete_with_dependent_product_is_blocked_and_leaves_rows() {
        let svc = test_service().await;
        let category = svc.create_category("Fruits", None).await.unwrap();
        let product = svc
            .create_product("Apple", category.id, 3, 2.5)
            .await
            .unwrap();

        let result = svc.delete_category(category.id).await;
        assert!(matches!(
            result,
            Err(StoreError::ReferentialIntegrity { entity: "category", id }) if id == category.id
        ));

        // Both rows unchanged.
        assert_eq!(svc.list_categories().await.unwrap(), vec![category.clone()]);
        assert_eq!(svc.list_products().await.unwrap(), vec![product.clone()]);

        // Removing the dependent product unblocks the delete.
        svc.delete_product(product.id).await.unwrap();
        svc.delete_category(category.id).await.unwrap();
        assert!(svc.list_categories().await.unwrap().is_empty());
    }
}
