//! Product repository — CRUD, substring search, and the category join read
//! against `produkty`.

use mag_core::entities::{Product, ProductWithCategory};

use crate::error::StoreError;
use crate::helpers::{escape_like, get_opt_string};
use crate::service::MagService;

fn row_to_product(row: &libsql::Row) -> Result<Product, StoreError> {
    Ok(Product {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        quantity: row.get::<i64>(2)?,
        price: row.get::<f64>(3)?,
        category_id: row.get::<i64>(4)?,
    })
}

const PRODUCT_COLUMNS: &str = "id, nazwa, liczba, cena, kategoria_id";

impl MagService {
    /// Fetch all products ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PRODUCT_COLUMNS} FROM produkty ORDER BY id"),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_product(&row)?);
        }
        Ok(results)
    }

    /// Fetch all products joined with their category name, ordered by id.
    ///
    /// The one join read the store exposes. `category_name` is `None` when
    /// the referenced category row is gone.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_products_with_category(
        &self,
    ) -> Result<Vec<ProductWithCategory>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT p.id, p.nazwa, p.liczba, p.cena, p.kategoria_id, k.nazwa
                 FROM produkty p LEFT JOIN kategorie k ON k.id = p.kategoria_id
                 ORDER BY p.id",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(ProductWithCategory {
                product: row_to_product(&row)?,
                category_name: get_opt_string(&row, 5)?,
            });
        }
        Ok(results)
    }

    /// Case-insensitive substring search on product name, ordered by id.
    ///
    /// `LIKE` wildcards in the query match literally.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, StoreError> {
        let pattern = format!("%{}%", escape_like(query));
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {PRODUCT_COLUMNS} FROM produkty
                     WHERE nazwa LIKE ?1 ESCAPE '\\' ORDER BY id"
                ),
                [pattern],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_product(&row)?);
        }
        Ok(results)
    }

    /// Insert a product and return the persisted row with its assigned id.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` (before any insert) when the name is blank,
    /// the quantity or price is negative, or `category_id` does not reference
    /// an existing category. A category deleted between the existence check
    /// and the insert still surfaces as `StoreError::ReferentialIntegrity`
    /// through the store's own FK enforcement.
    pub async fn create_product(
        &self,
        name: &str,
        category_id: i64,
        quantity: i64,
        price: f64,
    ) -> Result<Product, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation("product name is required".into()));
        }
        if quantity < 0 {
            return Err(StoreError::Validation(format!(
                "quantity must be non-negative, got {quantity}"
            )));
        }
        if !(price >= 0.0 && price.is_finite()) {
            return Err(StoreError::Validation(format!(
                "price must be a non-negative number, got {price}"
            )));
        }
        if !self.category_exists(category_id).await? {
            return Err(StoreError::Validation(format!(
                "category {category_id} does not exist"
            )));
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO produkty (nazwa, liczba, cena, kategoria_id)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {PRODUCT_COLUMNS}"
                ),
                libsql::params![name, quantity, price, category_id],
            )
            .await
            .map_err(|e| StoreError::from_mutation(e, "category", category_id))?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_product(&row)
    }

    /// Set a product's quantity and return the updated row.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` (before any update) when `new_quantity` is
    /// negative; `StoreError::NotFound` when the id is unknown.
    pub async fn update_product_quantity(
        &self,
        id: i64,
        new_quantity: i64,
    ) -> Result<Product, StoreError> {
        if new_quantity < 0 {
            return Err(StoreError::Validation(format!(
                "quantity must be non-negative, got {new_quantity}"
            )));
        }

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE produkty SET liczba = ?2 WHERE id = ?1",
                libsql::params![id, new_quantity],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NotFound {
                entity: "product",
                id,
            });
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PRODUCT_COLUMNS} FROM produkty WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_product(&row)
    }

    /// Delete a product by id. Idempotent on missing: deleting an absent id
    /// is not an error. Returns whether a row was actually removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the delete fails.
    pub async fn delete_product(&self, id: i64) -> Result<bool, StoreError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM produkty WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }

    async fn category_exists(&self, id: i64) -> Result<bool, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM kategorie WHERE id = ?1", [id])
            .await?;
        Ok(rows.next().await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use mag_core::metrics;
    use pretty_assertions::assert_eq;

    use crate::error::StoreError;
    use crate::test_support::helpers::{seed_category, test_service};

    #[tokio::test]
    async fn create_returns_persisted_row_with_assigned_id() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Fruits").await;

        let product = svc
            .create_product("Apple", category_id, 3, 2.5)
            .await
            .unwrap();
        assert!(product.id > 0);
        assert_eq!(product.name, "Apple");
        assert_eq!(product.quantity, 3);
        assert_eq!(product.price, 2.5);
        assert_eq!(product.category_id, category_id);

        let listed = svc.list_products().await.unwrap();
        assert_eq!(listed, vec![product]);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_any_insert() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Fruits").await;

        for result in [
            svc.create_product("  ", category_id, 1, 1.0).await,
            svc.create_product("Apple", category_id, -1, 1.0).await,
            svc.create_product("Apple", category_id, 1, -0.5).await,
            svc.create_product("Apple", category_id, 1, f64::NAN).await,
            svc.create_product("Apple", 999, 1, 1.0).await,
        ] {
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }
        assert!(svc.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_quantity_persists_and_returns_the_row() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Fruits").await;
        let product = svc
            .create_product("Apple", category_id, 3, 2.5)
            .await
            .unwrap();

        let updated = svc.update_product_quantity(product.id, 0).await.unwrap();
        assert_eq!(updated.quantity, 0);
        assert_eq!(svc.list_products().await.unwrap()[0].quantity, 0);
    }

    #[tokio::test]
    async fn negative_quantity_update_is_rejected_and_row_unchanged() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Fruits").await;
        let product = svc
            .create_product("Apple", category_id, 3, 2.5)
            .await
            .unwrap();

        let result = svc.update_product_quantity(product.id, -1).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(svc.list_products().await.unwrap()[0].quantity, 3);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let svc = test_service().await;
        let result = svc.update_product_quantity(42, 1).await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound {
                entity: "product",
                id: 42
            })
        ));
    }

    #[tokio::test]
    async fn delete_is_idempotent_on_missing() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Fruits").await;
        let product = svc
            .create_product("Apple", category_id, 3, 2.5)
            .await
            .unwrap();

        assert!(svc.delete_product(product.id).await.unwrap());
        assert!(!svc.delete_product(product.id).await.unwrap());
        assert!(svc.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_matches_substring_case_insensitively() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Fruits").await;
        for name in ["Green Apple", "Pineapple", "Banana"] {
            svc.create_product(name, category_id, 1, 1.0).await.unwrap();
        }

        let found = svc.search_products("apple").await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Green Apple", "Pineapple"]);

        assert!(svc.search_products("kiwi").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_treats_like_wildcards_as_literals() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Promo").await;
        svc.create_product("100% Juice", category_id, 1, 1.0)
            .await
            .unwrap();
        svc.create_product("1000 Juice", category_id, 1, 1.0)
            .await
            .unwrap();

        let found = svc.search_products("100%").await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["100% Juice"]);
    }

    #[tokio::test]
    async fn join_read_resolves_category_names() {
        let svc = test_service().await;
        let fruits = seed_category(&svc, "Fruits").await;
        let dairy = seed_category(&svc, "Dairy").await;
        svc.create_product("Apple", fruits, 3, 2.5).await.unwrap();
        svc.create_product("Milk", dairy, 10, 1.2).await.unwrap();

        let joined = svc.list_products_with_category().await.unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].category_name.as_deref(), Some("Fruits"));
        assert_eq!(joined[1].category_name.as_deref(), Some("Dairy"));
    }

    // The end-to-end shape from the dashboard: one category, one product,
    // metrics over the snapshot.
    #[tokio::test]
    async fn snapshot_feeds_derived_metrics() {
        let svc = test_service().await;
        let category_id = seed_category(&svc, "Fruits").await;
        let product = svc
            .create_product("Apple", category_id, 3, 2.5)
            .await
            .unwrap();

        let snapshot = svc.list_products().await.unwrap();
        assert_eq!(metrics::inventory_value(&snapshot), 7.5);

        let low = metrics::low_stock(&snapshot, 5);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, product.id);
    }
}
