//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

const NEW_ARRIVALS_LIMIT: i64 = 8;
const SIMILAR_PRODUCTS_LIMIT: i64 = 4;

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn best_seller(&self) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.best_seller(&mut tx).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn new_arrivals(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .new_arrivals(&mut tx, NEW_ARRIVALS_LIMIT)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn similar_products(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        let similar = self
            .repository
            .similar_products(&mut tx, &product, SIMILAR_PRODUCTS_LIMIT)
            .await?;

        tx.commit().await?;

        Ok(similar)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        tracing::info!(product_uuid = %created.uuid, sku = %created.sku, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        update.validate()?;

        let mut tx = self.db.begin().await?;

        let mut record = self.repository.lock_product(&mut tx, product).await?;

        update.apply(&mut record);

        let updated = self.repository.save_product(&mut tx, &record).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Query the catalog with the given filters and sort order.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, ProductsServiceError>;

    /// The highest rated product.
    async fn best_seller(&self) -> Result<ProductRecord, ProductsServiceError>;

    /// The most recently added products.
    async fn new_arrivals(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Products sharing the given product's category and gender.
    async fn similar_products(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies a partial update to a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::{
        domain::{line_items::MAX_AMOUNT, products::data::ProductSort},
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    #[tokio::test]
    async fn create_product_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let product = new_product("Classic Oxford", 39_99);
        let uuid = product.uuid;

        let created = ctx.products.create_product(product).await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.price, 39_99);
        assert_eq!(created.name, "Classic Oxford");
        assert_eq!(created.images.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_sku_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        let mut first = new_product("First", 10_00);
        first.sku = "SKU-1".to_string();

        let mut second = new_product("Second", 20_00);
        second.sku = "SKU-1".to_string();

        ctx.products.create_product(first).await?;

        let result = ctx.products.create_product(second).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_with_unstorable_price_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let product = new_product("Priceless", MAX_AMOUNT + 1);
        let uuid = product.uuid;

        let result = ctx.products.create_product(product).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AmountOutOfRange)),
            "expected AmountOutOfRange, got {result:?}"
        );
        assert!(
            matches!(
                ctx.products.get_product(uuid).await,
                Err(ProductsServiceError::NotFound)
            ),
            "nothing should be stored"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_product_changes_only_given_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx
            .products
            .create_product(new_product("Chinos", 45_00))
            .await?;

        let updated = ctx
            .products
            .update_product(
                created.uuid,
                ProductUpdate {
                    price: Some(35_00),
                    colors: Some(vec!["Khaki".to_string()]),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.price, 35_00);
        assert_eq!(updated.colors, vec!["Khaki".to_string()]);
        assert_eq!(updated.name, "Chinos");
        assert_eq!(updated.sku, created.sku);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(ProductUuid::new(), ProductUpdate::default())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx
            .products
            .create_product(new_product("Scarf", 12_00))
            .await?;

        ctx.products.delete_product(created.uuid).await?;

        let result = ctx.products.get_product(created.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.delete_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_applies_filters_and_sort() -> TestResult {
        let ctx = TestContext::new().await;

        let mut cheap = new_product("Cotton Tee", 15_00);
        cheap.sizes = vec!["S".to_string(), "M".to_string()];
        cheap.colors = vec!["Red".to_string()];

        let mut pricey = new_product("Cotton Shirt", 45_00);
        pricey.sizes = vec!["M".to_string(), "L".to_string()];
        pricey.colors = vec!["Red".to_string(), "Blue".to_string()];

        let mut other = new_product("Wool Jumper", 60_00);
        other.material = Some("Wool".to_string());
        other.colors = vec!["Red".to_string()];

        ctx.products.create_product(cheap).await?;
        ctx.products.create_product(pricey).await?;
        ctx.products.create_product(other).await?;

        let products = ctx
            .products
            .list_products(ProductFilter {
                materials: smallvec!["Cotton".to_string()],
                sizes: smallvec!["M".to_string()],
                color: Some("Red".to_string()),
                sort: ProductSort::PriceDesc,
                ..ProductFilter::default()
            })
            .await?;

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Cotton Shirt", "Cotton Tee"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_searches_name_and_description() -> TestResult {
        let ctx = TestContext::new().await;

        let mut by_description = new_product("Summer Top", 20_00);
        by_description.description = "A breezy linen SHIRT".to_string();

        ctx.products.create_product(by_description).await?;
        ctx.products
            .create_product(new_product("Denim Shirt", 30_00))
            .await?;
        ctx.products
            .create_product(new_product("Leather Belt", 25_00))
            .await?;

        let products = ctx
            .products
            .list_products(ProductFilter {
                search: Some("shirt".to_string()),
                sort: ProductSort::PriceAsc,
                ..ProductFilter::default()
            })
            .await?;

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Summer Top", "Denim Shirt"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_respects_price_range_and_limit() -> TestResult {
        let ctx = TestContext::new().await;

        for (name, price) in [("A", 10_00), ("B", 20_00), ("C", 30_00), ("D", 40_00)] {
            ctx.products.create_product(new_product(name, price)).await?;
        }

        let products = ctx
            .products
            .list_products(ProductFilter {
                min_price: Some(20_00),
                max_price: Some(40_00),
                sort: ProductSort::PriceAsc,
                limit: Some(2),
                ..ProductFilter::default()
            })
            .await?;

        let prices: Vec<u64> = products.iter().map(|p| p.price).collect();

        assert_eq!(prices, vec![20_00, 30_00]);

        Ok(())
    }

    #[tokio::test]
    async fn best_seller_returns_highest_rated() -> TestResult {
        let ctx = TestContext::new().await;

        let mut good = new_product("Good", 10_00);
        good.rating = 4.0;

        let mut best = new_product("Best", 10_00);
        best.rating = 4.9;

        ctx.products.create_product(good).await?;
        ctx.products.create_product(best).await?;

        let product = ctx.products.best_seller().await?;

        assert_eq!(product.name, "Best");

        Ok(())
    }

    #[tokio::test]
    async fn best_seller_on_empty_catalog_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.best_seller().await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn new_arrivals_returns_at_most_eight_newest() -> TestResult {
        let ctx = TestContext::new().await;

        for index in 0..10 {
            ctx.products
                .create_product(new_product(&format!("Product {index}"), 10_00))
                .await?;
        }

        let products = ctx.products.new_arrivals().await?;

        assert_eq!(products.len(), 8);
        assert_eq!(products.first().map(|p| p.name.as_str()), Some("Product 9"));

        Ok(())
    }

    #[tokio::test]
    async fn similar_products_share_category_and_gender_and_exclude_self() -> TestResult {
        let ctx = TestContext::new().await;

        let source = ctx
            .products
            .create_product(new_product("Source", 10_00))
            .await?;

        ctx.products
            .create_product(new_product("Sibling", 10_00))
            .await?;

        let mut other_gender = new_product("Other", 10_00);
        other_gender.gender = Some("Women".to_string());

        ctx.products.create_product(other_gender).await?;

        let similar = ctx.products.similar_products(source.uuid).await?;

        let names: Vec<&str> = similar.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Sibling"]);

        Ok(())
    }
}
