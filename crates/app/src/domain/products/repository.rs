//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, QueryBuilder, Row, Transaction, postgres::PgRow, query, query_as,
    types::Json,
};
use uuid::Uuid;

use crate::{
    database::{try_get_amount, try_get_count, try_into_amount, try_into_count},
    domain::{
        products::{
            data::{NewProduct, ProductFilter},
            records::{ProductDimensions, ProductImage, ProductRecord, ProductUuid},
        },
        users::records::UserUuid,
    },
};

const SELECT_PRODUCTS_SQL: &str = include_str!("sql/select_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const BEST_SELLER_SQL: &str = include_str!("sql/best_seller.sql");
const NEW_ARRIVALS_SQL: &str = include_str!("sql/new_arrivals.sql");
const SIMILAR_PRODUCTS_SQL: &str = include_str!("sql/similar_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        build_list_query(filter)
            .build_query_as::<ProductRecord>()
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn best_seller(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(BEST_SELLER_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn new_arrivals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(NEW_ARRIVALS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn similar_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductRecord,
        limit: i64,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SIMILAR_PRODUCTS_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.category)
            .bind(product.gender.as_deref())
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        let price = try_into_amount("price", product.price)?;
        let discount_price = product
            .discount_price
            .map(|amount| try_into_amount("discount_price", amount))
            .transpose()?;
        let count_in_stock = try_into_count("count_in_stock", product.count_in_stock)?;
        let num_reviews = try_into_count("num_reviews", product.num_reviews)?;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(price)
            .bind(discount_price)
            .bind(count_in_stock)
            .bind(&product.sku)
            .bind(&product.category)
            .bind(product.brand.as_deref())
            .bind(&product.sizes)
            .bind(&product.colors)
            .bind(&product.collections)
            .bind(product.material.as_deref())
            .bind(product.gender.as_deref())
            .bind(Json(&product.images))
            .bind(product.is_featured)
            .bind(product.is_published)
            .bind(product.rating)
            .bind(num_reviews)
            .bind(&product.tags)
            .bind(product.meta_title.as_deref())
            .bind(product.meta_description.as_deref())
            .bind(product.meta_keywords.as_deref())
            .bind(product.dimensions.map(Json))
            .bind(product.weight)
            .bind(product.user_uuid.map(UserUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    /// Persist every mutable column of `product`.
    pub(crate) async fn save_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductRecord,
    ) -> Result<ProductRecord, sqlx::Error> {
        let price = try_into_amount("price", product.price)?;
        let discount_price = product
            .discount_price
            .map(|amount| try_into_amount("discount_price", amount))
            .transpose()?;
        let count_in_stock = try_into_count("count_in_stock", product.count_in_stock)?;

        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(price)
            .bind(discount_price)
            .bind(count_in_stock)
            .bind(&product.sku)
            .bind(&product.category)
            .bind(product.brand.as_deref())
            .bind(&product.sizes)
            .bind(&product.colors)
            .bind(&product.collections)
            .bind(product.material.as_deref())
            .bind(product.gender.as_deref())
            .bind(Json(&product.images))
            .bind(product.is_featured)
            .bind(product.is_published)
            .bind(&product.tags)
            .bind(product.meta_title.as_deref())
            .bind(product.meta_description.as_deref())
            .bind(product.meta_keywords.as_deref())
            .bind(product.dimensions.map(Json))
            .bind(product.weight)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// Compose the catalog query for `filter`. Every value is bound, never interpolated.
pub(crate) fn build_list_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_PRODUCTS_SQL);

    builder.push(" WHERE TRUE");

    if let Some(collection) = filter.collection() {
        builder
            .push(" AND collections = ")
            .push_bind(collection.to_string());
    }

    if let Some(category) = filter.category() {
        builder.push(" AND category = ").push_bind(category.to_string());
    }

    if !filter.materials.is_empty() {
        builder
            .push(" AND material = ANY(")
            .push_bind(filter.materials.to_vec())
            .push(")");
    }

    if !filter.brands.is_empty() {
        builder
            .push(" AND brand = ANY(")
            .push_bind(filter.brands.to_vec())
            .push(")");
    }

    if !filter.sizes.is_empty() {
        builder
            .push(" AND sizes && ")
            .push_bind(filter.sizes.to_vec());
    }

    if let Some(color) = &filter.color {
        builder
            .push(" AND ")
            .push_bind(color.clone())
            .push(" = ANY(colors)");
    }

    if let Some(gender) = &filter.gender {
        builder.push(" AND gender = ").push_bind(gender.clone());
    }

    if let Some(min_price) = filter.min_price {
        builder
            .push(" AND price >= ")
            .push_bind(i64::try_from(min_price).unwrap_or(i64::MAX));
    }

    if let Some(max_price) = filter.max_price {
        builder
            .push(" AND price <= ")
            .push_bind(i64::try_from(max_price).unwrap_or(i64::MAX));
    }

    if let Some(search) = filter.search() {
        let pattern = format!("%{}%", escape_like(search));

        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    builder.push(filter.sort.order_by());

    if let Some(limit) = filter.limit() {
        builder.push(" LIMIT ").push_bind(i64::from(limit));
    }

    builder
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }

        escaped.push(ch);
    }

    escaped
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let discount_price = row
            .try_get::<Option<i64>, _>("discount_price")?
            .map(u64::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "discount_price".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            discount_price,
            count_in_stock: try_get_count(row, "count_in_stock")?,
            sku: row.try_get("sku")?,
            category: row.try_get("category")?,
            brand: row.try_get("brand")?,
            sizes: row.try_get("sizes")?,
            colors: row.try_get("colors")?,
            collections: row.try_get("collections")?,
            material: row.try_get("material")?,
            gender: row.try_get("gender")?,
            images: row.try_get::<Json<Vec<ProductImage>>, _>("images")?.0,
            is_featured: row.try_get("is_featured")?,
            is_published: row.try_get("is_published")?,
            rating: row.try_get("rating")?,
            num_reviews: try_get_count(row, "num_reviews")?,
            tags: row.try_get("tags")?,
            meta_title: row.try_get("meta_title")?,
            meta_description: row.try_get("meta_description")?,
            meta_keywords: row.try_get("meta_keywords")?,
            dimensions: row
                .try_get::<Option<Json<ProductDimensions>>, _>("dimensions")?
                .map(|dimensions| dimensions.0),
            weight: row.try_get("weight")?,
            user_uuid: row
                .try_get::<Option<Uuid>, _>("user_uuid")?
                .map(UserUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
