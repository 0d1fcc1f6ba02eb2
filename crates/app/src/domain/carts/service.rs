//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{AddCartItem, AddedToCart, RemoveCartItem, UpdateCartItem},
            errors::CartsServiceError,
            records::{CartOwner, CartRecord, CartUuid},
            repository::PgCartsRepository,
        },
        line_items::LineItem,
        products::repository::PgProductsRepository,
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, owner: CartOwner) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .get_cart(&mut tx, &owner)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        owner: Option<CartOwner>,
        item: AddCartItem,
    ) -> Result<AddedToCart, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let owner = owner.unwrap_or_else(CartOwner::new_guest);

        let mut tx = self.db.begin().await?;

        let product = self
            .products_repository
            .find_product(&mut tx, item.product_uuid)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let created = self
            .carts_repository
            .insert_cart_if_absent(&mut tx, CartUuid::new(), &owner)
            .await?;

        let mut cart = self
            .carts_repository
            .lock_cart(&mut tx, &owner)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        cart.add(LineItem {
            product_uuid: product.uuid,
            name: product.name.clone(),
            image: product.primary_image_url().to_string(),
            price: product.price,
            size: item.size,
            color: item.color,
            quantity: item.quantity,
        });

        let cart = self.carts_repository.save_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        tracing::info!(
            cart_uuid = %cart.uuid,
            product_uuid = %product.uuid,
            created,
            "added item to cart"
        );

        Ok(AddedToCart { cart, created })
    }

    async fn update_item(
        &self,
        owner: CartOwner,
        item: UpdateCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self
            .carts_repository
            .lock_cart(&mut tx, &owner)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        if !cart.set_quantity(item.key(), item.quantity) {
            return Err(CartsServiceError::ItemNotFound);
        }

        let cart = self.carts_repository.save_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        owner: CartOwner,
        item: RemoveCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self
            .carts_repository
            .lock_cart(&mut tx, &owner)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        if !cart.remove(item.key()) {
            return Err(CartsServiceError::ItemNotFound);
        }

        let cart = self.carts_repository.save_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn merge_guest_cart(
        &self,
        guest_id: String,
        user: UserUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let guest_owner = CartOwner::Guest(guest_id);
        let user_owner = CartOwner::User(user);

        let mut tx = self.db.begin().await?;

        // Guest before user, so concurrent merges take locks in the same order.
        let guest_cart = self.carts_repository.lock_cart(&mut tx, &guest_owner).await?;
        let user_cart = self.carts_repository.lock_cart(&mut tx, &user_owner).await?;

        let merged = match (guest_cart, user_cart) {
            (Some(guest_cart), _) if guest_cart.items.is_empty() => {
                return Err(CartsServiceError::GuestCartEmpty);
            }
            (Some(guest_cart), Some(mut user_cart)) => {
                user_cart.absorb(guest_cart.items);

                let saved = self.carts_repository.save_cart(&mut tx, &user_cart).await?;

                self.carts_repository
                    .delete_cart(&mut tx, guest_cart.uuid)
                    .await?;

                saved
            }
            (Some(mut guest_cart), None) => {
                guest_cart.owner = user_owner;

                self.carts_repository.save_cart(&mut tx, &guest_cart).await?
            }
            (None, Some(user_cart)) => user_cart,
            (None, None) => return Err(CartsServiceError::GuestCartNotFound),
        };

        tx.commit().await?;

        tracing::info!(cart_uuid = %merged.uuid, user_uuid = %user, "merged guest cart");

        Ok(merged)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the cart belonging to `owner`.
    async fn get_cart(&self, owner: CartOwner) -> Result<CartRecord, CartsServiceError>;

    /// Add a product to a cart, creating the cart (and a guest identity when
    /// `owner` is `None`) on first use.
    async fn add_item(
        &self,
        owner: Option<CartOwner>,
        item: AddCartItem,
    ) -> Result<AddedToCart, CartsServiceError>;

    /// Set a line's quantity; zero or less removes it.
    async fn update_item(
        &self,
        owner: CartOwner,
        item: UpdateCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove a line from a cart.
    async fn remove_item(
        &self,
        owner: CartOwner,
        item: RemoveCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Move a guest cart's lines into the user's cart.
    async fn merge_guest_cart(
        &self,
        guest_id: String,
        user: UserUuid,
    ) -> Result<CartRecord, CartsServiceError>;
}
