//! Test Helpers

use uuid::Uuid;

use crate::{
    domain::{
        checkouts::{
            CheckoutsService,
            data::{NewCheckout, PaymentConfirmation},
            records::{CheckoutUuid, ShippingAddress},
        },
        line_items::LineItem,
        orders::records::OrderRecord,
        products::{
            data::NewProduct,
            records::{ProductImage, ProductUuid},
        },
        users::{
            UsersService,
            data::NewUser,
            records::{Role, UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn new_product(name: &str, price: u64) -> NewProduct {
    let uuid = ProductUuid::new();

    NewProduct {
        uuid,
        name: name.to_string(),
        description: "Everyday essential".to_string(),
        price,
        discount_price: None,
        count_in_stock: 10,
        sku: format!("SKU-{}", uuid.into_uuid().simple()),
        category: "Top Wear".to_string(),
        brand: Some("Storefront".to_string()),
        sizes: vec!["M".to_string()],
        colors: vec!["Black".to_string()],
        collections: "Essentials".to_string(),
        material: Some("Cotton".to_string()),
        gender: Some("Men".to_string()),
        images: vec![ProductImage {
            url: format!("https://cdn.example.com/{}.jpg", uuid.into_uuid().simple()),
            alt_text: Some(name.to_string()),
        }],
        is_featured: false,
        is_published: true,
        rating: 0.0,
        num_reviews: 0,
        tags: Vec::new(),
        meta_title: None,
        meta_description: None,
        meta_keywords: None,
        dimensions: None,
        weight: None,
        user_uuid: None,
    }
}

pub(crate) fn new_user(email: &str) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password: "hunter22".to_string(),
        role: Role::Customer,
    }
}

/// A single-line checkout whose line total equals `total_price`.
pub(crate) fn new_checkout(total_price: u64) -> NewCheckout {
    NewCheckout {
        uuid: CheckoutUuid::new(),
        items: vec![LineItem {
            product_uuid: ProductUuid::from_uuid(Uuid::now_v7()),
            name: "Slim Fit Shirt".to_string(),
            image: "https://cdn.example.com/shirt.jpg".to_string(),
            price: total_price,
            size: "M".to_string(),
            color: "Red".to_string(),
            quantity: 1,
        }],
        shipping_address: ShippingAddress {
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            country: "US".to_string(),
        },
        payment_method: "card".to_string(),
        total_price,
    }
}

pub(crate) fn paid() -> PaymentConfirmation {
    PaymentConfirmation {
        payment_status: "paid".to_string(),
        payment_details: None,
    }
}

/// Run a checkout for `user` through payment and finalization.
pub(crate) async fn place_order_for(ctx: &TestContext, user: UserUuid) -> OrderRecord {
    let checkout = ctx
        .checkouts
        .create_checkout(user, new_checkout(100))
        .await
        .expect("Failed to create checkout");

    ctx.checkouts
        .confirm_payment(user, checkout.uuid, paid())
        .await
        .expect("Failed to confirm payment");

    ctx.checkouts
        .finalize(user, checkout.uuid)
        .await
        .expect("Failed to finalize checkout")
}

/// Register a user by email and place one order for them.
pub(crate) async fn place_order(ctx: &TestContext, email: &str) -> (UserRecord, OrderRecord) {
    let user = ctx
        .users
        .create_user(new_user(email))
        .await
        .expect("Failed to create user");

    let order = place_order_for(ctx, user.uuid).await;

    (user, order)
}

/// Make every `DELETE` on `carts` raise, so the enclosing transaction fails.
pub(crate) async fn fail_cart_deletes(ctx: &TestContext) {
    sqlx::raw_sql(
        "CREATE FUNCTION reject_cart_delete() RETURNS trigger LANGUAGE plpgsql AS $$ \
         BEGIN RAISE EXCEPTION 'cart deletes are disabled'; END $$; \
         CREATE TRIGGER reject_cart_delete BEFORE DELETE ON carts \
         FOR EACH ROW EXECUTE FUNCTION reject_cart_delete();",
    )
    .execute(ctx.db.pool())
    .await
    .expect("Failed to install cart delete trigger");
}
