//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    auth::{AuthenticatedUser, MockAuthService},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartOwner, CartRecord, CartUuid},
        },
        checkouts::{
            MockCheckoutsService,
            records::{CheckoutRecord, CheckoutUuid, PaymentStatus, ShippingAddress},
        },
        line_items::{LineItem, total_price},
        orders::{
            MockOrdersService,
            records::{OrderCustomer, OrderRecord, OrderStatus, OrderUuid},
        },
        products::{
            MockProductsService,
            records::{ProductImage, ProductRecord, ProductUuid},
        },
        subscribers::MockSubscribersService,
        users::{
            MockUsersService,
            records::{Role, UserRecord, UserUuid},
        },
    },
    storage::MockObjectStore,
};

use crate::{catcher, extensions::*, state::State};

pub(crate) const CUSTOMER: AuthenticatedUser = AuthenticatedUser {
    uuid: UserUuid::from_uuid(Uuid::from_u128(1)),
    role: Role::Customer,
};

pub(crate) const ADMIN: AuthenticatedUser = AuthenticatedUser {
    uuid: UserUuid::from_uuid(Uuid::from_u128(2)),
    role: Role::Admin,
};

/// One mock per service. A mock without expectations fails the test on any call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) auth: MockAuthService,
    pub(crate) users: MockUsersService,
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) checkouts: MockCheckoutsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) subscribers: MockSubscribersService,
    pub(crate) storage: MockObjectStore,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            users: Arc::new(self.users),
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            checkouts: Arc::new(self.checkouts),
            orders: Arc::new(self.orders),
            subscribers: Arc::new(self.subscribers),
            storage: Arc::new(self.storage),
        })
    }
}

#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(CUSTOMER);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(ADMIN);
    ctrl.call_next(req, depot, res).await;
}

/// A service with no caller attached.
pub(crate) fn anonymous_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
        .catcher(catcher::catcher())
}

/// A service where every request is made by [`CUSTOMER`].
pub(crate) fn customer_service(mocks: Mocks, route: Router) -> Service {
    anonymous_service(mocks, Router::new().hoop(inject_customer).push(route))
}

/// A service where every request is made by [`ADMIN`].
pub(crate) fn admin_service(mocks: Mocks, route: Router) -> Service {
    anonymous_service(mocks, Router::new().hoop(inject_admin).push(route))
}

pub(crate) fn make_user(uuid: UserUuid, role: Role) -> UserRecord {
    UserRecord {
        uuid,
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        role,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Classic Oxford".to_string(),
        description: "Button-down shirt".to_string(),
        price: 39_99,
        discount_price: None,
        count_in_stock: 10,
        sku: "OX-1".to_string(),
        category: "Top Wear".to_string(),
        brand: Some("Urban Threads".to_string()),
        sizes: vec!["M".to_string(), "L".to_string()],
        colors: vec!["White".to_string()],
        collections: "Business Casual".to_string(),
        material: Some("Cotton".to_string()),
        gender: Some("Men".to_string()),
        images: vec![ProductImage {
            url: "https://cdn.example.com/oxford.jpg".to_string(),
            alt_text: None,
        }],
        is_featured: false,
        is_published: true,
        rating: 4.5,
        num_reviews: 12,
        tags: Vec::new(),
        meta_title: None,
        meta_description: None,
        meta_keywords: None,
        dimensions: None,
        weight: None,
        user_uuid: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_line(product_uuid: ProductUuid, quantity: u32) -> LineItem {
    LineItem {
        product_uuid,
        name: "Classic Oxford".to_string(),
        image: "https://cdn.example.com/oxford.jpg".to_string(),
        price: 10,
        size: "M".to_string(),
        color: "White".to_string(),
        quantity,
    }
}

pub(crate) fn make_cart(owner: CartOwner, items: Vec<LineItem>) -> CartRecord {
    CartRecord {
        uuid: CartUuid::new(),
        owner,
        total_price: total_price(&items),
        items,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_address() -> ShippingAddress {
    ShippingAddress {
        address: "1 Main Street".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
        country: "US".to_string(),
    }
}

pub(crate) fn make_checkout(uuid: CheckoutUuid, user: UserUuid) -> CheckoutRecord {
    let items = vec![make_line(ProductUuid::new(), 2)];

    CheckoutRecord {
        uuid,
        user_uuid: user,
        total_price: total_price(&items),
        items,
        shipping_address: make_address(),
        payment_method: "PayPal".to_string(),
        payment_status: PaymentStatus::Pending,
        is_paid: false,
        paid_at: None,
        payment_details: None,
        is_finalized: false,
        finalized_at: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, user: UserUuid) -> OrderRecord {
    let checkout = make_checkout(CheckoutUuid::new(), user);

    OrderRecord {
        uuid,
        checkout_uuid: checkout.uuid,
        user_uuid: user,
        customer: OrderCustomer {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        },
        items: checkout.items,
        shipping_address: checkout.shipping_address,
        payment_method: checkout.payment_method,
        total_price: checkout.total_price,
        is_paid: true,
        paid_at: Some(Timestamp::UNIX_EPOCH),
        payment_status: PaymentStatus::Paid,
        payment_details: None,
        is_delivered: false,
        delivered_at: None,
        status: OrderStatus::Processing,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
