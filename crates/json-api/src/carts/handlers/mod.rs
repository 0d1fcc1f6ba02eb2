//! Cart Handlers

use salvo::prelude::*;

use storefront_app::domain::carts::records::CartOwner;

use crate::extensions::*;

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod merge;
pub(crate) mod remove;
pub(crate) mod update;

/// The cart identity for a request: the authenticated user when there is one,
/// otherwise the supplied guest id.
fn request_owner(depot: &Depot, guest_id: Option<&str>) -> Option<CartOwner> {
    CartOwner::resolve(depot.current_user().map(|user| user.uuid), guest_id)
}

fn owner_or_404(depot: &Depot, guest_id: Option<&str>) -> Result<CartOwner, StatusError> {
    request_owner(depot, guest_id).ok_or_else(|| StatusError::not_found().brief("Cart not found"))
}
