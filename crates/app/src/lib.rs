//! Storefront application core: domain services, persistence, auth and storage.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod storage;

#[cfg(test)]
mod test;

mod uuids;
