//! Two-party chat backend - Library exports for testing
//!
//! (c) Softlandia 2025

pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

use crate::core::services::MyChatService;
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::repositories::DbChatRepository;
use anyhow::anyhow;
use di::{Injectable, Ref, ServiceCollection, ServiceProvider, singleton_as_self};

/// Registers the shared connection pool and the per-request repository and service.
pub fn build_provider(connection: DatabaseConnection) -> anyhow::Result<ServiceProvider> {
    ServiceCollection::new()
        .add(
            singleton_as_self::<DatabaseConnection>()
                .from(move |_| Ref::new(connection.clone())),
        )
        .add(DbChatRepository::scoped())
        .add(MyChatService::scoped())
        .build_provider()
        .map_err(|e| anyhow!("invalid service registrations: {e:?}"))
}
