//! Referential-integrity guard applied before a delete.
//!
//! A location cannot be deleted while a culture grows there; a culture
//! cannot be deleted while a harvest records its yield. `force` skips
//! the guard on either branch. Seeds and harvests are always deletable.

use super::{Collection, JsonStore};
use crate::error::{AppError, AppResult};
use shared::models::{Culture, Harvest};

pub(super) async fn check_delete(
    store: &JsonStore,
    collection: Collection,
    id: &str,
    force: bool,
) -> AppResult<()> {
    if force {
        return Ok(());
    }
    match collection {
        Collection::Locations => {
            // An unreadable dependent collection blocks nothing.
            let cultures: Vec<Culture> =
                store.load(Collection::Cultures).await.unwrap_or_default();
            if cultures.iter().any(|c| c.location_id == id) {
                return Err(AppError::LocationInUse);
            }
        }
        Collection::Cultures => {
            let harvests: Vec<Harvest> =
                store.load(Collection::Harvests).await.unwrap_or_default();
            if harvests.iter().any(|h| h.culture_id == id) {
                return Err(AppError::CultureInUse);
            }
        }
        Collection::Seeds | Collection::Harvests => {}
    }
    Ok(())
}
