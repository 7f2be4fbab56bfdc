use crate::{catalog::CatalogStore, models::PopularityEntry};

/// The precomputed popularity ranking, as loaded
pub fn list_popular(store: &CatalogStore) -> &[PopularityEntry] {
    store.popular()
}
