use crate::{error::AppResult, models::Snapshot, services::providers::DataProvider};

/// Loads a fresh snapshot from the data source.
///
/// Catalog and corpus are fetched together and only assembled once both
/// succeed, so the engine never sees a half-updated pair.
pub async fn load_snapshot(provider: &dyn DataProvider) -> AppResult<Snapshot> {
    let (catalog, profiles) =
        tokio::try_join!(provider.fetch_catalog(), provider.fetch_profiles())?;

    tracing::info!(
        provider = provider.name(),
        movie_count = catalog.len(),
        user_count = profiles.len(),
        "Loaded data snapshot"
    );

    Ok(Snapshot::new(catalog, profiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::{Catalog, MovieId},
        services::providers::MockDataProvider,
    };

    fn small_catalog() -> Catalog {
        [(MovieId(1), "Toy Story (1995)".to_string())].into()
    }

    #[tokio::test]
    async fn test_load_snapshot_combines_both_fetches() {
        let mut provider = MockDataProvider::new();
        provider
            .expect_fetch_catalog()
            .returning(|| Ok(small_catalog()));
        provider.expect_fetch_profiles().returning(|| {
            Ok(vec![serde_json::from_str(
                r#"{"user_id": 1, "movies": [1]}"#,
            )
            .unwrap()])
        });
        provider.expect_name().return_const("mock");

        let snapshot = load_snapshot(&provider).await.unwrap();

        assert_eq!(snapshot.catalog.len(), 1);
        assert_eq!(snapshot.profiles.len(), 1);
        assert_eq!(snapshot.profiles[0].user_id, 1);
    }

    #[tokio::test]
    async fn test_load_snapshot_propagates_fetch_failure() {
        let mut provider = MockDataProvider::new();
        provider
            .expect_fetch_catalog()
            .returning(|| Ok(small_catalog()));
        provider
            .expect_fetch_profiles()
            .returning(|| Err(AppError::DataService("users endpoint down".to_string())));
        provider.expect_name().return_const("mock");

        let result = load_snapshot(&provider).await;

        assert!(matches!(result, Err(AppError::DataService(_))));
    }
}
