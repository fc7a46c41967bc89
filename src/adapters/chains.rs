//! Fallback chains assembled from configuration.
//!
//! - Directory: API → snapshot → built-in list
//! - Community: (API, when enabled) → snapshot → built-in feed
//!
//! The snapshot stage is the statically served copy when a static host is
//! configured, and the on-disk copy otherwise. Therapist stages skip records
//! that fail to decode instead of failing the whole stage.

use reqwest::Client;
use std::sync::Arc;

use super::fallback_data::{self, BUILTIN_SOURCE};
use super::loader::{FallbackLoader, LoaderEventCallback};
use super::sources::{decode, CommunityApiSource, Decoder, HttpJsonSource, SnapshotFileSource};
use crate::config::SourcesConfig;
use crate::domain::community::CommunityFeed;
use crate::domain::directory::TherapistRecord;
use crate::ports::RecordSource;

pub const THERAPISTS_SNAPSHOT: &str = "therapists.json";
pub const COMMUNITY_SNAPSHOT: &str = "community.json";

/// Builds the therapist chain.
pub fn directory_loader(
    config: &SourcesConfig,
    client: Client,
    callback: Arc<dyn LoaderEventCallback>,
) -> FallbackLoader<Vec<TherapistRecord>> {
    let api = HttpJsonSource::<Vec<TherapistRecord>>::new(config.therapists_url())
        .with_client(client.clone())
        .with_timeout(config.request_timeout())
        .named("therapists-api")
        .with_decoder(decode::lenient_list);

    FallbackLoader::new(BUILTIN_SOURCE, fallback_data::therapists)
        .with_source(api)
        .with_shared_source(snapshot_stage(
            config,
            client,
            THERAPISTS_SNAPSHOT,
            decode::lenient_list,
        ))
        .with_stage_timeout(config.request_timeout())
        .with_event_callback(callback)
}

/// Builds the community chain.
pub fn community_loader(
    config: &SourcesConfig,
    client: Client,
    callback: Arc<dyn LoaderEventCallback>,
) -> FallbackLoader<CommunityFeed> {
    let mut loader = FallbackLoader::new(BUILTIN_SOURCE, fallback_data::community);

    if config.community_api_enabled {
        loader = loader.with_source(CommunityApiSource::new(
            &config.api_base_url,
            client.clone(),
            config.request_timeout(),
        ));
    }

    loader
        .with_shared_source(snapshot_stage(config, client, COMMUNITY_SNAPSHOT, decode::strict))
        .with_stage_timeout(config.request_timeout())
        .with_event_callback(callback)
}

fn snapshot_stage<T>(
    config: &SourcesConfig,
    client: Client,
    file: &str,
    decoder: Decoder<T>,
) -> Arc<dyn RecordSource<T>>
where
    T: serde::de::DeserializeOwned + Send + 'static,
{
    match config.static_snapshot_url(file) {
        Some(url) => Arc::new(
            HttpJsonSource::new(url)
                .with_client(client)
                .with_timeout(config.request_timeout())
                .named(format!("static/{}", file))
                .as_snapshot()
                .with_decoder(decoder),
        ),
        None => Arc::new(
            SnapshotFileSource::new(config.snapshot_path(file))
                .named(format!("bundled/{}", file))
                .with_decoder(decoder),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::loader::NoOpEventCallback;
    use crate::ports::SourceKind;

    /// Config whose API points at a port nothing listens on.
    async fn unreachable_config(snapshot_dir: &str) -> SourcesConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        SourcesConfig {
            api_base_url: format!("http://{}", addr),
            snapshot_dir: snapshot_dir.to_string(),
            request_timeout_secs: 2,
            ..Default::default()
        }
    }

    #[test]
    fn directory_chain_order() {
        let loader = directory_loader(
            &SourcesConfig::default(),
            Client::new(),
            Arc::new(NoOpEventCallback),
        );

        let chain = loader.chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].kind, SourceKind::Network);
        assert_eq!(chain[1].kind, SourceKind::Snapshot);
        assert_eq!(chain[1].name, "bundled/therapists.json");
        assert_eq!(chain[2].kind, SourceKind::InMemory);
    }

    #[test]
    fn static_host_replaces_disk_snapshot() {
        let config = SourcesConfig {
            static_base_url: Some("http://localhost:3000".to_string()),
            ..Default::default()
        };
        let loader = community_loader(&config, Client::new(), Arc::new(NoOpEventCallback));

        let chain = loader.chain();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].name, "static/community.json");
        assert_eq!(chain[0].kind, SourceKind::Snapshot);
    }

    #[test]
    fn community_api_stage_is_opt_in() {
        let config = SourcesConfig {
            community_api_enabled: true,
            ..Default::default()
        };
        let loader = community_loader(&config, Client::new(), Arc::new(NoOpEventCallback));

        let chain = loader.chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].name, "community-api");
    }

    #[tokio::test]
    async fn unreachable_sources_fall_back_to_builtin_therapists() {
        let dir = tempfile::tempdir().unwrap();
        let config = unreachable_config(dir.path().to_str().unwrap()).await;
        let loader = directory_loader(&config, Client::new(), Arc::new(NoOpEventCallback));

        let outcome = loader.load().await;

        assert!(outcome.is_terminal_fallback());
        assert_eq!(outcome.records, fallback_data::therapists());
        assert_eq!(outcome.failures.len(), 2);
    }

    #[tokio::test]
    async fn disk_snapshot_serves_when_api_is_down() {
        let dir = tempfile::tempdir().unwrap();
        let records = fallback_data::therapists();
        std::fs::write(
            dir.path().join(THERAPISTS_SNAPSHOT),
            serde_json::to_vec(&records[..1]).unwrap(),
        )
        .unwrap();

        let config = unreachable_config(dir.path().to_str().unwrap()).await;
        let loader = directory_loader(&config, Client::new(), Arc::new(NoOpEventCallback));

        let outcome = loader.load().await;

        assert_eq!(outcome.served_by.kind, SourceKind::Snapshot);
        assert_eq!(outcome.records, records[..1].to_vec());
    }

    #[tokio::test]
    async fn disk_snapshot_with_one_bad_record_still_serves() {
        let dir = tempfile::tempdir().unwrap();
        let records = fallback_data::therapists();
        let mut body = serde_json::to_value(&records[..2]).unwrap();
        body[1]["rating"] = serde_json::json!(7.5);
        std::fs::write(
            dir.path().join(THERAPISTS_SNAPSHOT),
            serde_json::to_vec(&body).unwrap(),
        )
        .unwrap();

        let config = unreachable_config(dir.path().to_str().unwrap()).await;
        let loader = directory_loader(&config, Client::new(), Arc::new(NoOpEventCallback));

        let outcome = loader.load().await;

        assert_eq!(outcome.served_by.kind, SourceKind::Snapshot);
        assert_eq!(outcome.records, records[..1].to_vec());
    }
}
