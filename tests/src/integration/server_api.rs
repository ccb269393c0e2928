//! # Server API Integration
//!
//! `OlaClient` against the fake server: every endpoint, both `dmx` body
//! forms and each failure the poller has to tolerate.

#[cfg(test)]
mod tests {
    use crate::fake_server::{DmxReply, FakeOla};
    use ola_01_server_api::{ApiError, MergeMode};
    use serde_json::json;
    use shared_types::{ChannelArray, UniverseId};

    // =============================================================================
    // GET /get_dmx
    // =============================================================================

    #[tokio::test]
    async fn test_get_dmx_array_form() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("1", &[255, 0, 17]);
        let context = server.context().unwrap();

        let snapshot = context.client().get_dmx(&UniverseId::from(1)).await.unwrap();

        assert_eq!(snapshot.get(0), Some(255));
        assert_eq!(snapshot.get(1), Some(0));
        assert_eq!(snapshot.get(2), Some(17));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(server.get_dmx_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_dmx_object_form_drops_non_numeric() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_reply(
            "3",
            DmxReply::Object(vec![(0, json!(255)), (5, json!(10)), (7, json!("x")), (600, json!(9))]),
        );
        let context = server.context().unwrap();

        let snapshot = context.client().get_dmx(&UniverseId::from(3)).await.unwrap();

        assert_eq!(snapshot.get(0), Some(255));
        assert_eq!(snapshot.get(5), Some(10));
        assert_eq!(snapshot.get(7), None);
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn test_get_dmx_unknown_universe_is_decode_error() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        let result = context.client().get_dmx(&UniverseId::from(99)).await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_get_dmx_server_error_string() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_reply("2", DmxReply::Error("Universe not found".to_string()));
        let context = server.context().unwrap();

        match context.client().get_dmx(&UniverseId::from(2)).await {
            Err(ApiError::Server(message)) => assert_eq!(message, "Universe not found"),
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_dmx_non_success_status() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_reply("4", DmxReply::Status(500));
        let context = server.context().unwrap();

        let result = context.client().get_dmx(&UniverseId::from(4)).await;

        assert!(matches!(result, Err(ApiError::Status { code: 500, .. })));
    }

    // =============================================================================
    // POST endpoints
    // =============================================================================

    #[tokio::test]
    async fn test_set_dmx_posts_trimmed_frame() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        let mut channels = ChannelArray::new();
        channels.set(0, 10).unwrap();
        channels.set(3, 200).unwrap();
        context
            .client()
            .set_dmx(&UniverseId::from(5), &channels)
            .await
            .unwrap();

        let posts = server.set_dmx_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].get("u").map(String::as_str), Some("5"));
        assert_eq!(posts[0].get("d").map(String::as_str), Some("10,0,0,200"));
    }

    #[tokio::test]
    async fn test_set_dmx_blackout_sends_one_channel() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        context
            .client()
            .set_dmx(&UniverseId::from(1), &ChannelArray::new())
            .await
            .unwrap();

        assert_eq!(server.set_dmx_posts()[0].get("d").map(String::as_str), Some("0"));
    }

    #[tokio::test]
    async fn test_set_plugin_state_form() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        context.client().set_plugin_state(4, false).await.unwrap();

        let posts = server.plugin_state_posts();
        assert_eq!(posts[0].get("plugin_id").map(String::as_str), Some("4"));
        assert_eq!(posts[0].get("state").map(String::as_str), Some("false"));
    }

    // =============================================================================
    // JSON endpoints
    // =============================================================================

    #[tokio::test]
    async fn test_server_stats() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        let stats = context.client().server_stats().await.unwrap();

        assert_eq!(stats.hostname, "lightdesk");
        assert_eq!(stats.instance_name, "Stage");
        assert_eq!(stats.version, "0.10.9");
        assert!(!stats.quit_enabled);
    }

    #[tokio::test]
    async fn test_universe_plugin_list() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        let list = context.client().universe_plugin_list().await.unwrap();

        assert_eq!(list.universes.len(), 2);
        assert_eq!(list.universes[1].name, "Stage Left");
        assert_eq!(list.universes[1].rdm_devices, 4);
        assert_eq!(list.plugins[0].active, Some(true));
        assert_eq!(list.plugins[1].active, None);
    }

    #[tokio::test]
    async fn test_universe_info() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        let info = context.client().universe_info(&UniverseId::from(3)).await.unwrap();

        assert_eq!(info.merge_mode, MergeMode::Ltp);
        assert_eq!(info.output_ports.len(), 1);
        assert_eq!(
            info.output_ports[0].priority.as_ref().map(|p| p.value),
            Some(100)
        );

        let missing = context.client().universe_info(&UniverseId::from(8)).await;
        assert!(matches!(missing, Err(ApiError::Status { code: 404, .. })));
    }

    #[tokio::test]
    async fn test_plugin_info() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        let info = context.client().plugin_info(1).await.unwrap();

        assert_eq!(info.name, "Dummy");
        assert_eq!(info.enabled, Some(true));
    }

    // =============================================================================
    // Control endpoints
    // =============================================================================

    #[tokio::test]
    async fn test_reload() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        context.client().reload().await.unwrap();
        context.client().reload().await.unwrap();

        assert_eq!(server.reloads(), 2);
    }

    #[tokio::test]
    async fn test_shutdown_refused_unless_enabled() {
        let server = FakeOla::spawn().await.unwrap();
        let context = server.context().unwrap();

        let refused = context.client().shutdown().await;
        assert!(matches!(refused, Err(ApiError::Status { code: 403, .. })));

        server.enable_quit();
        assert!(context.client().shutdown().await.is_ok());
    }
}
