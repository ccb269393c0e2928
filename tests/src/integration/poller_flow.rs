//! # Poller Integration Flows
//!
//! `ChannelPoller` driven by `HttpDmxSource` over real HTTP, with events
//! observed through `shared-bus`.
//!
//! ## Flows Tested:
//!
//! 1. **Server → Poller**: object and array snapshots land in the array
//! 2. **Failed fetch**: empty body / error string leave the array as it was
//! 3. **Poller → Bus**: lifecycle, applied and failure events reach a subscriber
//! 4. **Stop**: nothing changes after `stop()` returns

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::fake_server::{DmxReply, FakeOla};
    use ola_02_channel_poller::{
        ChannelMonitor, ChannelPoller, HttpDmxSource, PollerConfig,
    };
    use serde_json::json;
    use shared_bus::{EventFilter, EventTopic, InMemoryEventBus, PollerEvent};
    use shared_types::{DisplayClass, UniverseId, DMX_UNIVERSE_SIZE};
    use tokio::time::{sleep, timeout};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PERIOD: Duration = Duration::from_millis(20);

    fn http_poller(server: &FakeOla) -> ChannelPoller<HttpDmxSource> {
        let source = HttpDmxSource::new(server.context().unwrap());
        ChannelPoller::new(source, PollerConfig::default().with_period(PERIOD)).unwrap()
    }

    /// Poll `check` until it holds or five seconds pass.
    async fn eventually(mut check: impl FnMut() -> bool) -> bool {
        timeout(Duration::from_secs(5), async {
            while !check() {
                sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .is_ok()
    }

    // =============================================================================
    // SERVER → POLLER
    // =============================================================================

    #[tokio::test]
    async fn test_first_poll_populates_channels() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_reply("3", DmxReply::Object(vec![(0, json!(255)), (5, json!(10))]));
        let poller = http_poller(&server);

        poller.start(UniverseId::from(3)).unwrap();
        assert!(eventually(|| poller.stats().applied > 0).await);

        let channels = poller.channels();
        assert_eq!(channels.get(0), Ok(255));
        assert_eq!(channels.get(5), Ok(10));
        assert_eq!(channels.non_zero_count(), 2);
        assert_eq!(poller.display_class(0), Ok(DisplayClass::Dark));
        assert_eq!(poller.display_class(5), Ok(DisplayClass::Light));

        poller.stop();
    }

    #[tokio::test]
    async fn test_changed_levels_replace_previous_frame() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("1", &[100, 100, 100]);
        let poller = http_poller(&server);

        poller.start(UniverseId::from(1)).unwrap();
        assert!(eventually(|| poller.channel_value(2) == Ok(100)).await);

        // Channel 3 is no longer reported, so it merges as 0.
        server.set_levels("1", &[50]);
        assert!(eventually(|| poller.channel_value(0) == Ok(50)).await);
        assert_eq!(poller.channel_value(2), Ok(0));

        poller.stop();
    }

    // =============================================================================
    // FAILED FETCHES
    // =============================================================================

    #[tokio::test]
    async fn test_unknown_universe_keeps_zeroed_array() {
        let server = FakeOla::spawn().await.unwrap();
        let poller = http_poller(&server);

        poller.start(UniverseId::from(99)).unwrap();
        assert!(eventually(|| poller.stats().failed >= 2).await);

        let stats = poller.stats();
        assert_eq!(stats.applied, 0);
        assert!(stats.last_error.is_some());
        assert_eq!(poller.channels().non_zero_count(), 0);
        assert!(poller.is_running());

        poller.stop();
    }

    #[tokio::test]
    async fn test_failure_after_success_leaves_array_unchanged() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("3", &[255, 0, 0, 0, 0, 10]);
        let poller = http_poller(&server);

        poller.start(UniverseId::from(3)).unwrap();
        assert!(eventually(|| poller.stats().applied > 0).await);
        let before = poller.channels();

        server.set_reply("3", DmxReply::EmptyBody);
        let failed = poller.stats().failed;
        assert!(eventually(|| poller.stats().failed >= failed + 2).await);
        assert_eq!(poller.channels(), before);

        server.set_reply("3", DmxReply::Error("Universe removed".to_string()));
        let failed = poller.stats().failed;
        assert!(eventually(|| poller.stats().failed > failed).await);
        assert_eq!(poller.channels(), before);

        poller.stop();
    }

    // =============================================================================
    // POLLER → BUS
    // =============================================================================

    #[tokio::test]
    async fn test_events_reach_subscriber() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("7", &[1, 2, 3]);
        let bus = Arc::new(InMemoryEventBus::new());
        let poller = http_poller(&server).with_publisher(bus.clone());
        let mut sub = bus.subscribe(EventFilter::universe(UniverseId::from(7)));

        poller.start(UniverseId::from(7)).unwrap();

        let first = timeout(Duration::from_secs(5), sub.recv()).await.unwrap().unwrap();
        assert_eq!(first.topic(), EventTopic::Lifecycle);

        let applied = timeout(Duration::from_secs(5), sub.recv()).await.unwrap().unwrap();
        assert!(matches!(
            applied,
            PollerEvent::SnapshotApplied { non_zero: 3, .. }
        ));

        poller.stop();
    }

    #[tokio::test]
    async fn test_failures_published_on_error_topic() {
        let server = FakeOla::spawn().await.unwrap();
        let bus = Arc::new(InMemoryEventBus::new());
        let poller = http_poller(&server).with_publisher(bus.clone());
        let mut errors = bus.subscribe(EventFilter::topics(vec![EventTopic::Errors]));

        poller.start(UniverseId::from(99)).unwrap();

        let event = timeout(Duration::from_secs(5), errors.recv()).await.unwrap().unwrap();
        match event {
            PollerEvent::FetchFailed { universe, reason, .. } => {
                assert_eq!(universe, UniverseId::from(99));
                assert!(!reason.is_empty());
            }
            other => panic!("expected FetchFailed, got {:?}", other),
        }

        poller.stop();
        errors.unsubscribe();
        assert_eq!(bus.subscriber_count(), 0);
    }

    // =============================================================================
    // STOP
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_no_mutation_after_stop() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("2", &[10; DMX_UNIVERSE_SIZE]);
        let poller = http_poller(&server);

        poller.start(UniverseId::from(2)).unwrap();
        assert!(eventually(|| poller.stats().applied > 0).await);

        poller.stop();
        let frozen = poller.channels();
        let stats = poller.stats();

        server.set_levels("2", &[200; DMX_UNIVERSE_SIZE]);
        sleep(PERIOD * 10).await;

        assert_eq!(poller.channels(), frozen);
        assert_eq!(poller.stats().applied, stats.applied);
        assert!(!poller.is_running());
    }

    #[tokio::test]
    async fn test_restart_switches_universe() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("1", &[11]);
        server.set_levels("2", &[0, 22]);
        let poller = http_poller(&server);

        poller.start(UniverseId::from(1)).unwrap();
        assert!(eventually(|| poller.channel_value(0) == Ok(11)).await);
        let generation = poller.generation();

        poller.start(UniverseId::from(2)).unwrap();
        assert!(poller.generation() > generation);
        assert_eq!(poller.universe(), Some(UniverseId::from(2)));
        assert!(eventually(|| poller.channel_value(1) == Ok(22)).await);
        assert_eq!(poller.channel_value(0), Ok(0));

        poller.stop();
    }
}
