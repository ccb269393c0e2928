//! # Keypad Integration Flows
//!
//! Key presses through `KeypadBuffer`, a parsed `KeypadCommand` and
//! `KeypadService::submit` against the fake server's `/set_dmx`.

#[cfg(test)]
mod tests {
    use crate::fake_server::{DmxReply, FakeOla};
    use ola_01_server_api::{ApiError, ServerContext};
    use ola_03_keypad::{Edit, KeypadBuffer, KeypadCommand, KeypadError, KeypadKey, KeypadService};
    use shared_types::UniverseId;

    fn type_keys(buffer: &mut KeypadBuffer, keys: &str) {
        for c in keys.chars() {
            let key = KeypadKey::from_char(c).unwrap();
            assert!(!matches!(buffer.push(key), Edit::Rejected(_)), "key {:?} rejected", c);
        }
    }

    fn posted_frame(server: &FakeOla) -> Option<String> {
        server
            .set_dmx_posts()
            .last()
            .and_then(|form| form.get("d").cloned())
    }

    #[tokio::test]
    async fn test_range_at_full_keeps_other_channels() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("1", &[0, 0, 0, 0, 0, 0, 0, 0, 0, 50]);
        let service = KeypadService::new(server.context().unwrap());

        let mut buffer = KeypadBuffer::new();
        type_keys(&mut buffer, "1t5af");
        assert_eq!(buffer.as_str(), "1 THRU 5 @ FULL");

        let command = buffer.command().unwrap();
        let sent = service.submit(&UniverseId::from(1), &command).await.unwrap();

        assert_eq!(sent.get(4), Ok(255));
        assert_eq!(sent.get(9), Ok(50));
        assert_eq!(
            posted_frame(&server).as_deref(),
            Some("255,255,255,255,255,0,0,0,0,50")
        );
        assert_eq!(
            server.set_dmx_posts()[0].get("u").map(String::as_str),
            Some("1")
        );
    }

    #[tokio::test]
    async fn test_single_channel_level() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("2", &[]);
        let service = KeypadService::new(server.context().unwrap());

        let command = KeypadCommand::parse("3 @ 128").unwrap();
        service.submit(&UniverseId::from(2), &command).await.unwrap();

        assert_eq!(posted_frame(&server).as_deref(), Some("0,0,128"));
    }

    #[tokio::test]
    async fn test_out_of_range_channel_rejected_by_buffer() {
        let mut buffer = KeypadBuffer::new();
        type_keys(&mut buffer, "60");

        let edit = buffer.push(KeypadKey::Digit('0'));

        assert!(matches!(
            edit,
            Edit::Rejected(KeypadError::ChannelOutOfRange { channel: 600 })
        ));
        assert_eq!(buffer.as_str(), "60");
    }

    #[tokio::test]
    async fn test_fetch_failure_sends_nothing() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_reply("4", DmxReply::Error("Universe not found".to_string()));
        let service = KeypadService::new(server.context().unwrap());

        let command = KeypadCommand::parse("1 @ 10").unwrap();
        let result = service.submit(&UniverseId::from(4), &command).await;

        assert!(matches!(result, Err(KeypadError::Api(ApiError::Server(_)))));
        assert!(server.set_dmx_posts().is_empty());
    }

    #[tokio::test]
    async fn test_backwards_range_never_reaches_server() {
        let server = FakeOla::spawn().await.unwrap();
        server.set_levels("1", &[1]);
        let context: ServerContext = server.context().unwrap();
        let service = KeypadService::new(context);

        let command = KeypadCommand {
            begin: 9,
            end: 3,
            level: 10,
        };
        let result = service.submit(&UniverseId::from(1), &command).await;

        assert!(matches!(result, Err(KeypadError::EmptyRange { begin: 9, end: 3 })));
        assert_eq!(server.get_dmx_calls(), 0);
        assert!(server.set_dmx_posts().is_empty());
    }
}
