//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: hook order (before first→last, after last→first), a before hook stopping the chain,
//! the first claiming handler ending the handle phase, Ignore passing through, and errors
//! propagating out of the chain.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use handler_chain::HandlerChain;
use pollbot_core::{Chat, Handler, HandlerError, HandlerResponse, Message, User};

fn message(content: &str) -> Message {
    Message {
        id: "1100".to_string(),
        user: User {
            id: 42,
            name: "alice".to_string(),
            is_bot: false,
        },
        chat: Chat { id: 7 },
        content: content.to_string(),
        from_self: false,
        nonce: None,
        created_at: Utc::now(),
    }
}

type Log = Arc<Mutex<Vec<String>>>;

/// Records every hook call as `<phase>_<name>` and answers `handle` with a fixed response.
struct Recorder {
    name: &'static str,
    log: Log,
    allow: bool,
    response: HandlerResponse,
}

impl Recorder {
    fn new(name: &'static str, log: &Log, response: HandlerResponse) -> Arc<Self> {
        Arc::new(Self {
            name,
            log: log.clone(),
            allow: true,
            response,
        })
    }

    fn blocking(name: &'static str, log: &Log) -> Arc<Self> {
        Arc::new(Self {
            name,
            log: log.clone(),
            allow: false,
            response: HandlerResponse::Continue,
        })
    }
}

#[async_trait::async_trait]
impl Handler for Recorder {
    async fn before(&self, _message: &Message) -> pollbot_core::Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> pollbot_core::Result<HandlerResponse> {
        self.log.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(
        &self,
        _message: &Message,
        response: &HandlerResponse,
    ) -> pollbot_core::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("after_{}:{:?}", self.name, response));
        Ok(())
    }
}

/// **Test: hooks run before in order, handle in order, after in reverse; Continue when nobody claims.**
#[tokio::test]
async fn test_hook_order_without_claim() {
    let log = Log::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::new("first", &log, HandlerResponse::Continue))
        .add_handler(Recorder::new("second", &log, HandlerResponse::Ignore));

    let result = chain.handle(&message("hello")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "before_first",
            "before_second",
            "handle_first",
            "handle_second",
            "after_second:Continue",
            "after_first:Continue",
        ]
    );
}

/// **Test: a before hook returning false stops everything; no handle or after runs.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    let log = Log::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::blocking("gate", &log))
        .add_handler(Recorder::new("poll", &log, HandlerResponse::Stop));

    let result = chain.handle(&message("/poll \"q\"")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["before_gate"]);
}

/// **Test: the first handler returning Reply ends the handle phase and every after sees the Reply.**
#[tokio::test]
async fn test_reply_claims_message() {
    let log = Log::default();
    let reply = HandlerResponse::Reply("poll sent".to_string());
    let chain = HandlerChain::new()
        .add_handler(Recorder::new("echo", &log, HandlerResponse::Ignore))
        .add_handler(Recorder::new("command", &log, reply.clone()))
        .add_handler(Recorder::new("never", &log, HandlerResponse::Stop));

    let result = chain.handle(&message("/poll \"q\"")).await.unwrap();

    assert_eq!(result, reply);
    let log = log.lock().unwrap();
    assert!(!log.contains(&"handle_never".to_string()));
    assert_eq!(
        log[log.len() - 3..],
        [
            "after_never:Reply(\"poll sent\")".to_string(),
            "after_command:Reply(\"poll sent\")".to_string(),
            "after_echo:Reply(\"poll sent\")".to_string(),
        ]
    );
}

/// **Test: an error from handle propagates and skips the after phase.**
#[tokio::test]
async fn test_handle_error_propagates() {
    struct Failing;

    #[async_trait::async_trait]
    impl Handler for Failing {
        async fn handle(&self, _message: &Message) -> pollbot_core::Result<HandlerResponse> {
            Err(HandlerError::State("send failed".to_string()).into())
        }
    }

    let log = Log::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::new("logging", &log, HandlerResponse::Continue))
        .add_handler(Arc::new(Failing));

    let err = chain.handle(&message("/poll \"q\"")).await.unwrap_err();

    assert!(err.to_string().contains("send failed"));
    assert!(log.lock().unwrap().iter().all(|e| !e.starts_with("after_")));
}

#[test]
fn test_len() {
    let log = Log::default();
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let chain = chain.add_handler(Recorder::new("one", &log, HandlerResponse::Continue));
    assert_eq!(chain.len(), 1);
}
