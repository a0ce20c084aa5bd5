//! One-shot request/response exchange
//!
//! A session owns one connection for exactly one command:
//!
//! 1. connect
//! 2. read the greeting and derive the challenge
//! 3. validate and encode the request (with digest when required)
//! 4. send it in a single write
//! 5. read and parse one reply line
//!
//! The connection is closed afterwards on every path, including validation and
//! parse failures. Nothing is retried.

use pjlink_core::{Challenge, GreetingMode, Request, Response};
use pjlink_transport::Transport;
use tracing::{debug, trace};

use crate::error::Result;

/// Single-use PJLink session over a transport
pub struct Session {
    transport: Box<dyn Transport>,
    password: String,
    greeting_mode: GreetingMode,
}

impl Session {
    /// Create a session without a password
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            password: String::new(),
            greeting_mode: GreetingMode::default(),
        }
    }

    /// Set the password used when the projector requires authentication
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set how an unrecognized greeting is treated
    pub fn with_greeting_mode(mut self, mode: GreetingMode) -> Self {
        self.greeting_mode = mode;
        self
    }

    /// Run one full exchange and close the connection
    pub async fn exchange(mut self, request: &Request) -> Result<Response> {
        debug!("Exchanging {}", request);

        self.transport.connect().await?;

        let result = self.run(request).await;

        // The exchange outcome wins over a failed close
        if let Err(e) = self.transport.disconnect().await {
            debug!("Disconnect failed: {}", e);
        }

        result
    }

    async fn run(&mut self, request: &Request) -> Result<Response> {
        let greeting = self.transport.receive_line().await?;
        let challenge = Challenge::from_greeting(&greeting, self.greeting_mode)?;

        trace!(
            greeting = %greeting,
            authenticated = challenge.requires_auth(),
            "Received greeting"
        );

        let data = request.encode(challenge.seed(), &self.password)?;
        self.transport.send(&data).await?;

        let reply = self.transport.receive_line().await?;
        let response = Response::parse(&reply)?;

        debug!("Received {}", response);

        Ok(response)
    }
}
