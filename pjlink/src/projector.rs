//! High-level projector interface

use std::time::Duration;

use pjlink_core::{
    constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_PORT, DEFAULT_READ_TIMEOUT},
    GreetingMode, Request, Response,
};
use pjlink_transport::TcpTransport;
use pjlink_types::{
    AvMute, ErrorCode, ErrorStatus, InputSource, Lamp, PowerStatus, ProjectorInfo,
};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::session::Session;

/// PJLink projector
///
/// Holds the endpoint only. Every operation opens its own connection, runs one
/// command and closes it, so a `Projector` can be cloned and shared freely.
///
/// # Examples
///
/// ```no_run
/// use pjlink::Projector;
///
/// #[tokio::main]
/// async fn main() -> pjlink::Result<()> {
///     let projector = Projector::new("192.168.1.50", "JBMIAProjectorLink");
///
///     projector.turn_on().await?;
///     println!("Power: {}", projector.power_status().await?);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Projector {
    address: String,
    port: u16,
    password: String,
    connect_timeout: Duration,
    read_timeout: Option<Duration>,
    greeting_mode: GreetingMode,
}

impl Projector {
    /// Create a projector endpoint (an empty password means no credential)
    pub fn new(address: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: DEFAULT_PORT,
            password: password.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
            greeting_mode: GreetingMode::default(),
        }
    }

    /// Override the TCP port (default: 4352)
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the deadline for each line read (`None` waits indefinitely)
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set how an unrecognized greeting is treated
    pub fn with_greeting_mode(mut self, mode: GreetingMode) -> Self {
        self.greeting_mode = mode;
        self
    }

    /// Projector address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Projector port
    pub fn port(&self) -> u16 {
        self.port
    }

    // Power

    /// Query power status, returning the raw reply
    pub async fn get_power_status(&self) -> Result<Response> {
        self.send_request(Request::query("POWR")).await
    }

    /// Turn the projector on
    pub async fn turn_on(&self) -> Result<()> {
        info!("Turning on projector at {}", self.address);

        let response = self.send_request(Request::new(1, "POWR", "1")).await?;

        if !response.is_success() {
            return Err(Error::CouldNotTurnOn(response.value().to_string()));
        }
        Ok(())
    }

    /// Turn the projector off
    pub async fn turn_off(&self) -> Result<()> {
        info!("Turning off projector at {}", self.address);

        let response = self.send_request(Request::new(1, "POWR", "0")).await?;

        if !response.is_success() {
            return Err(Error::CouldNotTurnOff(response.value().to_string()));
        }
        Ok(())
    }

    /// Query power status as a typed value
    pub async fn power_status(&self) -> Result<PowerStatus> {
        let response = self.query("POWR").await?;
        Ok(response.value().parse()?)
    }

    // Generic properties

    /// Query a class 1 property, returning the first reply token
    pub async fn get_property(&self, name: &str) -> Result<String> {
        let response = self.send_request(Request::query(name)).await?;
        Ok(response.value().to_string())
    }

    /// Query a class 1 property, returning every reply token
    pub async fn get_property_array(&self, name: &str) -> Result<Vec<String>> {
        let response = self.send_request(Request::query(name)).await?;
        Ok(response.tokens)
    }

    /// Set a class 1 property; the reply value is not inspected
    pub async fn set_property(&self, name: &str, value: &str) -> Result<()> {
        self.send_request(Request::new(1, name, value)).await?;
        Ok(())
    }

    // Inputs and mute

    /// Current input source
    pub async fn input(&self) -> Result<InputSource> {
        let response = self.query("INPT").await?;
        Ok(response.value().parse()?)
    }

    /// Switch input source
    pub async fn set_input(&self, input: InputSource) -> Result<()> {
        self.command("INPT", &input.to_string()).await
    }

    /// Available input sources
    pub async fn inputs(&self) -> Result<Vec<InputSource>> {
        let response = self.query("INST").await?;
        Ok(InputSource::parse_list(response.tokens.iter().map(String::as_str))?)
    }

    /// Current mute state
    pub async fn av_mute(&self) -> Result<AvMute> {
        let response = self.query("AVMT").await?;
        Ok(response.value().parse()?)
    }

    /// Change mute state
    pub async fn set_av_mute(&self, mute: AvMute) -> Result<()> {
        self.command("AVMT", mute.code()).await
    }

    // Status and identification

    /// Lamp hours and states
    pub async fn lamps(&self) -> Result<Vec<Lamp>> {
        let response = self.query("LAMP").await?;
        Ok(Lamp::parse_list(response.tokens.iter().map(String::as_str))?)
    }

    /// Component error report
    pub async fn error_status(&self) -> Result<ErrorStatus> {
        let response = self.query("ERST").await?;
        Ok(response.value().parse()?)
    }

    /// Gather name, manufacturer, product, other info and class
    ///
    /// Runs five independent exchanges, one per property.
    pub async fn projector_info(&self) -> Result<ProjectorInfo> {
        debug!("Getting projector info...");

        let info = ProjectorInfo {
            name: self.query("NAME").await?.text(),
            manufacturer: self.query("INF1").await?.text(),
            product: self.query("INF2").await?.text(),
            other: self.query("INFO").await?.text(),
            class: self.query("CLSS").await?.text(),
        };

        debug!("Projector info: {}", info);

        Ok(info)
    }

    // Low-level

    /// Validate and send a request over a fresh connection
    ///
    /// A request that fails validation never opens a connection.
    pub async fn send_request(&self, request: Request) -> Result<Response> {
        request.validate()?;

        let transport = TcpTransport::new(self.address.clone(), self.port)
            .with_connect_timeout(self.connect_timeout)
            .with_read_timeout(self.read_timeout);

        Session::new(Box::new(transport))
            .with_password(self.password.clone())
            .with_greeting_mode(self.greeting_mode)
            .exchange(&request)
            .await
    }

    // Helper methods

    /// Query that treats an `ERRn` reply as an error
    async fn query(&self, name: &str) -> Result<Response> {
        let response = self.send_request(Request::query(name)).await?;

        if response.is_error() {
            return Err(rejection(&response));
        }
        Ok(response)
    }

    /// Set command that requires an `OK` reply
    async fn command(&self, name: &str, value: &str) -> Result<()> {
        let response = self.send_request(Request::new(1, name, value)).await?;

        if !response.is_success() {
            return Err(rejection(&response));
        }
        Ok(())
    }
}

fn rejection(response: &Response) -> Error {
    match ErrorCode::from_value(response.value()) {
        Some(code) => Error::Rejected {
            command: response.command.clone(),
            code,
        },
        None => pjlink_types::Error::Parse(format!("Unexpected reply: {}", response)).into(),
    }
}
