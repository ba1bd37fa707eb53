use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum_macros::Display;

/// Default host client: port 10000 on the local machine.
pub const DEFAULT_CLIENT: (&str, u16) = ("127.0.0.1", 10000);

/// A single host client endpoint that can run mission instances.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientInfo {
    ip: String,
    port: u16,
}

impl ClientInfo {
    pub fn new(ip: impl Into<String>, port: u16) -> Self { Self { ip: ip.into(), port } }
    pub fn ip(&self) -> &str { &self.ip }
    pub fn port(&self) -> u16 { self.port }
}

impl Default for ClientInfo {
    fn default() -> Self { Self::new(DEFAULT_CLIENT.0, DEFAULT_CLIENT.1) }
}

impl Display for ClientInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}:{}", self.ip, self.port) }
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ClientParseError {
    MissingPort(String),
    InvalidPort(String),
    EmptyHost(String),
    EmptyPool,
}

impl std::error::Error for ClientParseError {}

impl FromStr for ClientInfo {
    type Err = ClientParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim();
        let (ip, port_str) =
            entry.rsplit_once(':').ok_or_else(|| ClientParseError::MissingPort(entry.to_string()))?;
        if ip.is_empty() {
            return Err(ClientParseError::EmptyHost(entry.to_string()));
        }
        let port = port_str.parse::<u16>().map_err(|_| ClientParseError::InvalidPort(entry.to_string()))?;
        Ok(Self::new(ip, port))
    }
}

/// The set of host clients a mission may be scheduled on.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ClientPool {
    clients: Vec<ClientInfo>,
}

impl ClientPool {
    pub fn new() -> Self { Self { clients: Vec::new() } }

    pub fn add(&mut self, client: ClientInfo) {
        if !self.clients.contains(&client) {
            self.clients.push(client);
        }
    }

    pub fn clients(&self) -> &[ClientInfo] { &self.clients }
    pub fn len(&self) -> usize { self.clients.len() }
    pub fn is_empty(&self) -> bool { self.clients.is_empty() }
}

impl Default for ClientPool {
    fn default() -> Self {
        let mut pool = Self::new();
        pool.add(ClientInfo::default());
        pool
    }
}

impl FromStr for ClientPool {
    type Err = ClientParseError;

    /// Parses a comma separated list of `ip:port` entries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pool = Self::new();
        for entry in s.split(',').filter(|e| !e.trim().is_empty()) {
            pool.add(entry.parse()?);
        }
        if pool.is_empty() {
            return Err(ClientParseError::EmptyPool);
        }
        Ok(pool)
    }
}

impl Display for ClientPool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self.clients.iter().map(ToString::to_string).collect();
        write!(f, "{}", entries.join(","))
    }
}
