//! Authenticated API client: one method per server endpoint.

pub mod operation;

pub use operation::{Operation, Response};

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::auth::keys::{self, DeviceKeyPair};
use crate::auth::{DevicePoll, DevicePollResponse, DeviceStartRequest, DeviceStartResponse};
use crate::config::ClientConfig;
use crate::error::{ClawsinoError, Result};
use crate::http;
use crate::types::{
    Account, Decoded, DiceBetRequest, DiceBetResult, HealthStatus, Leaderboard, PokerAck, PokerActRequest,
    PokerAction, PokerHand, PokerJoinRequest, PokerTableState, PokerTables, SlotsSpinRequest,
    SlotsSpinResult,
};

/// How an endpoint treats the session token.
#[derive(Debug, Clone, Copy)]
enum Auth {
    /// Fail with [`ClawsinoError::MissingToken`] before sending when unset.
    Required(&'static str),
    /// Attach when configured.
    Optional,
    /// Never attach.
    None,
}

/// Client for the Clawsino HTTP API.
///
/// Every call is a single request/response round trip. Nothing is retried
/// and nothing is cached between calls.
///
/// # Example
/// ```no_run
/// use clawsino::client::ClawsinoClient;
/// use clawsino::config::ClientConfig;
///
/// # async fn example() -> clawsino::error::Result<()> {
/// let client = ClawsinoClient::new(ClientConfig::from_env().with_token("session"))?;
/// let me = client.me().await?;
/// println!("{:?} has {:?} chips", me.handle, me.balance);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClawsinoClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ClawsinoClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = http::build_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /healthz`
    pub async fn health(&self) -> Result<Decoded<HealthStatus>> {
        let value = self.get(&["healthz"], Auth::None).await?;
        decode(value)
    }

    /// `GET /v1/me`
    pub async fn me(&self) -> Result<Decoded<Account>> {
        let value = self.get(&["v1", "me"], Auth::Required("me")).await?;
        decode(value)
    }

    /// `GET /v1/leaderboard?limit=N`. The limit is passed through unchecked.
    pub async fn leaderboard(&self, limit: u32) -> Result<Decoded<Leaderboard>> {
        let mut url = self.url(&["v1", "leaderboard"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        let value = self.send(Method::GET, url, None, Auth::Optional).await?;
        decode(value)
    }

    /// `POST /v1/dice/bet`
    pub async fn dice_bet(&self, request: &DiceBetRequest) -> Result<Decoded<DiceBetResult>> {
        request.validate()?;
        let value = self
            .post(&["v1", "dice", "bet"], request, Auth::Required("dice"))
            .await?;
        decode(value)
    }

    /// `POST /v1/slots/spin`
    pub async fn slots_spin(&self, amount: u64) -> Result<Decoded<SlotsSpinResult>> {
        let value = self
            .post(
                &["v1", "slots", "spin"],
                &SlotsSpinRequest { amount },
                Auth::Required("slots"),
            )
            .await?;
        decode(value)
    }

    /// `GET /v1/poker/tables`
    pub async fn poker_tables(&self) -> Result<Decoded<PokerTables>> {
        let value = self
            .get(&["v1", "poker", "tables"], Auth::Required("poker-tables"))
            .await?;
        decode(value)
    }

    /// `POST /v1/poker/tables/{id}/join`
    pub async fn poker_join(
        &self,
        table: &str,
        buy_in: u64,
        seat: Option<u32>,
    ) -> Result<Decoded<PokerAck>> {
        let table = require_id("table", table)?;
        let value = self
            .post(
                &["v1", "poker", "tables", table, "join"],
                &PokerJoinRequest { buy_in, seat },
                Auth::Required("poker-join"),
            )
            .await?;
        decode(value)
    }

    /// `GET /v1/poker/tables/{id}/state`
    pub async fn poker_state(&self, table: &str) -> Result<Decoded<PokerTableState>> {
        let table = require_id("table", table)?;
        let value = self
            .get(
                &["v1", "poker", "tables", table, "state"],
                Auth::Required("poker-state"),
            )
            .await?;
        decode(value)
    }

    /// `POST /v1/poker/tables/{id}/act`
    pub async fn poker_act(
        &self,
        table: &str,
        action: PokerAction,
        amount: Option<u64>,
    ) -> Result<Decoded<PokerAck>> {
        let table = require_id("table", table)?;
        let value = self
            .post(
                &["v1", "poker", "tables", table, "act"],
                &PokerActRequest { action, amount },
                Auth::Required("poker-act"),
            )
            .await?;
        decode(value)
    }

    /// `POST /v1/poker/tables/{id}/leave`
    pub async fn poker_leave(&self, table: &str) -> Result<Decoded<PokerAck>> {
        let table = require_id("table", table)?;
        let value = self
            .post(
                &["v1", "poker", "tables", table, "leave"],
                &json!({}),
                Auth::Required("poker-leave"),
            )
            .await?;
        decode(value)
    }

    /// `GET /v1/poker/hands/{id}`
    pub async fn poker_hand(&self, hand: &str) -> Result<Decoded<PokerHand>> {
        let hand = require_id("hand", hand)?;
        let value = self
            .get(&["v1", "poker", "hands", hand], Auth::Required("poker-hand"))
            .await?;
        decode(value)
    }

    /// Start device authorization with a freshly generated key pair.
    ///
    /// The secret half is dropped; use
    /// [`device_start_with_public_key`](Self::device_start_with_public_key)
    /// with a [`DeviceKeyPair`] you keep to reuse an identity.
    pub async fn device_start(
        &self,
        client_name: &str,
        handle: &str,
    ) -> Result<Decoded<DeviceStartResponse>> {
        let key = DeviceKeyPair::generate();
        self.device_start_with_public_key(client_name, handle, &key.public_key_base64())
            .await
    }

    /// `POST /v1/device/start` registering a caller-supplied public key.
    ///
    /// The registered key is added to the returned body as `publicKey`.
    pub async fn device_start_with_public_key(
        &self,
        client_name: &str,
        handle: &str,
        public_key: &str,
    ) -> Result<Decoded<DeviceStartResponse>> {
        let public_key = keys::validate_public_key(public_key)?;
        let request = DeviceStartRequest {
            client_name: client_name.to_string(),
            requested_handle: handle.to_string(),
            public_key: public_key.clone(),
        };
        let mut value = self
            .post(&["v1", "device", "start"], &request, Auth::None)
            .await?;
        if let Value::Object(fields) = &mut value {
            fields.insert("publicKey".to_string(), Value::String(public_key));
        }
        decode(value)
    }

    /// `POST /v1/device/poll`: one attempt, no waiting.
    ///
    /// A pending authorization is an `Ok` result, whatever status code the
    /// server used to report it.
    pub async fn device_poll(&self, device_code: &str) -> Result<DevicePollResponse> {
        let device_code = require_id("device code", device_code)?;
        let url = self.url(&["v1", "device", "poll"])?;
        let resp = self
            .dispatch(
                Method::POST,
                url,
                Some(json!({ "deviceCode": device_code })),
                Auth::None,
            )
            .await?;
        let status = resp.status();
        let text = resp.text().await?;

        match http::parse_body(&text) {
            Ok(body) => {
                if let Some(state) = DevicePoll::classify(status.as_u16(), &body) {
                    debug!(terminal = state.is_terminal(), "device poll classified");
                    return Ok(DevicePollResponse { state, body });
                }
            }
            Err(err) if status.is_success() => return Err(err),
            Err(_) => {}
        }

        if status.is_success() {
            Err(ClawsinoError::InvalidResponse(
                "device poll response carries neither a session token nor a state".to_string(),
            ))
        } else {
            Err(ClawsinoError::from_status(status.as_u16(), text))
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        http::endpoint(self.config.base_url(), segments)
    }

    fn token_for(&self, auth: Auth) -> Result<Option<&str>> {
        match auth {
            Auth::Required(operation) => self
                .config
                .token()
                .map(Some)
                .ok_or(ClawsinoError::MissingToken { operation }),
            Auth::Optional => Ok(self.config.token()),
            Auth::None => Ok(None),
        }
    }

    async fn get(&self, segments: &[&str], auth: Auth) -> Result<Value> {
        let url = self.url(segments)?;
        self.send(Method::GET, url, None, auth).await
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        auth: Auth,
    ) -> Result<Value> {
        let url = self.url(segments)?;
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, url, Some(body), auth).await
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
        auth: Auth,
    ) -> Result<Value> {
        let resp = self.dispatch(method, url, body, auth).await?;
        http::read_json(resp).await
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
        auth: Auth,
    ) -> Result<reqwest::Response> {
        let token = self.token_for(auth)?;
        debug!(%method, %url, authenticated = token.is_some(), "sending request");
        let mut builder = self
            .http
            .request(method, url)
            .headers(http::json_headers(token, body.is_some())?);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let resp = builder.send().await?;
        debug!(status = resp.status().as_u16(), "response received");
        Ok(resp)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<Decoded<T>> {
    Decoded::from_value(value)
}

fn require_id<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClawsinoError::InvalidArgument(format!(
            "{what} must not be empty"
        )));
    }
    Ok(trimmed)
}
