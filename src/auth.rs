/// Membership service access, passed around as an injected handle
use crate::error::AuthError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = getCurrentMember)]
    async fn js_get_current_member() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = openAuthModal)]
    async fn js_open_auth_modal(kind: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = logoutMember)]
    async fn js_logout_member() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = getMemberToken)]
    async fn js_get_member_token() -> Result<JsValue, JsValue>;
}

pub type AuthFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AuthError>> + 'a>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Member {
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// What the app needs from a membership provider
pub trait AuthService {
    fn get_current_member(&self) -> AuthFuture<'_, Option<Member>>;
    fn sign_in(&self) -> AuthFuture<'_, Option<Member>>;
    fn sign_up(&self) -> AuthFuture<'_, Option<Member>>;
    fn sign_out(&self) -> AuthFuture<'_, ()>;
    /// Bearer token for backend calls made on the member's behalf
    fn token(&self) -> AuthFuture<'_, Option<String>>;
}

/// Shared handle to the auth service, handed to components via context
#[derive(Clone)]
pub struct AuthHandle(Rc<dyn AuthService>);

impl AuthHandle {
    pub fn new(service: impl AuthService + 'static) -> AuthHandle {
        AuthHandle(Rc::new(service))
    }

    pub fn service(&self) -> &dyn AuthService {
        self.0.as_ref()
    }
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Checking,
    SignedOut,
    SignedIn(Member),
}

impl AuthState {
    pub fn from_member(member: Option<Member>) -> AuthState {
        match member {
            Some(member) => AuthState::SignedIn(member),
            None => AuthState::SignedOut,
        }
    }

    pub fn member(&self) -> Option<&Member> {
        match self {
            AuthState::SignedIn(member) => Some(member),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.member().is_some()
    }
}

/// Memberstack DOM package, reached through `bridge.js`
#[derive(Debug, Default, Clone, Copy)]
pub struct MemberstackAuth;

impl MemberstackAuth {
    async fn open_modal(kind: &str) -> Result<Option<Member>, AuthError> {
        js_open_auth_modal(kind).await.map_err(bridge_error)?;
        Self::current_member().await
    }

    async fn current_member() -> Result<Option<Member>, AuthError> {
        let value = js_get_current_member().await.map_err(bridge_error)?;
        decode_member(value)
    }

    async fn member_token() -> Result<Option<String>, AuthError> {
        let value = js_get_member_token().await.map_err(bridge_error)?;
        Ok(value.as_string().filter(|token| !token.is_empty()))
    }
}

impl AuthService for MemberstackAuth {
    fn get_current_member(&self) -> AuthFuture<'_, Option<Member>> {
        Box::pin(Self::current_member())
    }

    fn sign_in(&self) -> AuthFuture<'_, Option<Member>> {
        Box::pin(Self::open_modal("LOGIN"))
    }

    fn sign_up(&self) -> AuthFuture<'_, Option<Member>> {
        Box::pin(Self::open_modal("SIGNUP"))
    }

    fn sign_out(&self) -> AuthFuture<'_, ()> {
        Box::pin(async { js_logout_member().await.map_err(bridge_error) })
    }

    fn token(&self) -> AuthFuture<'_, Option<String>> {
        Box::pin(Self::member_token())
    }
}

fn bridge_error(err: JsValue) -> AuthError {
    AuthError::Bridge(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn decode_member(value: JsValue) -> Result<Option<Member>, AuthError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| AuthError::Decode(e.to_string()))
}

/// Fetch a bearer token, treating "no member" as an error
pub async fn require_token(auth: &dyn AuthService) -> Result<String, AuthError> {
    auth.token().await?.ok_or(AuthError::SignedOut)
}
