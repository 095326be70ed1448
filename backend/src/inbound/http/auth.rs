//! Authentication gate for protected routes.
//!
//! [`Authentication`] runs before routing. Public routes pass straight
//! through; everything else needs either an `Authorization: Basic` header
//! that [`LoginService`](crate::domain::ports::LoginService) accepts or a
//! session established by `POST /login`. Rejections are answered here, so
//! no extractor or handler of a protected route ever runs for an anonymous
//! caller.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{ResponseError, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::{Error, LoginCredentials};

use super::session::SessionContext;
use super::state::HttpState;

/// Whether `method path` may be served without credentials.
///
/// Public: `GET /hoteles`, `GET /hoteles/{one segment}`, login and logout,
/// health probes and the API docs.
///
/// # Examples
/// ```
/// use actix_web::http::Method;
/// use hotel_backend::inbound::http::auth::is_public;
///
/// assert!(is_public(&Method::GET, "/hoteles/busqueda"));
/// assert!(!is_public(&Method::GET, "/hoteles/precio/100"));
/// assert!(!is_public(&Method::POST, "/hoteles"));
/// ```
pub fn is_public(method: &Method, path: &str) -> bool {
    if matches!(path, "/login" | "/logout" | "/docs")
        || ["/health/", "/docs/", "/api-docs/"]
            .iter()
            .any(|prefix| path.starts_with(prefix))
    {
        return true;
    }
    if method != Method::GET {
        return false;
    }
    match path.strip_prefix("/hoteles") {
        Some("" | "/") => true,
        Some(rest) => rest
            .strip_prefix('/')
            .is_some_and(|segment| !segment.is_empty() && !segment.contains('/')),
        None => false,
    }
}

/// Parse an `Authorization: Basic` header value into credentials.
///
/// # Errors
/// `Unauthorized` for any other scheme, bad base64, non UTF-8 payload,
/// a missing `:` separator or blank parts.
pub fn decode_basic(header: &str) -> Result<LoginCredentials, Error> {
    let (scheme, encoded) = header
        .trim()
        .split_once(' ')
        .ok_or_else(|| Error::unauthorized("Cabecera Authorization mal formada"))?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(Error::unauthorized("Esquema de autenticacion no soportado"));
    }
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| Error::unauthorized("Credenciales Basic mal codificadas"))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| Error::unauthorized("Credenciales Basic mal codificadas"))?;
    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| Error::unauthorized("Credenciales Basic mal formadas"))?;
    LoginCredentials::try_from_parts(username, password)
        .map_err(|err| Error::unauthorized(err.to_string()))
}

async fn authenticate_request(req: &ServiceRequest) -> Result<String, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state not registered"))?;

    if let Some(header) = req.headers().get(AUTHORIZATION) {
        let header = header
            .to_str()
            .map_err(|_| Error::unauthorized("Cabecera Authorization mal formada"))?;
        let credentials = decode_basic(header)?;
        let user = state.login.authenticate(&credentials).await?;
        return Ok(user.username().to_owned());
    }

    SessionContext::new(req.get_session())
        .username()?
        .ok_or_else(|| Error::unauthorized("Se requiere autenticacion"))
}

/// Middleware factory guarding protected routes.
///
/// Must be wrapped inside the session middleware so the session cookie is
/// available.
#[derive(Clone, Copy, Debug, Default)]
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service produced by [`Authentication`].
pub struct AuthenticationMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public(req.method(), req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            match authenticate_request(&req).await {
                Ok(username) => {
                    debug!(username = %username, path = req.path(), "request authenticated");
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    debug!(kind = ?err.kind(), path = req.path(), "request rejected");
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
