//! Executes [`ApiCall`]s against the backend.
//!
//! Client-side: real HTTP via `gloo-net`. Elsewhere (server-side rendering,
//! native tests) calls fail with a transport error, since these endpoints
//! are only meaningful in the browser.
//!
//! Failures are logged and optionally toasted; nothing is retried.

use helpmap_core::{ApiCall, ApiConfig, ApiError, ToastKind};
use serde::de::DeserializeOwned;

use crate::components::toast::{ToastAction, ToastContext};

/// Send one call and decode its answer.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the request cannot be sent or read,
/// and any decoding or rejection error from [`ApiCall::decode_response`].
#[allow(clippy::future_not_send)] // gloo-net futures wrap `JsFuture`, which is not `Send`.
pub async fn send<T: DeserializeOwned>(
    config: &ApiConfig,
    call: &ApiCall<T>,
) -> Result<T, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;
        use helpmap_core::Method;

        let url = config.url_for(&call.request);
        log::debug!("{} {url}", call.request.method);
        let builder = match call.request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let request = match &call.request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(transport)?;
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        call.decode_response(status, &body)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (config, call);
        Err(ApiError::Transport(
            "HTTP is only available in the browser".to_string(),
        ))
    }
}

#[cfg(target_arch = "wasm32")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Send `call` in the background and hand the result to `on_done`.
pub fn spawn<T, F>(call: ApiCall<T>, on_done: F)
where
    T: DeserializeOwned + 'static,
    F: FnOnce(Result<T, ApiError>) + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let config = ApiConfig::default();
            on_done(send(&config, &call).await);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (call, on_done);
    }
}

/// Log a failed call and, when a toast host is around, tell the user.
pub fn report_failure(context: &str, err: &ApiError, toasts: Option<&ToastContext>) {
    log::error!("{context}: {err}");
    if let Some(toasts) = toasts {
        toasts.dispatch(ToastAction::Show(err.to_string(), ToastKind::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpmap_core::StatusApi;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_send_reports_transport_error() {
        let config = ApiConfig::default();
        let call = StatusApi::check_status();
        let result = futures::executor::block_on(send(&config, &call));
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
