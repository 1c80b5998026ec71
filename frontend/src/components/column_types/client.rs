//! `TypeBackend` implementation over `fetch`, via `gloo-net`.
//!
//! Both requests are multipart (`FormData`); the browser picks the boundary
//! so no `Content-Type` header is set by hand. Every request, body included,
//! is raced against the configured timeout.

use std::future::Future;
use std::pin::pin;

use common::api::{parse_inferred_types, Endpoints, DATA_FIELD, FILE_FIELD};
use common::config::EditorConfig;
use common::editor::TypeBackend;
use common::error::EditorError;
use common::model::ColumnTypeList;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::FormData;

#[derive(Debug, Clone)]
pub struct HttpTypeBackend {
    endpoints: Endpoints,
    timeout_ms: u32,
}

impl HttpTypeBackend {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            endpoints: config.endpoints(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    fn timer(&self) -> TimeoutFuture {
        TimeoutFuture::new(self.timeout_ms)
    }
}

impl TypeBackend for HttpTypeBackend {
    type File = web_sys::File;

    async fn infer_types(&self, file: &web_sys::File) -> Result<ColumnTypeList, EditorError> {
        let form = FormData::new().map_err(js_transport)?;
        form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
            .map_err(js_transport)?;
        let url = self.endpoints.infer_types();

        with_timeout(self.timeout_ms, self.timer(), async move {
            let response = post_form(url, form).await?;
            let body = response
                .text()
                .await
                .map_err(|e| EditorError::MalformedResponse(e.to_string()))?;
            parse_inferred_types(&body)
        })
        .await
    }

    async fn save_types(&self, data: &str) -> Result<Vec<u8>, EditorError> {
        let form = FormData::new().map_err(js_transport)?;
        form.append_with_str(DATA_FIELD, data).map_err(js_transport)?;
        let url = self.endpoints.save_types();

        with_timeout(self.timeout_ms, self.timer(), async move {
            let response = post_form(url, form).await?;
            response
                .binary()
                .await
                .map_err(|e| EditorError::MalformedResponse(e.to_string()))
        })
        .await
    }
}

/// POSTs `form` to `url`; anything but a 2xx answer is an error.
async fn post_form(url: &str, form: FormData) -> Result<Response, EditorError> {
    let response = Request::post(url)
        .body(form)
        .map_err(|e| EditorError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| EditorError::Transport(e.to_string()))?;

    check_status(response.ok(), response.status())?;
    Ok(response)
}

fn check_status(ok: bool, status: u16) -> Result<(), EditorError> {
    if ok {
        Ok(())
    } else {
        Err(EditorError::Status(status))
    }
}

/// Resolves to `EditorError::Timeout` if `timer` fires before `request` is
/// done. The underlying fetch is dropped, not aborted.
async fn with_timeout<T>(
    timeout_ms: u32,
    timer: impl Future<Output = ()>,
    request: impl Future<Output = Result<T, EditorError>>,
) -> Result<T, EditorError> {
    let request = pin!(request);
    let timer = pin!(timer);
    match select(request, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(EditorError::Timeout(timeout_ms)),
    }
}

fn js_transport(err: JsValue) -> EditorError {
    EditorError::Transport(format!("{err:?}"))
}
