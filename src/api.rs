use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::BoardError;
use crate::model::BoardData;
use crate::route::board_url;

/// One best-effort `GET {api_base}/boards/{id}`. No retry, timeout or cancellation.
pub async fn fetch_board(api_base: &str, id: u64) -> Result<BoardData, BoardError> {
    let url = board_url(api_base, id);
    log::debug!("fetching board data from {}", url);
    let window = web_sys::window().ok_or_else(|| BoardError::Fetch("no window".into()))?;
    let request: Promise = window.fetch_with_str(&url);
    let resp = JsFuture::from(request).await?;
    let resp: Response = resp.dyn_into()?;
    if !resp.ok() {
        return Err(BoardError::Status(resp.status()));
    }
    let body = JsFuture::from(resp.text()?).await?;
    let body = body
        .as_string()
        .ok_or_else(|| BoardError::Fetch("response body is not text".into()))?;
    Ok(serde_json::from_str(&body)?)
}
