use app_core::{Font, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(window: &web::Window, url: &str) -> anyhow::Result<String> {
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {}: {:?}", url, e)))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let body = resp
        .text()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("{} body is not text", url))
}

/// Fetch and decode the typeface, then build the scene into `ctx`.
/// The frame loop keeps running whether or not this succeeds.
pub async fn load_font(window: web::Window, url: &str, ctx: Rc<RefCell<SceneContext>>) {
    let result = async {
        let json = fetch_text(&window, url).await?;
        let font = Font::from_json(&json)?;
        ctx.borrow_mut().on_font_ready(&font)?;
        anyhow::Ok(())
    }
    .await;
    if let Err(e) = result {
        log::error!("[font] {} unavailable, scene stays empty: {:?}", url, e);
    }
}
