//! カメラキャプチャアダプタ
//!
//! 単一のカメラストリームを取得し、要求時に現在のフレームを
//! 1枚だけJPEG Data URLとしてスナップショットする

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints,
};

const VIDEO_ID: &str = "video";
const CANVAS_ID: &str = "canvas";

fn element_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| JsValue::from_str(&format!("element not found: {id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("unexpected element type: {id}")))
}

/// カメラストリームを開始する
///
/// ビデオ要素にストリームが付いている場合は許可プロンプトを
/// 出さずに戻る。
/// TODO: カメラ画面から離れたタイミングでストリームをstop()する
pub async fn start_camera() -> Result<(), JsValue> {
    let video: HtmlVideoElement = element_by_id(VIDEO_ID)?;
    if video.src_object().is_some() {
        return Ok(());
    }

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let devices = web_sys::window().unwrap().navigator().media_devices()?;
    let promise: js_sys::Promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;
    video.set_src_object(Some(&stream));
    Ok(())
}

/// 現在のビデオフレームをJPEG Data URLへスナップショットする
///
/// 固定サイズのオフスクリーンキャンバスへ同期的に描画する。
/// フレームキューもストリーミングもない1回限りの取得
pub fn capture_frame() -> Result<String, JsValue> {
    let video: HtmlVideoElement = element_by_id(VIDEO_ID)?;
    let canvas: HtmlCanvasElement = element_by_id(CANVAS_ID)?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    context.draw_image_with_html_video_element_and_dw_and_dh(
        &video,
        0.0,
        0.0,
        canvas.width() as f64,
        canvas.height() as f64,
    )?;
    canvas.to_data_url_with_type("image/jpeg")
}
