//! Platform Detection Utilities
//!
//! Camera and barcode capability checks used to decide whether the scan
//! affordance is offered at all.

use crate::console_debug;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Check if the page can request a camera stream
pub fn has_camera_support() -> bool {
    window()
        .and_then(|w| w.navigator().media_devices().ok())
        .is_some()
}

/// Check if the browser ships the Shape Detection `BarcodeDetector`
pub fn has_barcode_detector() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("BarcodeDetector")).unwrap_or(false))
        .unwrap_or(false)
}

/// QR scanning needs both a camera stream and native barcode decoding
pub fn can_scan_qr_codes() -> bool {
    let camera = has_camera_support();
    let detector = has_barcode_detector();
    console_debug!(
        "QR scan support: camera={} barcode_detector={}",
        camera,
        detector
    );
    camera && detector
}
