use dioxus::prelude::*;
use serde::Deserialize;

use crate::{console_error, console_info, console_warn};

pub const SCANNER_VIDEO_ID: &str = "team-registration-scanner";

/// Starts the rear camera and polls `BarcodeDetector` for QR codes.
/// The same payload seen again within 2s is suppressed so one code held in
/// front of the lens produces a single decode.
///
/// The stop handle is installed before the permission prompt is awaited, so
/// an unmount during the prompt still releases the stream once it arrives.
/// A previous session left running is stopped first.
const START_SCANNER_JS: &str = r#"
(async () => {
    const report = (payload) => dioxus.send(payload);
    if (window.__teamRegistrationScannerStop) {
        window.__teamRegistrationScannerStop();
    }

    const video = document.getElementById("team-registration-scanner");
    const session = { cancelled: false, stream: null, timer: null };
    const stop = () => {
        session.cancelled = true;
        if (session.timer !== null) {
            clearInterval(session.timer);
            session.timer = null;
        }
        if (session.stream) {
            session.stream.getTracks().forEach((track) => track.stop());
            session.stream = null;
        }
        if (video) {
            video.srcObject = null;
        }
        if (window.__teamRegistrationScannerStop === stop) {
            window.__teamRegistrationScannerStop = undefined;
        }
    };
    window.__teamRegistrationScannerStop = stop;

    if (!video) {
        report({ kind: "error", message: "Scanner view is not mounted" });
        stop();
        return;
    }
    if (!("BarcodeDetector" in window)) {
        report({ kind: "error", message: "QR code detection is not supported in this browser" });
        stop();
        return;
    }
    try {
        const stream = await navigator.mediaDevices.getUserMedia({ video: { facingMode: "environment" } });
        if (session.cancelled) {
            stream.getTracks().forEach((track) => track.stop());
            return;
        }
        session.stream = stream;
        video.srcObject = stream;
        await video.play();
        if (session.cancelled) {
            return;
        }
        const detector = new BarcodeDetector({ formats: ["qr_code"] });
        let last = { text: null, at: 0 };
        session.timer = setInterval(async () => {
            if (session.cancelled) {
                return;
            }
            try {
                const codes = await detector.detect(video);
                if (session.cancelled || codes.length === 0) return;
                const text = codes[0].rawValue;
                const now = Date.now();
                if (text === last.text && now - last.at < 2000) return;
                last = { text, at: now };
                report({ kind: "decoded", text });
            } catch (err) {
                if (!session.cancelled) {
                    report({ kind: "error", message: String(err) });
                }
            }
        }, 250);
    } catch (err) {
        if (!session.cancelled) {
            report({ kind: "error", message: String(err) });
        }
        stop();
    }
})();
"#;

const STOP_SCANNER_JS: &str = r#"
if (window.__teamRegistrationScannerStop) {
    window.__teamRegistrationScannerStop();
}
"#;

/// Messages posted back from the camera bridge
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScannerMessage {
    Decoded { text: String },
    Error { message: String },
}

#[derive(Props, PartialEq, Clone)]
pub struct QrScannerProps {
    pub on_decode: EventHandler<String>,
    pub on_error: EventHandler<String>,
}

/// Live camera view. The camera is released when the component unmounts.
#[component]
pub fn QrScanner(props: QrScannerProps) -> Element {
    let on_decode = props.on_decode;
    let on_error = props.on_error;

    use_effect(move || {
        spawn(async move {
            console_info!("[QrScanner] Starting camera");
            let mut bridge = document::eval(START_SCANNER_JS);
            loop {
                match bridge.recv::<ScannerMessage>().await {
                    Ok(ScannerMessage::Decoded { text }) => {
                        console_info!("[QrScanner] Decoded {} characters", text.len());
                        on_decode.call(text);
                    }
                    Ok(ScannerMessage::Error { message }) => {
                        console_error!("[QrScanner] {}", message);
                        on_error.call(message);
                    }
                    Err(e) => {
                        console_warn!("[QrScanner] Camera bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(|| {
        console_info!("[QrScanner] Stopping camera");
        let _ = document::eval(STOP_SCANNER_JS);
    });

    rsx! {
        div {
            class: "scanner-frame",
            video {
                id: SCANNER_VIDEO_ID,
                class: "scanner-video",
                autoplay: true,
                muted: true,
                "playsinline": "true",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOP_HANDLE: &str = "__teamRegistrationScannerStop";

    #[test]
    fn test_bridge_messages_deserialize() {
        let decoded: ScannerMessage =
            serde_json::from_str(r#"{"kind":"decoded","text":"K1A2B3"}"#).unwrap();
        assert_eq!(
            decoded,
            ScannerMessage::Decoded {
                text: "K1A2B3".to_string()
            }
        );

        let failed: ScannerMessage =
            serde_json::from_str(r#"{"kind":"error","message":"NotAllowedError"}"#).unwrap();
        assert_eq!(
            failed,
            ScannerMessage::Error {
                message: "NotAllowedError".to_string()
            }
        );
    }

    #[test]
    fn test_bridge_targets_the_rendered_video() {
        assert!(START_SCANNER_JS.contains(SCANNER_VIDEO_ID));
        assert!(STOP_SCANNER_JS.contains(STOP_HANDLE));
    }

    #[test]
    fn test_stop_handle_exists_before_camera_permission_is_awaited() {
        let installed = START_SCANNER_JS
            .find("window.__teamRegistrationScannerStop = stop;")
            .unwrap();
        let awaited = START_SCANNER_JS.find("await navigator.mediaDevices").unwrap();
        assert!(installed < awaited);

        // A stream granted after cancellation is released straight away
        let after_grant = &START_SCANNER_JS[awaited..];
        let cancelled_check = after_grant.find("if (session.cancelled)").unwrap();
        let attached = after_grant.find("video.srcObject = stream").unwrap();
        assert!(cancelled_check < attached);
    }

    #[test]
    fn test_previous_session_is_stopped_before_starting() {
        let prior_stop = START_SCANNER_JS
            .find("window.__teamRegistrationScannerStop();")
            .unwrap();
        let installed = START_SCANNER_JS
            .find("window.__teamRegistrationScannerStop = stop;")
            .unwrap();
        assert!(prior_stop < installed);
    }
}
