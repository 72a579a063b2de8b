//! IPC between the page and the pane.
//!
//! - **JS -> Rust**: the overlay calls `window.ipc.postMessage(JSON.stringify({kind, payload}))`,
//!   which reaches the webview's `ipc_handler` and becomes a [`ControlSignal`].
//! - **Rust -> JS**: the pane redraws the overlay through `window.__panegrid.render(view)`.

use serde::{Deserialize, Serialize};

use crate::events::ControlSignal;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Map the message onto a control signal, if it is one.
    pub fn to_signal(&self) -> Option<ControlSignal> {
        match self.kind.as_str() {
            "toggle_fullscreen" => Some(ControlSignal::ToggleFullscreen),
            "refresh" => Some(ControlSignal::Refresh),
            "back" => Some(ControlSignal::Back),
            "forward" => Some(ControlSignal::Forward),
            "stop" => Some(ControlSignal::Stop),
            "home" => Some(ControlSignal::Home),
            "close" => Some(ControlSignal::Close),
            "escape" => Some(ControlSignal::Escape),
            "pointer" => self
                .payload
                .get("y")
                .and_then(serde_json::Value::as_f64)
                .map(|y| ControlSignal::PointerMoved { y }),
            _ => None,
        }
    }
}

/// Initialization script injected into every page: builds the floating
/// controls overlay, forwards pointer and key input, and exposes
/// `window.__panegrid.render`.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__panegrid) { return; }
    var send = function(kind, payload) {
        try {
            window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload || null }));
        } catch (e) {}
    };
    var root = null, toggle = null, refresh = null, nameLabel = null, status = null, bar = null;
    var pending = null;

    function button(label, kind) {
        var b = document.createElement('button');
        b.textContent = label;
        b.style.cssText = 'position:fixed;width:28px;height:28px;border:none;border-radius:14px;' +
            'background:rgba(0,0,0,0.55);color:#fff;font-size:14px;cursor:pointer;' +
            'transition:opacity 0.2s;z-index:2147483647;';
        b.addEventListener('click', function(ev) { ev.stopPropagation(); send(kind); });
        return b;
    }

    function build() {
        if (root || !document.body) { return; }
        root = document.createElement('div');
        root.id = '__panegrid_controls';
        toggle = button('⛶', 'toggle_fullscreen');
        refresh = button('↻', 'refresh');
        nameLabel = document.createElement('div');
        status = document.createElement('div');
        bar = document.createElement('div');
        var labelCss = 'position:fixed;left:6px;padding:2px 6px;border-radius:4px;font:11px sans-serif;' +
            'background:rgba(0,0,0,0.55);color:#fff;z-index:2147483647;pointer-events:none;';
        nameLabel.style.cssText = labelCss + 'top:6px;';
        status.style.cssText = labelCss + 'bottom:6px;';
        bar.style.cssText = 'position:fixed;left:0;top:0;height:2px;background:#4aa3ff;' +
            'z-index:2147483647;pointer-events:none;width:0;';
        root.appendChild(toggle);
        root.appendChild(refresh);
        root.appendChild(nameLabel);
        root.appendChild(status);
        root.appendChild(bar);
        document.body.appendChild(root);
        if (pending) { render(pending); }
    }

    function render(view) {
        pending = view;
        build();
        if (!root) { return; }
        toggle.textContent = view.toggle_label;
        toggle.style.left = view.toggle_x + 'px';
        toggle.style.top = view.toggle_y + 'px';
        refresh.style.left = view.refresh_x + 'px';
        refresh.style.top = view.refresh_y + 'px';
        var opacity = view.visible ? '1' : '0';
        toggle.style.opacity = opacity;
        refresh.style.opacity = opacity;
        toggle.style.pointerEvents = view.visible ? 'auto' : 'none';
        refresh.style.pointerEvents = view.visible ? 'auto' : 'none';
        nameLabel.textContent = view.name;
        nameLabel.style.display = view.name_visible && view.name ? 'block' : 'none';
        status.textContent = view.status;
        status.style.display = view.status_visible && view.status ? 'block' : 'none';
        if (view.progress === null || view.progress === undefined || !view.status_visible) {
            bar.style.width = '0';
        } else {
            bar.style.width = view.progress + '%';
        }
    }

    var lastPointer = 0;
    document.addEventListener('mousemove', function(ev) {
        var now = Date.now();
        if (now - lastPointer < 50) { return; }
        lastPointer = now;
        send('pointer', { y: ev.clientY });
    }, true);

    document.addEventListener('keydown', function(ev) {
        if (ev.key === 'F11') {
            ev.preventDefault();
            send('toggle_fullscreen');
        } else if (ev.key === 'Escape') {
            send('escape');
        } else if ((ev.ctrlKey || ev.metaKey) && (ev.key === 'w' || ev.key === 'W')) {
            ev.preventDefault();
            send('close');
        } else if ((ev.ctrlKey || ev.metaKey) && ev.key === '.') {
            ev.preventDefault();
            send('stop');
        } else if (ev.altKey && ev.key === 'ArrowLeft') {
            ev.preventDefault();
            send('back');
        } else if (ev.altKey && ev.key === 'ArrowRight') {
            ev.preventDefault();
            send('forward');
        } else if (ev.altKey && ev.key === 'Home') {
            ev.preventDefault();
            send('home');
        }
    }, true);

    document.addEventListener('DOMContentLoaded', build);
    window.__panegrid = { render: render };
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_button_messages() {
        let msg = IpcMessage::from_json(r#"{"kind":"toggle_fullscreen","payload":null}"#).unwrap();
        assert_eq!(msg.to_signal(), Some(ControlSignal::ToggleFullscreen));

        let msg = IpcMessage::from_json(r#"{"kind":"refresh"}"#).unwrap();
        assert_eq!(msg.to_signal(), Some(ControlSignal::Refresh));
    }

    #[test]
    fn parses_history_messages() {
        let kinds = [
            ("back", ControlSignal::Back),
            ("forward", ControlSignal::Forward),
            ("stop", ControlSignal::Stop),
            ("home", ControlSignal::Home),
        ];
        for (kind, signal) in kinds {
            let raw = format!(r#"{{"kind":"{kind}"}}"#);
            let msg = IpcMessage::from_json(&raw).unwrap();
            assert_eq!(msg.to_signal(), Some(signal), "{kind}");
        }
        assert!(IPC_INIT_SCRIPT.contains("send('back')"));
        assert!(IPC_INIT_SCRIPT.contains("send('stop')"));
    }

    #[test]
    fn parses_pointer_position() {
        let msg = IpcMessage::from_json(r#"{"kind":"pointer","payload":{"y":42.5}}"#).unwrap();
        assert_eq!(msg.to_signal(), Some(ControlSignal::PointerMoved { y: 42.5 }));
    }

    #[test]
    fn pointer_without_y_is_ignored() {
        let msg = IpcMessage::from_json(r#"{"kind":"pointer","payload":{}}"#).unwrap();
        assert_eq!(msg.to_signal(), None);
    }

    #[test]
    fn unknown_kinds_and_garbage() {
        let msg = IpcMessage::from_json(r#"{"kind":"telemetry"}"#).unwrap();
        assert_eq!(msg.to_signal(), None);
        assert!(IpcMessage::from_json("not json").is_none());
    }

    #[test]
    fn init_script_exposes_render_hook() {
        assert!(IPC_INIT_SCRIPT.contains("window.__panegrid = { render: render }"));
        assert!(IPC_INIT_SCRIPT.contains("'F11'"));
    }
}
