use std::sync::{Arc, Mutex};

use panegrid_common::SlotIndex;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, SurfaceEvent};
use crate::ipc::IpcMessage;

pub(super) type EventSink = Arc<Mutex<Vec<SurfaceEvent>>>;

pub(super) fn push(events: &EventSink, event: SurfaceEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    slot: SlotIndex,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        let Some(signal) = IpcMessage::from_json(body).and_then(|m| m.to_signal()) else {
            warn!(%slot, body_len = body.len(), "IPC message ignored: not a control signal");
            return;
        };
        push(&events, SurfaceEvent::Control(signal));
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    slot: SlotIndex,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(%slot, ?state, url = %url, "page load");
        match state {
            PageLoadState::Started => {
                push(&events, SurfaceEvent::LoadStarted);
                push(&events, SurfaceEvent::UrlChanged(url));
                push(&events, SurfaceEvent::Progress(0));
            }
            PageLoadState::Finished => {
                push(&events, SurfaceEvent::UrlChanged(url));
                push(&events, SurfaceEvent::Progress(100));
                push(&events, SurfaceEvent::LoadFinished { success: true });
            }
        }
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    slot: SlotIndex,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(%slot, title = %title, "title changed");
        push(&events, SurfaceEvent::TitleChanged(title));
    })
}

/// Script results arrive JSON-encoded; string results are unwrapped.
pub(super) fn decode_script_result(raw: &str) -> String {
    serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_results_are_unwrapped() {
        assert_eq!(decode_script_result(r#""[{\"name\":\"a\"}]""#), r#"[{"name":"a"}]"#);
    }

    #[test]
    fn non_string_results_pass_through() {
        assert_eq!(decode_script_result("null"), "null");
        assert_eq!(decode_script_result("42"), "42");
    }

    #[test]
    fn push_appends_to_sink() {
        let sink: EventSink = Arc::new(Mutex::new(Vec::new()));
        push(&sink, SurfaceEvent::Progress(10));
        assert_eq!(sink.lock().unwrap().as_slice(), &[SurfaceEvent::Progress(10)]);
    }
}
