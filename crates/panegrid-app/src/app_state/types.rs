use std::time::Duration;

/// How often to poll panes and timers (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Logical pixels scrolled per wheel line.
pub(super) const SCROLL_LINE_HEIGHT: f64 = 40.0;

/// Capacity of the pool event bus.
pub(super) const EVENT_CAPACITY: usize = 1024;

/// Page shown when there are no sub-windows to display.
pub(super) const EMPTY_STATE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>PaneGrid</title></head>
<body style="margin:0;height:100vh;display:flex;align-items:center;justify-content:center;
             font:15px sans-serif;color:#666;background:#f4f4f4;">
  <div style="text-align:center">
    <div style="font-size:20px;margin-bottom:8px;">No sub-windows yet</div>
    <div>Add one with <code>panegrid add NAME URL</code>, then press Ctrl+Shift+R.</div>
  </div>
</body>
</html>"#;
