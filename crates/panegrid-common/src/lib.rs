pub mod errors;
pub mod events;
pub mod timer;
pub mod types;

pub use errors::{
    ConfigError, LayoutError, PanegridError, PlatformError, StoreError, SurfaceError,
};
pub use events::{EventBus, PaneEvent, PoolEvent};
pub use timer::TimerWheel;
pub use types::{LogicalSubWindow, Point, Rect, Size, SlotIndex, SubWindowId, WindowConfigRecord};

pub type Result<T> = std::result::Result<T, PanegridError>;
