//! Content loader
//!
//! Opens navigation targets in the content frame. Pages are navigated to;
//! raw-text resources (YAML by default) are fetched and shown as escaped text.
//!
//! ```mermaid
//! graph LR
//!     Link[click on data-file link] --> Resolve[Resource::resolve]
//!     Query[?file= query] --> Resolve
//!     Resolve -->|Page| Src[frame src]
//!     Resolve -->|RawText| Fetch[TextFetcher]
//!     Fetch --> Srcdoc[frame srcdoc]
//!     Src --> Ready[frame_loaded]
//!     Srcdoc --> Ready
//!     Ready --> Listeners[on_frame_ready listeners]
//! ```

pub mod config;
pub mod content;
pub mod fetch;
pub mod links;
pub mod resource;

pub use config::LoaderConfig;
pub use content::{ContentLoader, Displayed, FrameListener, FrameReady, html_escape};
#[cfg(target_arch = "wasm32")]
pub use fetch::HttpFetcher;
pub use fetch::TextFetcher;
pub use links::NavLinks;
pub use resource::{DownloadLink, Resource, ResourceKind, initial_target};
