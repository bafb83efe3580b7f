//! # darkmode - dark/light theme preference resolution
//!
//! `darkmode` decides which of two themes a page shows and keeps the
//! persisted choice and the rendered state consistent. Three signals feed
//! the decision:
//!
//! - a preference stored by an earlier toggle (`"dark"` / `"light"` under
//!   one key, or nothing)
//! - the environment's "prefers dark" color-scheme signal
//! - explicit toggles by the user
//!
//! A toggle always wins and is persisted. While nothing is stored, the
//! ambient signal governs, both at startup and whenever it changes.
//!
//! ## Quick start
//!
//! ```rust
//! use darkmode::{
//!     AmbientScheme, ColorMode, Document, FixedAmbient, MemoryStore, ThemeConfig,
//!     ThemeResolver, ToggleControl,
//! };
//!
//! let mut resolver = ThemeResolver::new(
//!     ThemeConfig::default(),
//!     MemoryStore::new(),
//!     FixedAmbient(AmbientScheme::PrefersDark),
//!     Document::with_toggle(ToggleControl::new()),
//! );
//!
//! assert_eq!(resolver.initialize().unwrap(), ColorMode::Dark);
//! assert!(resolver.store().is_empty());
//!
//! assert_eq!(resolver.toggle().unwrap(), Some(ColorMode::Light));
//! assert_eq!(resolver.store().value("darkMode"), Some("light"));
//!
//! // The stored choice now shadows the environment.
//! assert_eq!(resolver.on_ambient_change(AmbientScheme::PrefersDark).unwrap(), None);
//! ```
//!
//! ## Hosts
//!
//! The resolver is generic over its collaborators:
//!
//! - [`PreferenceStore`]: [`MemoryStore`] or the JSON-file backed [`FileStore`]
//! - [`AmbientSource`]: [`OsAmbient`] (via `dark-light`), [`FixedAmbient`],
//!   or any `Fn() -> AmbientScheme`
//! - [`Surface`]: the in-memory [`Document`], or a host's own root element
//!
//! [`EventLoop`] serializes host events the way a single-threaded UI loop
//! would, and [`AmbientWatcher`] turns a polled source into change events.

mod ambient;
mod config;
mod error;
mod event;
mod mode;
mod resolver;
mod store;
mod surface;
mod transition;

pub use ambient::{AmbientScheme, AmbientSource, AmbientWatcher, FixedAmbient, OsAmbient};
pub use config::{ThemeConfig, ToggleLabels};
pub use error::{ConfigError, StoreError, ThemeError};
pub use event::{Dispatched, EventLoop, ThemeEvent};
pub use mode::{ColorMode, ParseColorModeError, ThemePreference};
pub use resolver::ThemeResolver;
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use surface::{Document, IconRotation, Surface, ToggleControl};
pub use transition::{Clock, ManualClock, SystemClock};
