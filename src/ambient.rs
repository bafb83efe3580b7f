//! The operating environment's color-scheme signal.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use crate::mode::ColorMode;

/// What the environment reports for "prefers dark color scheme".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbientScheme {
    PrefersDark,
    /// The dark query does not match.
    PrefersLight,
}

impl AmbientScheme {
    /// The mode to apply when no preference is stored.
    pub fn preferred_mode(self) -> ColorMode {
        match self {
            AmbientScheme::PrefersDark => ColorMode::Dark,
            AmbientScheme::PrefersLight => ColorMode::Light,
        }
    }

    /// Maps a "prefers dark" media-query match to a scheme.
    pub fn from_matches(prefers_dark: bool) -> Self {
        if prefers_dark {
            AmbientScheme::PrefersDark
        } else {
            AmbientScheme::PrefersLight
        }
    }
}

/// A source that can be queried synchronously for the current scheme.
pub trait AmbientSource {
    fn current(&self) -> AmbientScheme;
}

impl<F> AmbientSource for F
where
    F: Fn() -> AmbientScheme,
{
    fn current(&self) -> AmbientScheme {
        self()
    }
}

/// Reads the scheme from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsAmbient;

impl AmbientSource for OsAmbient {
    fn current(&self) -> AmbientScheme {
        match detect_os_theme() {
            OsThemeMode::Dark => AmbientScheme::PrefersDark,
            OsThemeMode::Light => AmbientScheme::PrefersLight,
        }
    }
}

/// Always reports the same scheme.
#[derive(Debug, Clone, Copy)]
pub struct FixedAmbient(pub AmbientScheme);

impl AmbientSource for FixedAmbient {
    fn current(&self) -> AmbientScheme {
        self.0
    }
}

/// Turns a polled source into change notifications.
///
/// Hosts without a push-style subscription poll the watcher on their own
/// schedule and forward each returned scheme to
/// [`ThemeResolver::on_ambient_change`](crate::ThemeResolver::on_ambient_change).
#[derive(Debug)]
pub struct AmbientWatcher<A> {
    source: A,
    last: AmbientScheme,
}

impl<A: AmbientSource> AmbientWatcher<A> {
    /// Creates a watcher, recording the source's current scheme as the baseline.
    pub fn new(source: A) -> Self {
        let last = source.current();
        Self { source, last }
    }

    /// Returns the new scheme if it differs from the last observed one.
    pub fn poll(&mut self) -> Option<AmbientScheme> {
        let now = self.source.current();
        if now == self.last {
            return None;
        }
        tracing::debug!(from = ?self.last, to = ?now, "ambient color scheme changed");
        self.last = now;
        Some(now)
    }

    /// The most recently observed scheme.
    pub fn last(&self) -> AmbientScheme {
        self.last
    }
}
