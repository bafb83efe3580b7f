//! Resolution of the applied theme from stored preference, ambient signal
//! and user toggles.
//!
//! Precedence, highest first:
//!
//! 1. An explicit toggle, which is persisted immediately.
//! 2. A stored preference from an earlier toggle.
//! 3. The ambient scheme, consulted only while nothing is stored.
//!
//! The ambient fallback is never written to the store, so later ambient
//! changes keep being honored until the user toggles.

use std::time::Instant;

use tracing::debug;

use crate::ambient::{AmbientScheme, AmbientSource};
use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::mode::{ColorMode, ThemePreference};
use crate::store::PreferenceStore;
use crate::surface::{IconRotation, Surface};
use crate::transition::{Clock, SystemClock, TransitionTimers};

/// Whether an apply also writes the mode to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persistence {
    Persist,
    Transient,
}

/// Owns the theme state of one page.
///
/// Construct one per page at startup and route every host event through
/// it. All handlers take `&mut self` and run to completion.
#[derive(Debug)]
pub struct ThemeResolver<S, A, F, C = SystemClock> {
    config: ThemeConfig,
    store: S,
    ambient: A,
    surface: F,
    clock: C,
    transitions: TransitionTimers,
}

impl<S, A, F> ThemeResolver<S, A, F, SystemClock>
where
    S: PreferenceStore,
    A: AmbientSource,
    F: Surface,
{
    /// Creates a resolver timed by the wall clock.
    pub fn new(config: ThemeConfig, store: S, ambient: A, surface: F) -> Self {
        Self::with_clock(config, store, ambient, surface, SystemClock)
    }
}

impl<S, A, F, C> ThemeResolver<S, A, F, C>
where
    S: PreferenceStore,
    A: AmbientSource,
    F: Surface,
    C: Clock,
{
    /// Creates a resolver timed by `clock`.
    pub fn with_clock(config: ThemeConfig, store: S, ambient: A, surface: F, clock: C) -> Self {
        Self {
            config,
            store,
            ambient,
            surface,
            clock,
            transitions: TransitionTimers::default(),
        }
    }

    /// Applies the stored preference, or the ambient scheme when none is stored.
    ///
    /// Never writes to the store.
    pub fn initialize(&mut self) -> Result<ColorMode, ThemeError> {
        let preference = self.stored_preference()?;
        let mode = match preference.mode() {
            Some(mode) => mode,
            None => self.ambient.current().preferred_mode(),
        };
        debug!(?preference, %mode, "initializing theme");
        self.apply(mode, Persistence::Transient)?;
        Ok(mode)
    }

    /// Inverts the applied theme and persists the result.
    ///
    /// Anything other than an applied `dark` (including no attribute at
    /// all) flips to dark. Returns `None` without touching anything when
    /// the page has no toggle control.
    pub fn toggle(&mut self) -> Result<Option<ColorMode>, ThemeError> {
        if self.surface.toggle_control().is_none() {
            debug!("no toggle control on this surface, ignoring toggle");
            return Ok(None);
        }
        let next = match self.applied() {
            Some(ColorMode::Dark) => ColorMode::Light,
            _ => ColorMode::Dark,
        };
        debug!(mode = %next, "toggling theme");
        self.apply(next, Persistence::Persist)?;
        Ok(Some(next))
    }

    /// Follows an ambient change while no preference is stored.
    ///
    /// Returns the newly applied mode, or `None` when a stored preference
    /// shadows the ambient signal.
    pub fn on_ambient_change(
        &mut self,
        scheme: AmbientScheme,
    ) -> Result<Option<ColorMode>, ThemeError> {
        let preference = self.stored_preference()?;
        if !preference.is_unset() {
            debug!(?preference, ?scheme, "stored preference shadows ambient change");
            return Ok(None);
        }
        let mode = scheme.preferred_mode();
        debug!(?scheme, %mode, "following ambient change");
        self.apply(mode, Persistence::Transient)?;
        Ok(Some(mode))
    }

    /// Removes the transition marker if any scheduled removal is due.
    pub fn expire_transitions(&mut self) -> bool {
        if self.transitions.expire(self.clock.now()) == 0 {
            return false;
        }
        self.surface.remove_root_class(&self.config.transition_class);
        true
    }

    /// When the next transition removal comes due, if one is pending.
    pub fn next_transition_deadline(&self) -> Option<Instant> {
        self.transitions.next_deadline()
    }

    /// The mode currently on the root attribute.
    pub fn applied(&self) -> Option<ColorMode> {
        self.surface
            .root_attribute(&self.config.theme_attribute)
            .and_then(|raw| raw.parse().ok())
    }

    /// Reads and interprets the stored preference.
    pub fn stored_preference(&self) -> Result<ThemePreference, ThemeError> {
        let raw = self.store.get(&self.config.storage_key)?;
        Ok(ThemePreference::from_stored(raw.as_deref()))
    }

    /// The names and timings in use.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The backing preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access for parties outside the resolver, e.g. to clear
    /// the stored preference.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The surface being written to.
    pub fn surface(&self) -> &F {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut F {
        &mut self.surface
    }

    /// Consumes the resolver, returning its store, ambient source and surface.
    pub fn into_parts(self) -> (S, A, F) {
        (self.store, self.ambient, self.surface)
    }

    fn apply(&mut self, mode: ColorMode, persistence: Persistence) -> Result<(), ThemeError> {
        if persistence == Persistence::Persist {
            self.store.set(&self.config.storage_key, mode.as_str())?;
        }

        // Drop removals that already came due so the queue stays bounded
        // when the host never drives expiry itself.
        self.expire_transitions();
        self.surface.add_root_class(&self.config.transition_class);
        self.transitions
            .schedule(self.clock.now() + self.config.transition_duration());

        self.surface
            .set_root_attribute(&self.config.theme_attribute, mode.as_str());
        if let Some(control) = self.surface.toggle_control() {
            control.set_label(self.config.labels.for_mode(mode));
            control.set_icon(IconRotation::for_mode(mode));
        }
        Ok(())
    }
}
