//! Run-to-completion dispatch of host events.
//!
//! Hosts push events as they arrive (page load, a click, an ambient
//! notification) and call [`EventLoop::run`]. Events are handled strictly
//! in arrival order, one at a time, and due transition removals are
//! processed after the queue drains.

use std::collections::VecDeque;

use tracing::trace;

use crate::ambient::{AmbientScheme, AmbientSource};
use crate::error::ThemeError;
use crate::mode::ColorMode;
use crate::resolver::ThemeResolver;
use crate::store::PreferenceStore;
use crate::surface::Surface;
use crate::transition::Clock;

/// An entry point invoked by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    Initialize,
    Toggle,
    AmbientChanged(AmbientScheme),
}

/// What handling one event did to the applied theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub event: ThemeEvent,
    /// The mode applied by the handler, or `None` if it changed nothing.
    pub applied: Option<ColorMode>,
}

/// A FIFO of host events driving one [`ThemeResolver`].
#[derive(Debug)]
pub struct EventLoop<S, A, F, C> {
    resolver: ThemeResolver<S, A, F, C>,
    queue: VecDeque<ThemeEvent>,
}

impl<S, A, F, C> EventLoop<S, A, F, C>
where
    S: PreferenceStore,
    A: AmbientSource,
    F: Surface,
    C: Clock,
{
    /// Wraps `resolver` with an empty queue.
    pub fn new(resolver: ThemeResolver<S, A, F, C>) -> Self {
        Self {
            resolver,
            queue: VecDeque::new(),
        }
    }

    /// Enqueues an event for the next [`run`](Self::run).
    pub fn push(&mut self, event: ThemeEvent) {
        self.queue.push_back(event);
    }

    /// Number of events waiting to be handled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Handles every queued event in order.
    ///
    /// Stops at the first handler error; the failing event is dropped and
    /// later events stay queued for the next call.
    pub fn run(&mut self) -> Result<Vec<Dispatched>, ThemeError> {
        let mut handled = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop_front() {
            let applied = self.dispatch(event)?;
            handled.push(Dispatched { event, applied });
        }
        self.resolver.expire_transitions();
        Ok(handled)
    }

    /// Handles a single event immediately, bypassing the queue.
    pub fn dispatch(&mut self, event: ThemeEvent) -> Result<Option<ColorMode>, ThemeError> {
        trace!(?event, "dispatching theme event");
        match event {
            ThemeEvent::Initialize => self.resolver.initialize().map(Some),
            ThemeEvent::Toggle => self.resolver.toggle(),
            ThemeEvent::AmbientChanged(scheme) => self.resolver.on_ambient_change(scheme),
        }
    }

    /// Processes due transition removals without handling any events.
    pub fn tick(&mut self) -> bool {
        self.resolver.expire_transitions()
    }

    /// The wrapped resolver.
    pub fn resolver(&self) -> &ThemeResolver<S, A, F, C> {
        &self.resolver
    }

    /// Mutable access to the wrapped resolver.
    pub fn resolver_mut(&mut self) -> &mut ThemeResolver<S, A, F, C> {
        &mut self.resolver
    }

    /// Consumes the loop, dropping any queued events.
    pub fn into_resolver(self) -> ThemeResolver<S, A, F, C> {
        self.resolver
    }
}
