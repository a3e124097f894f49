//! Event types and sinks for observing galaxy generation.
//!
//! [`GalaxyEvent`]s are emitted by [`crate::galaxy::assembler::assemble_with_events`]
//! and [`crate::galaxy::assembler::GalaxyAssembler::generate_with_events`]. Sinks can
//! collect them, forward them to a closure or filter them by kind.
use crate::galaxy::config::{ArmSpec, GalaxyConfig};
use crate::galaxy::GroupKind;

/// Describes events emitted while assembling a galaxy.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GalaxyEvent {
    /// Emitted after the configuration was validated, before any point is drawn.
    GenerationStarted {
        /// The configuration being generated.
        config: GalaxyConfig,
    },

    /// Emitted after each spiral arm.
    ArmGenerated {
        /// Index of the arm in the layout.
        index: usize,
        /// Arm placement parameters with the scale substituted.
        arm: ArmSpec,
        /// Group the arm was appended to.
        group: GroupKind,
        /// Number of stars generated.
        star_count: usize,
    },

    /// Emitted after the core.
    CoreGenerated {
        /// Bulge radius used.
        radius: f32,
        /// Number of stars generated.
        star_count: usize,
    },

    /// Emitted when all groups are complete.
    GenerationFinished {
        leading: usize,
        trailing: usize,
        core: usize,
    },

    /// Non-fatal warning about the requested configuration.
    Warning {
        /// Context string (e.g. parameter name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`GalaxyEvent`] used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalaxyEventKind {
    GenerationStarted,
    ArmGenerated,
    CoreGenerated,
    GenerationFinished,
    Warning,
}

impl GalaxyEvent {
    pub fn kind(&self) -> GalaxyEventKind {
        match self {
            GalaxyEvent::GenerationStarted { .. } => GalaxyEventKind::GenerationStarted,
            GalaxyEvent::ArmGenerated { .. } => GalaxyEventKind::ArmGenerated,
            GalaxyEvent::CoreGenerated { .. } => GalaxyEventKind::CoreGenerated,
            GalaxyEvent::GenerationFinished { .. } => GalaxyEventKind::GenerationFinished,
            GalaxyEvent::Warning { .. } => GalaxyEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`GalaxyEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GalaxyEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: GalaxyEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = GalaxyEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GalaxyEvent) {}

    #[inline]
    fn wants(&self, _kind: GalaxyEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GalaxyEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GalaxyEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GalaxyEvent),
{
    #[inline]
    fn send(&mut self, event: GalaxyEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GalaxyEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<GalaxyEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GalaxyEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of the given kind.
    pub fn count_of(&self, kind: GalaxyEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GalaxyEvent) {
        self.events.push(event);
    }
}

/// Sink wrapper that only forwards the listed event kinds.
pub struct FilteredSink<S: EventSink> {
    inner: S,
    kinds: Vec<GalaxyEventKind>,
}

impl<S: EventSink> FilteredSink<S> {
    pub fn new(inner: S, kinds: impl IntoIterator<Item = GalaxyEventKind>) -> Self {
        Self {
            inner,
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for FilteredSink<S> {
    fn send(&mut self, event: GalaxyEvent) {
        if self.wants(event.kind()) {
            self.inner.send(event);
        }
    }

    fn wants(&self, kind: GalaxyEventKind) -> bool {
        self.kinds.contains(&kind) && self.inner.wants(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning() -> GalaxyEvent {
        GalaxyEvent::Warning {
            context: "ctx".into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send_many([warning(), warning()]);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.count_of(GalaxyEventKind::Warning), 2);
        assert_eq!(sink.count_of(GalaxyEventKind::ArmGenerated), 0);
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!().wants(GalaxyEventKind::Warning));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning());
        assert_eq!(count, 1);
    }

    #[test]
    fn filtered_sink_drops_other_kinds() {
        let mut sink = FilteredSink::new(VecSink::new(), [GalaxyEventKind::CoreGenerated]);
        assert!(!sink.wants(GalaxyEventKind::Warning));
        sink.send(warning());
        sink.send(GalaxyEvent::CoreGenerated {
            radius: 1.0,
            star_count: 3,
        });
        let inner = sink.into_inner();
        assert_eq!(inner.len(), 1);
        assert!(matches!(
            inner.as_slice()[0],
            GalaxyEvent::CoreGenerated { star_count: 3, .. }
        ));
    }
}
