//! Event types and sinks for observing sampling runs.
//!
//! This module defines [`SamplingEvent`] and a set of sinks to emit, collect, or forward events
//! while executing [`crate::sampling::PoissonDiscSampling::generate_with_events`].
use glam::Vec2;

use crate::point::ProceduralPoint;

/// Describes events emitted by a sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingEvent {
    /// Emitted once the spatial grid has been allocated.
    RunStarted {
        /// Grid dimensions `(width, height)` in cells.
        grid_size: (usize, usize),
        /// Working radius at the start of the run.
        radius: f32,
        /// Point count at which the run stops early.
        point_cap: usize,
    },

    /// Emitted when a candidate is accepted.
    PointAccepted {
        /// Index of the point in the output.
        index: usize,
        /// The accepted point.
        point: ProceduralPoint,
    },

    /// Emitted when a spawn point exhausts its attempts and leaves the active list.
    SpawnPointRetired {
        /// Footprint position of the retired spawn point.
        position: Vec2,
    },

    /// Emitted when the run stops on its point cap.
    PointCapReached {
        /// The cap that applied.
        cap: usize,
        /// Whether the configurable limiter was enabled (otherwise the hard ceiling applied).
        limiter_enabled: bool,
    },

    /// Emitted instead of [`SamplingEvent::RunStarted`] when the grid would be too large.
    GridTooLarge {
        /// Requested grid width in cells.
        width: usize,
        /// Requested grid height in cells.
        height: usize,
    },

    /// Emitted when a run completes, including runs stopped by the point cap.
    RunFinished {
        /// Run statistics.
        stats: RunStats,
    },
}

/// Counters collected over one sampling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Main-loop iterations begun.
    pub iterations: usize,
    /// Iterations that accepted a candidate.
    pub accepted: usize,
    /// Iterations that retired their spawn point.
    pub discarded: usize,
}

/// Coarse event categories for sinks that only care about some events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingEventKind {
    RunStarted,
    PointAccepted,
    SpawnPointRetired,
    PointCapReached,
    GridTooLarge,
    RunFinished,
}

impl SamplingEvent {
    pub fn kind(&self) -> SamplingEventKind {
        match self {
            SamplingEvent::RunStarted { .. } => SamplingEventKind::RunStarted,
            SamplingEvent::PointAccepted { .. } => SamplingEventKind::PointAccepted,
            SamplingEvent::SpawnPointRetired { .. } => SamplingEventKind::SpawnPointRetired,
            SamplingEvent::PointCapReached { .. } => SamplingEventKind::PointCapReached,
            SamplingEvent::GridTooLarge { .. } => SamplingEventKind::GridTooLarge,
            SamplingEvent::RunFinished { .. } => SamplingEventKind::RunFinished,
        }
    }
}

/// A generic event sink that accepts [`SamplingEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SamplingEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: SamplingEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SamplingEvent) {}

    #[inline]
    fn wants(&self, _kind: SamplingEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally filtered by kind.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SamplingEvent>,
    only: Option<Vec<SamplingEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects only events of the given kinds.
    pub fn only(kinds: impl IntoIterator<Item = SamplingEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<SamplingEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SamplingEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: SamplingEventKind) -> bool {
        self.only
            .as_ref()
            .is_none_or(|kinds| kinds.contains(&kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(SamplingEvent::SpawnPointRetired {
            position: Vec2::ZERO,
        });
        sink.send(SamplingEvent::RunFinished {
            stats: RunStats::default(),
        });
        assert_eq!(sink.len(), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn filtered_vec_sink_drops_other_kinds() {
        let mut sink = VecSink::only([SamplingEventKind::RunFinished]);
        assert!(!sink.wants(SamplingEventKind::PointAccepted));
        sink.send(SamplingEvent::SpawnPointRetired {
            position: Vec2::ONE,
        });
        sink.send(SamplingEvent::RunFinished {
            stats: RunStats::default(),
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.as_slice()[0].kind(), SamplingEventKind::RunFinished);
    }

    #[test]
    fn unit_sink_wants_nothing() {
        let mut sink = ();
        assert!(!sink.wants(SamplingEventKind::RunStarted));
        sink.send(SamplingEvent::SpawnPointRetired {
            position: Vec2::ZERO,
        });
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(SamplingEvent::GridTooLarge {
            width: 2000,
            height: 1,
        });
        assert_eq!(count, 1);
    }
}
