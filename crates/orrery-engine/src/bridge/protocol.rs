/// Shared buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 8 floats]
/// [Events: max_events × 4 floats]
/// [Guides: max_guides × guide_points × 3 floats]
/// ```
///
/// Capacities are written into the header on every pack.
/// The host reads them from the header to compute offsets dynamically.

use glam::Vec2;

use crate::api::sim::SimConfig;
use crate::api::types::SimEvent;
use crate::renderer::instance::BodyInstance;
use crate::systems::guides::GUIDE_POINT_FLOATS;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_PROTOCOL_VERSION: usize = 6;
pub const HEADER_EFFECT_TIME: usize = 7;
pub const HEADER_PAUSED: usize = 8;
pub const HEADER_HOVERED_ID: usize = 9;
pub const HEADER_MAX_GUIDES: usize = 10;
pub const HEADER_GUIDE_COUNT: usize = 11;
pub const HEADER_GUIDE_POINTS: usize = 12;
pub const HEADER_VIEWPORT_WIDTH: usize = 13;
pub const HEADER_VIEWPORT_HEIGHT: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = BodyInstance::FLOATS;

/// Floats per event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = SimEvent::FLOATS;

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameHeader {
    pub frame_counter: u32,
    pub effect_time: f32,
    pub paused: bool,
    /// Id of the hovered body; written as -1 when none.
    pub hovered: Option<u32>,
    pub viewport: Vec2,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body instances.
    pub max_instances: usize,
    /// Maximum events per frame.
    pub max_events: usize,
    /// Maximum orbit guides.
    pub max_guides: usize,
    /// Points per orbit guide (segments + 1).
    pub guide_points: usize,

    pub instance_data_floats: usize,
    pub event_data_floats: usize,
    pub guide_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where guide data begins.
    pub guide_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize, max_guides: usize, guide_points: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let guide_data_floats = max_guides * guide_points * GUIDE_POINT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;
        let guide_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = guide_data_offset + guide_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_events,
            max_guides,
            guide_points,
            instance_data_floats,
            event_data_floats,
            guide_data_floats,
            instance_data_offset,
            event_data_offset,
            guide_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SimConfig.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_events,
            config.max_guides,
            config.orbit_segments.max(3) + 1,
        )
    }

    /// Pack one frame into `out`, resizing it to the full buffer.
    /// Sections are truncated to capacity; the header counts reflect what was written.
    pub fn pack(
        &self,
        header: &FrameHeader,
        instances: &[BodyInstance],
        events: &[SimEvent],
        guides: &[f32],
        out: &mut Vec<f32>,
    ) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let instance_count = instances.len().min(self.max_instances);
        let event_count = events.len().min(self.max_events);
        let guide_stride = self.guide_points * GUIDE_POINT_FLOATS;
        let guide_count = if guide_stride == 0 {
            0
        } else {
            (guides.len() / guide_stride).min(self.max_guides)
        };

        out[HEADER_FRAME_COUNTER] = header.frame_counter as f32;
        out[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        out[HEADER_INSTANCE_COUNT] = instance_count as f32;
        out[HEADER_MAX_EVENTS] = self.max_events as f32;
        out[HEADER_EVENT_COUNT] = event_count as f32;
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        out[HEADER_EFFECT_TIME] = header.effect_time;
        out[HEADER_PAUSED] = if header.paused { 1.0 } else { 0.0 };
        out[HEADER_HOVERED_ID] = header.hovered.map_or(-1.0, |id| id as f32);
        out[HEADER_MAX_GUIDES] = self.max_guides as f32;
        out[HEADER_GUIDE_COUNT] = guide_count as f32;
        out[HEADER_GUIDE_POINTS] = self.guide_points as f32;
        out[HEADER_VIEWPORT_WIDTH] = header.viewport.x;
        out[HEADER_VIEWPORT_HEIGHT] = header.viewport.y;

        let instance_floats: &[f32] = bytemuck::cast_slice(&instances[..instance_count]);
        out[self.instance_data_offset..self.instance_data_offset + instance_floats.len()]
            .copy_from_slice(instance_floats);

        let event_floats: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        out[self.event_data_offset..self.event_data_offset + event_floats.len()]
            .copy_from_slice(event_floats);

        let guide_floats = &guides[..guide_count * guide_stride];
        out[self.guide_data_offset..self.guide_data_offset + guide_floats.len()]
            .copy_from_slice(guide_floats);
    }
}
