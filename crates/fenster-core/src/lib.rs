#![forbid(unsafe_code)]

//! Core types for the Fenster widget toolkit.
//!
//! This crate holds what every widget needs and no widget owns: f32
//! geometry in parent-local units, canonical pointer/keyboard event types,
//! and the text-metrics collaborator trait. Widgets themselves live in
//! `fenster-widgets`; drawing and the layout tree belong to the host.

pub mod event;
pub mod geometry;
pub mod metrics;

pub use event::{
    CursorShape, EventStatus, KeyCommand, Modifiers, PointerButton, PointerEvent, PointerEventKind,
};
pub use geometry::{Box2, Direction, Point, SetSize, Size};
pub use metrics::{MonospaceMetrics, TextMetrics};
