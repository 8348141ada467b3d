#![forbid(unsafe_code)]

//! Floating tooltip placement for rich-text editing surfaces.
//!
//! A [`Tooltip`] is centered under a reference rectangle (usually a
//! selection), clamped horizontally into a bounding container, optionally
//! pinned by absolute left limits, and flipped above the reference when it
//! would overflow the container's bottom edge.
//!
//! The host supplies geometry through [`OverlayHost`]; nothing here touches a
//! real rendering surface, so placement is deterministic and testable.
//!
//! ```ignore
//! use fliptip::{Tooltip, TooltipConfig};
//! use fliptip_core::geometry::Bounds;
//!
//! let mut tooltip = Tooltip::new(&mut host, TooltipConfig::default().min_left(8.0));
//! tooltip.show();
//! let shift = tooltip.position(&mut host, &Bounds::from_edges(100.0, 200.0, 150.0, 220.0));
//! ```

pub mod config;
pub mod host;
pub mod placement;
pub mod scroll;
pub mod style;
pub mod tooltip;

pub use config::{ConfigError, ConfigParse, TooltipConfig};
pub use host::{BoundsContainer, HostError, Overflow, OverlayHost};
pub use placement::{MaxLeftOutcome, Orientation, Placement};
pub use scroll::ScrollSync;
pub use style::{Markers, PopupStyle};
pub use tooltip::Tooltip;
