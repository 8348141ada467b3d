#![forbid(unsafe_code)]

//! Deterministic host for exercising fliptip without a rendering engine.
//!
//! [`SimulatedPage`] models a positioned popup inside an offset parent on a
//! page whose editor root may scroll. It measures the popup from whatever
//! style it is asked about, records every style pushed to it, and can be
//! configured to fail the editor-container lookup.
//!
//! # Quick Start
//!
//! ```ignore
//! use fliptip::{Tooltip, TooltipConfig};
//! use fliptip_harness::{Bounds, SimulatedPage, Size};
//!
//! let mut page = SimulatedPage::new(Bounds::new(0.0, 0.0, 500.0, 800.0))
//!     .with_popup_size(Size::new(80.0, 30.0));
//! let mut tooltip = Tooltip::new(&mut page, TooltipConfig::default());
//! tooltip.show();
//! tooltip.position(&mut page, &Bounds::from_edges(100.0, 200.0, 150.0, 220.0));
//! assert_eq!(page.rendered_bounds().map(|b| b.left), Some(85.0));
//! ```

pub mod page;

pub use fliptip_core::geometry::{Bounds, Point, Size};
pub use page::SimulatedPage;
