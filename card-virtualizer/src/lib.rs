//! A headless layout engine for virtualized grids of expandable cards.
//!
//! Cards are laid out `items_per_row` to a row. A card is either collapsed (a fixed base height)
//! or expanded, in which case its height is estimated from its tasks by a [`HeightPolicy`]. Every
//! row takes the height of its tallest card, so columns may differ while rows never overlap.
//! Given a scroll offset, the engine reports which cards intersect the viewport (plus an
//! overscan margin) so a renderer only mounts those.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the items, via the [`HasId`] and [`HasTasks`] capability traits
//! - the per-item expanded/collapsed state, via [`ExpansionState`]
//! - viewport height and scroll offset
//!
//! For responsive columns, container sizing and smooth scrolling, see the
//! `card-virtualizer-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod height;
mod item;
mod key;
mod layout;
mod options;
mod state;
mod types;
mod virtualizer;


pub use error::{GridError, GridResult};
pub use height::HeightPolicy;
pub use item::{AllCollapsed, AllExpanded, ExpansionState, HasId, HasTasks};
pub use key::{ExpandedSet, ExpansionKey, ExpansionMap};
pub use layout::GridLayout;
pub use options::GridOptions;
pub use state::{GridFrame, ScrollState};
pub use types::{ColumnMode, RowRange, RowSpan, VirtualItem, VisibleItem};
pub use virtualizer::GridVirtualizer;
