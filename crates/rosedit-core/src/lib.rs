//! In-place codec for NBA 2K14 `.ROS` roster buffers
//!
//! The crate edits a host-owned byte buffer: it locates the embedded player
//! and team tables without help from a file header, exposes typed accessors
//! for every player and team attribute through static layout tables, and
//! rewrites the CRC32 prefix so the game accepts the file when it is saved.
//! All work is synchronous, in-place and allocation-free on the hot path;
//! the host keeps ownership of the buffer throughout.

pub mod checksum;
pub mod editor;
pub mod error;
pub mod game;
pub mod layout;
pub mod offset;
pub mod record;
pub mod stream;

#[cfg(test)]
mod fixture;

pub use editor::RosterEditor;
pub use error::{Error, Result};
pub use game::{HotZoneLevel, Player, Position, RatingId, Team, VitalId};
pub use offset::{TableAnchors, TableSearcher};
pub use record::RecordView;
pub use stream::BitCursor;
