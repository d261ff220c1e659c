//! Editing session over a host-owned roster buffer
//!
//! The editor borrows the whole-file byte buffer for the length of the
//! session, locates the embedded tables once at bind time, and hands out
//! transient record views. All edits are in-place overwrites; records are
//! never moved, inserted or deleted.

use tracing::debug;

use crate::checksum;
use crate::error::{Error, Result};
use crate::game::{Player, Team};
use crate::offset::{TableAnchors, TableSearcher};
use crate::record::RecordView;

/// Shortest buffer accepted at bind time.
pub const MIN_BUFFER_LEN: usize = 16;

pub struct RosterEditor<'a> {
    buf: &'a mut [u8],
    anchors: TableAnchors,
}

impl<'a> RosterEditor<'a> {
    /// Bind a buffer and run table discovery.
    ///
    /// Discovery failure is not an error; the affected table simply reports
    /// zero records. The checksum path works either way.
    pub fn new(buf: &'a mut [u8]) -> Result<Self> {
        if buf.len() < MIN_BUFFER_LEN {
            return Err(Error::invalid_buffer(format!(
                "{} bytes is below the {MIN_BUFFER_LEN}-byte minimum",
                buf.len()
            )));
        }
        let anchors = TableSearcher::new(buf).discover();
        debug!(
            "roster buffer bound: {} players, {} teams",
            anchors.player_count, anchors.team_count
        );
        Ok(Self { buf, anchors })
    }

    /// Discovered table anchors.
    pub fn anchors(&self) -> &TableAnchors {
        &self.anchors
    }

    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    pub fn player_count(&self) -> usize {
        self.anchors.player_count
    }

    pub fn team_count(&self) -> usize {
        self.anchors.team_count
    }

    /// View over player record `index`.
    pub fn player(&mut self, index: usize) -> Result<Player<'_>> {
        let base = self.anchors.player_record_offset(index).ok_or_else(|| {
            Error::out_of_range(format!(
                "player index {index} out of range ({} players)",
                self.anchors.player_count
            ))
        })?;
        let view = RecordView::new(self.buf, base, self.anchors.player_record_size)?;
        Ok(Player::new(view))
    }

    /// View over team record `index`.
    pub fn team(&mut self, index: usize) -> Result<Team<'_>> {
        let base = self.anchors.team_record_offset(index).ok_or_else(|| {
            Error::out_of_range(format!(
                "team index {index} out of range ({} teams)",
                self.anchors.team_count
            ))
        })?;
        let view = RecordView::new(self.buf, base, self.anchors.team_record_size)?;
        Ok(Team::new(view))
    }

    /// Rewrite the checksum prefix so the game accepts the edited file.
    pub fn save_and_recalculate_checksum(&mut self) -> Result<u32> {
        checksum::recalculate(self.buf)
    }
}
