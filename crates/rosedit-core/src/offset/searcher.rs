//! Structural locator for the player and team tables

use tracing::{debug, warn};

use crate::layout::{player, team};
use crate::offset::TableAnchors;
use crate::offset::constants::*;
use crate::offset::utils::merge_byte_representations;

pub struct TableSearcher<'a> {
    buf: &'a [u8],
}

impl<'a> TableSearcher<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Run both discovery passes. Failure to locate a table is not an
    /// error; the corresponding count stays zero and record access reports
    /// out-of-range.
    pub fn discover(&self) -> TableAnchors {
        let mut anchors = TableAnchors::unlocated();

        match self.find_player_table() {
            Some(offset) => {
                anchors.player_table_offset = offset;
                anchors.player_count = self.count_players(offset);
                debug!(
                    "player table located at 0x{:X} ({} records)",
                    offset, anchors.player_count
                );
            }
            None => warn!("player table not found, player access disabled"),
        }

        match self.find_team_table() {
            Some(offset) => {
                anchors.team_table_offset = offset;
                anchors.team_count = self.count_teams(offset);
                debug!(
                    "team table located at 0x{:X} ({} records)",
                    offset, anchors.team_count
                );
            }
            None => warn!("team table not found, team access disabled"),
        }

        anchors
    }

    fn cfid_at(&self, offset: usize) -> Option<u16> {
        let bytes = self.buf.get(offset..offset.checked_add(2)?)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Check [`VALIDATION_DEPTH`] consecutive records starting at `offset`.
    ///
    /// The first record may be a null slot (cyberface id 0); the rest must
    /// carry a non-zero plausible id.
    fn plausible_run_at(&self, offset: usize) -> bool {
        for depth in 0..VALIDATION_DEPTH {
            let Some(cfid) =
                self.cfid_at(offset + depth * player::RECORD_SIZE + player::CFID_OFFSET)
            else {
                return false;
            };
            if cfid > CFID_MAX || (depth > 0 && cfid == 0) {
                return false;
            }
        }
        true
    }

    fn find_player_table(&self) -> Option<usize> {
        let span = VALIDATION_DEPTH * player::RECORD_SIZE + player::CFID_OFFSET + 2;
        let last = self.buf.len().checked_sub(span)?;
        (0..=last)
            .step_by(CANDIDATE_STEP)
            .find(|&offset| self.plausible_run_at(offset))
    }

    /// Records from the table head to the end of the buffer, capped at
    /// [`MAX_PLAYERS`]. Null slots (cyberface id 0) inside the range stay
    /// part of the population.
    fn count_players(&self, table_offset: usize) -> usize {
        ((self.buf.len() - table_offset) / player::RECORD_SIZE).min(MAX_PLAYERS)
    }

    fn find_team_table(&self) -> Option<usize> {
        let signature = merge_byte_representations(&ROSTER_SIGNATURE);
        let hit = self
            .buf
            .windows(signature.len())
            .enumerate()
            .find(|(offset, window)| {
                offset.is_multiple_of(TEAM_SCAN_STEP) && *window == signature.as_slice()
            })
            .map(|(offset, _)| offset)?;

        // The signature is the roster array of the table's second record, so
        // the table head sits one record plus the roster offset before it.
        let lead = team::ROSTER_OFFSET + team::RECORD_SIZE;
        match hit.checked_sub(lead) {
            Some(offset) => Some(offset),
            None => {
                warn!(
                    "roster signature at 0x{:X} too close to buffer start, ignoring",
                    hit
                );
                None
            }
        }
    }

    /// Walk whole records from the table head, stopping at the first record
    /// whose city window holds non-ASCII data, capped at [`MAX_TEAMS`].
    fn count_teams(&self, table_offset: usize) -> usize {
        let mut count = 0;
        while count < MAX_TEAMS {
            let base = table_offset + count * team::RECORD_SIZE;
            let Some(record) = self.buf.get(base..base + team::RECORD_SIZE) else {
                break;
            };
            let city = &record[team::CITY_OFFSET..team::CITY_OFFSET + team::CITY_CAPACITY];
            if !city.iter().all(|&b| b == 0 || (32..=126).contains(&b)) {
                break;
            }
            count += 1;
        }
        count
    }
}
