//! Synthetic roster buffers for discovery and editor tests

use crate::layout::{player, team};
use crate::offset::constants::ROSTER_SIGNATURE;

/// Builds a minimal buffer with the structural features discovery keys on:
/// a run of player records carrying plausible cyberface ids, and a team
/// table whose second record opens with the known roster signature.
pub struct RosterFixture {
    pub player_count: usize,
    pub team_count: usize,
    /// Opaque bytes after the team table, too short for another record.
    pub tail: usize,
}

impl Default for RosterFixture {
    fn default() -> Self {
        Self {
            player_count: 12,
            team_count: 4,
            tail: 100,
        }
    }
}

impl RosterFixture {
    pub fn player_table_offset(&self) -> usize {
        64
    }

    pub fn team_table_offset(&self) -> usize {
        let end = self.player_table_offset() + self.player_count * player::RECORD_SIZE;
        // The team scan runs on 2-byte alignment.
        end + (end & 1)
    }

    pub fn buffer_len(&self) -> usize {
        self.team_table_offset() + self.team_count * team::RECORD_SIZE + self.tail
    }

    pub fn build(&self) -> Vec<u8> {
        assert!(self.team_count >= 2, "the roster signature sits in team 1");
        let mut buf = vec![0u8; self.buffer_len()];

        for index in 0..self.player_count {
            let base = self.player_table_offset() + index * player::RECORD_SIZE;
            let cfid = 1000 + index as u16;
            buf[base + player::CFID_OFFSET..base + player::CFID_OFFSET + 2]
                .copy_from_slice(&cfid.to_le_bytes());
        }

        for index in 0..self.team_count {
            let base = self.team_table_offset() + index * team::RECORD_SIZE;
            buf[base + team::ID_OFFSET] = index as u8;

            let city = format!("CITY{index}");
            buf[base + team::CITY_OFFSET..base + team::CITY_OFFSET + city.len()]
                .copy_from_slice(city.as_bytes());
            let name = format!("TEAM{index}");
            buf[base + team::NAME_OFFSET..base + team::NAME_OFFSET + name.len()]
                .copy_from_slice(name.as_bytes());

            for slot in 0..team::ROSTER_SLOTS {
                let value: u16 = if index == 1 {
                    ROSTER_SIGNATURE
                        .get(slot)
                        .copied()
                        .unwrap_or((40 + slot) as u16)
                } else {
                    (100 * index + slot) as u16
                };
                let offset = base + team::ROSTER_OFFSET + slot * 2;
                buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
            }
        }

        buf
    }
}
