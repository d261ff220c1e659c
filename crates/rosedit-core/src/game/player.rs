//! Typed accessors over one player record
//!
//! Every accessor is a lookup in the static layout tables followed by a
//! codec dispatch on the record view. Indexed accessors (tendencies, hot
//! zones, signature skills, gear, animations) silently ignore out-of-range
//! indices: reads return the neutral value, writes are no-ops. Host code can
//! therefore enumerate dense index ranges without guarding every call.

use crate::error::Result;
use crate::game::{HotZoneLevel, Position, RatingId, VitalId};
use crate::layout::player as layout;
use crate::record::RecordView;

#[derive(Debug)]
pub struct Player<'a> {
    view: RecordView<'a>,
}

impl<'a> Player<'a> {
    pub(crate) fn new(view: RecordView<'a>) -> Self {
        Self { view }
    }

    /// Absolute byte offset of this record inside the buffer.
    pub fn record_offset(&self) -> usize {
        self.view.base()
    }

    /// Cyberface id. Zero marks an empty slot.
    pub fn cfid(&self) -> Result<u16> {
        self.view.u16_le_at(layout::CFID_OFFSET)
    }

    pub fn set_cfid(&mut self, cfid: u16) -> Result<()> {
        self.view.write_u16_le_at(layout::CFID_OFFSET, cfid)
    }

    /// Rating in the display domain (25..=110).
    pub fn rating(&self, id: RatingId) -> Result<i64> {
        self.view.read_field(layout::rating_field(id))
    }

    pub fn set_rating(&mut self, id: RatingId, display: i64) -> Result<()> {
        self.view.write_field(layout::rating_field(id), display)
    }

    /// Tendency value (0..=127). The category flag in the high bit is
    /// invisible here and survives writes.
    pub fn tendency(&self, index: usize) -> Result<i64> {
        match layout::tendency_field(index) {
            Some(field) => self.view.read_field(field),
            None => Ok(0),
        }
    }

    pub fn set_tendency(&mut self, index: usize, value: i64) -> Result<()> {
        match layout::tendency_field(index) {
            Some(field) => self.view.write_field(field, value),
            None => Ok(()),
        }
    }

    /// Hot zone value (0=cold, 1=neutral, 2=hot, 3=burned).
    pub fn hot_zone(&self, index: usize) -> Result<i64> {
        match layout::hot_zone_field(index) {
            Some(field) => self.view.read_field(field),
            None => Ok(0),
        }
    }

    pub fn set_hot_zone(&mut self, index: usize, value: i64) -> Result<()> {
        match layout::hot_zone_field(index) {
            Some(field) => self.view.write_field(field, value),
            None => Ok(()),
        }
    }

    /// Hot zone as a typed level.
    pub fn hot_zone_level(&self, index: usize) -> Result<HotZoneLevel> {
        Ok(HotZoneLevel::from_u8(self.hot_zone(index)? as u8).unwrap_or_default())
    }

    /// Signature skill code for one of the five slots.
    pub fn sig_skill(&self, slot: usize) -> Result<i64> {
        match layout::sig_skill_field(slot) {
            Some(field) => self.view.read_field(field),
            None => Ok(0),
        }
    }

    pub fn set_sig_skill(&mut self, slot: usize, value: i64) -> Result<()> {
        match layout::sig_skill_field(slot) {
            Some(field) => self.view.write_field(field, value),
            None => Ok(()),
        }
    }

    /// Gear slot value, width per the gear table.
    pub fn gear(&self, index: usize) -> Result<i64> {
        match layout::gear_field(index) {
            Some(field) => self.view.read_field(field),
            None => Ok(0),
        }
    }

    pub fn set_gear(&mut self, index: usize, value: i64) -> Result<()> {
        match layout::gear_field(index) {
            Some(field) => self.view.write_field(field, value),
            None => Ok(()),
        }
    }

    /// Signature animation preset for one of the forty slots.
    pub fn animation(&self, index: usize) -> Result<i64> {
        match layout::animation_field(index) {
            Some(field) => self.view.read_field(field),
            None => Ok(0),
        }
    }

    pub fn set_animation(&mut self, index: usize, value: i64) -> Result<()> {
        match layout::animation_field(index) {
            Some(field) => self.view.write_field(field, value),
            None => Ok(()),
        }
    }

    pub fn vital(&self, id: VitalId) -> Result<i64> {
        self.view.read_field(layout::vital_field(id))
    }

    pub fn set_vital(&mut self, id: VitalId, value: i64) -> Result<()> {
        self.view.write_field(layout::vital_field(id), value)
    }

    /// Position vital as a typed value, `None` for out-of-catalog bytes.
    pub fn position(&self) -> Result<Option<Position>> {
        Ok(Position::from_u8(self.vital(VitalId::Position)? as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::player::{RECORD_SIZE, hot_zones, tendencies};

    fn record() -> Vec<u8> {
        vec![0u8; RECORD_SIZE]
    }

    fn player(buf: &mut [u8]) -> Player<'_> {
        Player::new(RecordView::new(buf, 0, RECORD_SIZE).unwrap())
    }

    #[test]
    fn test_cfid_roundtrip_extremes() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_cfid(0).unwrap();
        assert_eq!(player.cfid().unwrap(), 0);
        player.set_cfid(65535).unwrap();
        assert_eq!(player.cfid().unwrap(), 65535);
        drop(player);
        assert_eq!(&buf[28..30], &[0xFF, 0xFF]);
    }

    #[test]
    fn test_rating_roundtrip() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_rating(RatingId::Speed, 100).unwrap();
        assert_eq!(player.rating(RatingId::Speed).unwrap(), 100);
        drop(player);
        // Speed is rating id 35, stored at byte 427.
        assert_eq!(buf[427], 225);
    }

    #[test]
    fn test_fresh_record_reads_neutral_rating() {
        let mut buf = record();
        let player = player(&mut buf);
        assert_eq!(player.rating(RatingId::Overall).unwrap(), 25);
    }

    #[test]
    fn test_tendency_preserves_category_flag() {
        let mut buf = record();
        // Seed tendency 0 with the flag set and value 69 (0xC5 on disk).
        {
            let mut view = RecordView::new(&mut buf, 0, RECORD_SIZE).unwrap();
            view.write_bits_at(tendencies::BASE_BYTE, tendencies::BASE_BIT, 8, 0xC5)
                .unwrap();
        }
        let mut player = Player::new(RecordView::new(&mut buf, 0, RECORD_SIZE).unwrap());
        assert_eq!(player.tendency(0).unwrap(), 69);
        player.set_tendency(0, 10).unwrap();
        assert_eq!(player.tendency(0).unwrap(), 10);

        let view = RecordView::new(&mut buf, 0, RECORD_SIZE).unwrap();
        assert_eq!(
            view.bits_at(tendencies::BASE_BYTE, tendencies::BASE_BIT, 8)
                .unwrap(),
            0x8A
        );
    }

    #[test]
    fn test_tendency_clamps_past_127() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_tendency(5, 130).unwrap();
        assert_eq!(player.tendency(5).unwrap(), 2);
    }

    #[test]
    fn test_hot_zone_packing() {
        let mut buf = record();
        let mut player = player(&mut buf);
        // Seed the neighbors first so the triple write must not disturb them.
        for zone in 3..14 {
            player.set_hot_zone(zone, (zone % 4) as i64).unwrap();
        }
        player.set_hot_zone(0, 2).unwrap();
        player.set_hot_zone(1, 3).unwrap();
        player.set_hot_zone(2, 1).unwrap();
        assert_eq!(player.hot_zone(0).unwrap(), 2);
        assert_eq!(player.hot_zone(1).unwrap(), 3);
        assert_eq!(player.hot_zone(2).unwrap(), 1);
        for zone in 3..14 {
            assert_eq!(player.hot_zone(zone).unwrap(), (zone % 4) as i64);
        }
        assert_eq!(player.hot_zone_level(1).unwrap(), HotZoneLevel::Burned);
    }

    #[test]
    fn test_hot_zone_masks_out_of_domain_value() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_hot_zone(0, 3).unwrap();
        assert_eq!(player.hot_zone(0).unwrap(), 3);
        player.set_hot_zone(0, 4).unwrap();
        assert_eq!(player.hot_zone(0).unwrap(), 0);
    }

    #[test]
    fn test_hot_zones_do_not_disturb_tendencies() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_tendency(57, 127).unwrap();
        player.set_hot_zone(0, 3).unwrap();
        assert_eq!(player.tendency(57).unwrap(), 127);
        drop(player);
        let view = RecordView::new(&mut buf, 0, RECORD_SIZE).unwrap();
        let base = hot_zones::BASE_BITS;
        assert_eq!(view.bits_at(base / 8, (base % 8) as u8, 2).unwrap(), 3);
    }

    #[test]
    fn test_sig_skill_roundtrip() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_sig_skill(0, 63).unwrap();
        player.set_sig_skill(4, 17).unwrap();
        assert_eq!(player.sig_skill(0).unwrap(), 63);
        assert_eq!(player.sig_skill(4).unwrap(), 17);
    }

    #[test]
    fn test_gear_widths() {
        let mut buf = record();
        let mut player = player(&mut buf);
        // Slot 8 is 4 bits wide.
        player.set_gear(8, 0xF).unwrap();
        assert_eq!(player.gear(8).unwrap(), 0xF);
        player.set_gear(8, 0x1F).unwrap();
        assert_eq!(player.gear(8).unwrap(), 0xF);
        // Slot 39 is a full 32-bit color word.
        player.set_gear(39, 0xDEAD_BEEF).unwrap();
        assert_eq!(player.gear(39).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_animation_slots() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_animation(0, 92).unwrap();
        player.set_animation(19, 9).unwrap();
        player.set_animation(20, 33).unwrap();
        player.set_animation(39, 7).unwrap();
        assert_eq!(player.animation(0).unwrap(), 92);
        assert_eq!(player.animation(19).unwrap(), 9);
        assert_eq!(player.animation(20).unwrap(), 33);
        assert_eq!(player.animation(39).unwrap(), 7);
        drop(player);
        assert_eq!(buf[193], 92);
        assert_eq!(buf[178], 33);
        assert_eq!(buf[216], 7);
    }

    #[test]
    fn test_vital_roundtrips() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_vital(VitalId::JerseyNumber, 99).unwrap();
        player.set_vital(VitalId::BirthYear, 1985).unwrap();
        player.set_vital(VitalId::ContractYear1, 19_000_000).unwrap();
        player.set_vital(VitalId::NoTrade, 1).unwrap();
        assert_eq!(player.vital(VitalId::JerseyNumber).unwrap(), 99);
        assert_eq!(player.vital(VitalId::BirthYear).unwrap(), 1985);
        assert_eq!(player.vital(VitalId::ContractYear1).unwrap(), 19_000_000);
        assert_eq!(player.vital(VitalId::NoTrade).unwrap(), 1);
    }

    #[test]
    fn test_position_lookup() {
        let mut buf = record();
        let mut player = player(&mut buf);
        player.set_vital(VitalId::Position, 2).unwrap();
        assert_eq!(player.position().unwrap(), Some(Position::SmallForward));
        player.set_vital(VitalId::Position, 9).unwrap();
        assert_eq!(player.position().unwrap(), None);
    }

    #[test]
    fn test_out_of_range_indices_are_silent() {
        let mut buf = record();
        let mut player = player(&mut buf);
        assert_eq!(player.tendency(58).unwrap(), 0);
        assert_eq!(player.hot_zone(14).unwrap(), 0);
        assert_eq!(player.sig_skill(5).unwrap(), 0);
        assert_eq!(player.gear(48).unwrap(), 0);
        assert_eq!(player.animation(40).unwrap(), 0);
        player.set_tendency(58, 50).unwrap();
        player.set_hot_zone(14, 3).unwrap();
        player.set_sig_skill(5, 1).unwrap();
        player.set_gear(48, 1).unwrap();
        player.set_animation(40, 1).unwrap();
        drop(player);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
