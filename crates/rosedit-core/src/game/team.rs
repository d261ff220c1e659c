//! Typed accessors over one team record

use crate::error::Result;
use crate::layout::team as layout;
use crate::record::RecordView;

#[derive(Debug)]
pub struct Team<'a> {
    view: RecordView<'a>,
}

impl<'a> Team<'a> {
    pub(crate) fn new(view: RecordView<'a>) -> Self {
        Self { view }
    }

    /// Absolute byte offset of this record inside the buffer.
    pub fn record_offset(&self) -> usize {
        self.view.base()
    }

    /// Team identifier byte.
    pub fn id(&self) -> Result<u8> {
        self.view.byte_at(layout::ID_OFFSET)
    }

    pub fn city(&self) -> Result<String> {
        self.view.ascii_at(layout::CITY_OFFSET, layout::CITY_CAPACITY)
    }

    pub fn set_city(&mut self, city: &str) -> Result<()> {
        self.view
            .write_ascii_at(layout::CITY_OFFSET, layout::CITY_CAPACITY, city)
    }

    pub fn name(&self) -> Result<String> {
        self.view.ascii_at(layout::NAME_OFFSET, layout::NAME_CAPACITY)
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.view
            .write_ascii_at(layout::NAME_OFFSET, layout::NAME_CAPACITY, name)
    }

    pub fn abbreviation(&self) -> Result<String> {
        self.view.ascii_at(layout::ABBR_OFFSET, layout::ABBR_CAPACITY)
    }

    pub fn set_abbreviation(&mut self, abbr: &str) -> Result<()> {
        self.view
            .write_ascii_at(layout::ABBR_OFFSET, layout::ABBR_CAPACITY, abbr)
    }

    /// Primary color, a 32-bit ARGB word.
    pub fn color1(&self) -> Result<u32> {
        self.view.u32_le_at(layout::COLOR1_OFFSET)
    }

    pub fn set_color1(&mut self, argb: u32) -> Result<()> {
        self.view.write_u32_le_at(layout::COLOR1_OFFSET, argb)
    }

    /// Secondary color, a 32-bit ARGB word.
    pub fn color2(&self) -> Result<u32> {
        self.view.u32_le_at(layout::COLOR2_OFFSET)
    }

    pub fn set_color2(&mut self, argb: u32) -> Result<()> {
        self.view.write_u32_le_at(layout::COLOR2_OFFSET, argb)
    }

    /// Player index held by one of the fifteen active roster slots.
    ///
    /// Out-of-range slots read as 0 and ignore writes.
    pub fn roster_slot(&self, index: usize) -> Result<u16> {
        match layout::roster_slot_offset(index) {
            Some(offset) => self.view.u16_le_at(offset),
            None => Ok(0),
        }
    }

    pub fn set_roster_slot(&mut self, index: usize, player_index: u16) -> Result<()> {
        match layout::roster_slot_offset(index) {
            Some(offset) => self.view.write_u16_le_at(offset, player_index),
            None => Ok(()),
        }
    }
}
