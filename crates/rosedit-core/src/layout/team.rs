//! Team record layout for the 2K14 roster format
//!
//! Team records are 716 bytes and, unlike player records, almost entirely
//! byte-aligned: an identifier byte, fixed-capacity ASCII windows for the
//! city, name and abbreviation, two packed color words, and the 15-slot
//! active roster array of LE16 player indices.

/// Binary size of one team record.
pub const RECORD_SIZE: usize = 716;

/// Team identifier byte.
pub const ID_OFFSET: usize = 0;

/// City name, zero-padded ASCII.
pub const CITY_OFFSET: usize = 1;
pub const CITY_CAPACITY: usize = 32;

/// Team name, zero-padded ASCII.
pub const NAME_OFFSET: usize = 33;
pub const NAME_CAPACITY: usize = 32;

/// Primary and secondary colors, 32-bit ARGB words.
///
/// The color words sit inside the name window in the retail format; writing
/// a color clobbers name bytes 7..=14 and vice versa.
pub const COLOR1_OFFSET: usize = 40;
pub const COLOR2_OFFSET: usize = 44;

/// Abbreviation, zero-padded ASCII.
pub const ABBR_OFFSET: usize = 65;
pub const ABBR_CAPACITY: usize = 4;

/// Active roster: 15 LE16 player indices.
pub const ROSTER_OFFSET: usize = 108;
pub const ROSTER_SLOTS: usize = 15;

/// Byte offset of roster slot `index`, or `None` past the 15-slot array.
pub fn roster_slot_offset(index: usize) -> Option<usize> {
    if index >= ROSTER_SLOTS {
        return None;
    }
    Some(ROSTER_OFFSET + index * 2)
}
