//! Utility functions for table discovery

/// Convert u16 values to their little-endian byte representation
pub fn merge_byte_representations(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
