mod cursor;

pub use cursor::BitCursor;
