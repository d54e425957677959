//! Data model shared by every input parser and output writer
//!
//! Records are plain name/value mappings so the history schema and the
//! looser cue sheet keys travel through the same trim and write steps.

mod playlist;
mod record;

pub use playlist::{order_width, Playlist, ORDER_COLUMN};
pub use record::Record;
