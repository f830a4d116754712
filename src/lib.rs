//! Setlist - an ordered, navigable music playlist with undo/redo history
//!
//! The engine is three layers, composed bottom-up:
//! - [`SongList`]: a doubly linked song chain with a movable playback cursor
//! - [`VecStack`]: the LIFO container backing the action logs
//! - [`Playlist`]: the mutation gateway that records every add/remove as a
//!   reversible [`Action`]
//!
//! The core is synchronous and single-threaded; playback, rendering and
//! input handling are external collaborators that re-read state through
//! [`Playlist::current_song`] and the traversal methods after every call.

#![deny(warnings)]

pub mod list;
pub mod playlist;
pub mod song;
pub mod stack;

pub use list::{OrderedSequence, SongList};
pub use playlist::{Action, Playlist};
pub use song::{Song, SongError};
pub use stack::{Lifo, VecStack};
