//! Playlist controller: the sole mutation gateway over the song list
//!
//! Every externally visible add/remove flows through here and is recorded
//! as a reversible `Action` on the undo log. Maintains two stacks:
//! - `undo_log`: actions that can be reversed
//! - `redo_log`: actions that have been undone and can be replayed
//!
//! Recording a new action clears the redo log (standard editor behavior).
//! Navigation (`play_next`/`play_previous`) and bulk seeding are never
//! recorded.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::list::{OrderedSequence, SongList};
use crate::song::Song;
use crate::stack::{Lifo, VecStack};

/// A reversible playlist mutation
///
/// Actions are self-contained: each stores its own copy of the affected
/// song plus enough cursor bookkeeping to reverse or replay the mutation
/// without querying external state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A song was appended to the list
    Add {
        /// Copy of the song that was added
        song: Song,
        /// Position the song landed at (the list length before the add)
        index: usize,
        /// Cursor position before the add, `None` if the list was empty
        cursor_before: Option<usize>,
        /// Cursor position once the add completed
        cursor_after: Option<usize>,
    },
    /// A song was removed from the list
    Remove {
        /// Copy of the removed song
        song: Song,
        /// Position the song occupied at removal time
        index: usize,
        /// Cursor position before the removal
        cursor_before: Option<usize>,
        /// Cursor position once the removal (and cursor repair) completed
        cursor_after: Option<usize>,
    },
}

impl Action {
    fn cursor_before(&self) -> Option<usize> {
        match self {
            Action::Add { cursor_before, .. } | Action::Remove { cursor_before, .. } => {
                *cursor_before
            }
        }
    }

    fn cursor_after(&self) -> Option<usize> {
        match self {
            Action::Add { cursor_after, .. } | Action::Remove { cursor_after, .. } => {
                *cursor_after
            }
        }
    }

    /// Human-readable description for status display
    pub fn describe(&self) -> String {
        match self {
            Action::Add { song, .. } => format!("add \"{}\"", song.title),
            Action::Remove { song, .. } => format!("remove \"{}\"", song.title),
        }
    }
}

/// Undoable playlist over an ordered sequence and two LIFO action logs
///
/// Generic over the sequence and stack capabilities; `new` builds the
/// stock arena-list/vec-stack pairing. The sequence and logs are owned
/// exclusively by this controller and never exposed raw.
#[derive(Debug)]
pub struct Playlist<L = SongList, S = VecStack<Action>>
where
    L: OrderedSequence,
    S: Lifo<Action>,
{
    list: L,
    undo_log: S,
    redo_log: S,
    /// When set, mutations bypass action recording (bulk seeding)
    seeding: bool,
}

impl Playlist {
    /// Create an empty playlist with the default list and log types
    pub fn new() -> Self {
        Self::with_parts(SongList::new(), VecStack::new(), VecStack::new())
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, S> Playlist<L, S>
where
    L: OrderedSequence,
    S: Lifo<Action>,
{
    /// Assemble a playlist from injected sequence and log implementations
    pub fn with_parts(list: L, undo_log: S, redo_log: S) -> Self {
        Self {
            list,
            undo_log,
            redo_log,
            seeding: false,
        }
    }

    /// Append a song and record the action
    ///
    /// Songs missing a required field are rejected: the call is a no-op
    /// and the unchanged current song is returned.
    pub fn add_song(&mut self, song: Song) -> Option<Song> {
        if let Err(err) = song.validate() {
            warn!(%err, "rejected song");
            return self.list.current().cloned();
        }

        let cursor_before = self.list.cursor_index();
        let index = self.list.len();
        let record = song.clone();
        self.list.insert(song, None);
        let cursor_after = self.list.cursor_index();

        debug!(title = %record.title, index, "added song");
        self.record(Action::Add {
            song: record,
            index,
            cursor_before,
            cursor_after,
        });
        self.list.current().cloned()
    }

    /// Remove the first song with this title and record the action
    ///
    /// An absent title is a no-op returning `None`.
    pub fn remove_song(&mut self, title: &str) -> Option<Song> {
        let index = self.list.index_of(title)?;
        let cursor_before = self.list.cursor_index();
        let removed = self.list.remove(title)?;
        let cursor_after = self.list.cursor_index();

        debug!(title = %removed.title, index, "removed song");
        self.record(Action::Remove {
            song: removed.clone(),
            index,
            cursor_before,
            cursor_after,
        });
        Some(removed)
    }

    /// Advance the cursor; never recorded as an action
    pub fn play_next(&mut self) -> Option<&Song> {
        self.list.step_forward()
    }

    /// Move the cursor back; never recorded as an action
    pub fn play_previous(&mut self) -> Option<&Song> {
        self.list.step_backward()
    }

    /// Reverse the most recent action
    ///
    /// Returns `false` when there is nothing to undo or the reversal
    /// cannot apply (the recorded song is no longer present). A failed
    /// undo restores the popped action to the undo log and leaves every
    /// other piece of state untouched, so the attempt can be repeated.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.undo_log.pop() else {
            debug!("nothing to undo");
            return false;
        };

        match &action {
            Action::Add { song, .. } => {
                if self.list.remove(&song.title).is_none() {
                    warn!(title = %song.title, "undo failed: song no longer present");
                    self.undo_log.push(action);
                    return false;
                }
            }
            Action::Remove { song, index, .. } => {
                self.list.insert(song.clone(), Some(*index));
            }
        }

        if let Some(cursor) = action.cursor_before() {
            self.list.move_cursor_to(cursor);
        }
        debug!(action = %action.describe(), "undone");
        self.redo_log.push(action);
        true
    }

    /// Replay the most recently undone action
    ///
    /// Symmetric to [`undo`](Self::undo): `false` when the redo log is
    /// empty or the replay cannot apply, in which case the popped action
    /// is restored to the redo log unchanged.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.redo_log.pop() else {
            debug!("nothing to redo");
            return false;
        };

        match &action {
            Action::Add { song, index, .. } => {
                self.list.insert(song.clone(), Some(*index));
            }
            Action::Remove { song, .. } => {
                if self.list.remove(&song.title).is_none() {
                    warn!(title = %song.title, "redo failed: song no longer present");
                    self.redo_log.push(action);
                    return false;
                }
            }
        }

        if let Some(cursor) = action.cursor_after() {
            self.list.move_cursor_to(cursor);
        }
        debug!(action = %action.describe(), "redone");
        self.undo_log.push(action);
        true
    }

    /// Whether there are actions to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_log.is_empty()
    }

    /// Whether there are actions to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_log.is_empty()
    }

    /// Number of actions on the undo log
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    /// Number of actions on the redo log
    pub fn redo_depth(&self) -> usize {
        self.redo_log.len()
    }

    /// Description of the action `undo` would reverse next
    pub fn peek_undo(&self) -> Option<String> {
        self.undo_log.peek().map(Action::describe)
    }

    /// Description of the action `redo` would replay next
    pub fn peek_redo(&self) -> Option<String> {
        self.redo_log.peek().map(Action::describe)
    }

    /// Bulk-load an ordered sequence of songs without recording actions
    ///
    /// Invalid entries are skipped individually (each skip is logged by
    /// `add_song`), never fatal to the batch. Both action logs are
    /// force-cleared afterwards regardless of prior state.
    pub fn initialize<I>(&mut self, songs: I)
    where
        I: IntoIterator<Item = Song>,
    {
        self.seeding = true;
        for song in songs {
            self.add_song(song);
        }
        self.seeding = false;
        self.undo_log.clear();
        self.redo_log.clear();
        debug!(count = self.list.len(), "playlist seeded");
    }

    /// Jump the cursor to `index`, clamped into the list bounds
    ///
    /// Returns `false` only when the list is empty (no valid target).
    pub fn move_cursor_to(&mut self, index: usize) -> bool {
        if self.list.is_empty() {
            return false;
        }
        let clamped = index.min(self.list.len() - 1);
        self.list.move_cursor_to(clamped)
    }

    /// The song under the cursor
    pub fn current_song(&self) -> Option<&Song> {
        self.list.current()
    }

    /// List position of the cursor, `None` when the playlist is empty
    pub fn cursor_index(&self) -> Option<usize> {
        self.list.cursor_index()
    }

    /// Number of songs in the playlist
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the playlist holds no songs
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Visit every song in list order (for boundary-layer re-pulls)
    pub fn for_each<F: FnMut(&Song)>(&self, f: F) {
        self.list.for_each_forward(f);
    }

    /// Visit every song in reverse list order
    pub fn for_each_rev<F: FnMut(&Song)>(&self, f: F) {
        self.list.for_each_backward(f);
    }

    /// Record a forward action, invalidating the redo log
    ///
    /// The only transition that clears the redo log. No-op while seeding.
    fn record(&mut self, action: Action) {
        if self.seeding {
            return;
        }
        self.undo_log.push(action);
        self.redo_log.clear();
    }
}
