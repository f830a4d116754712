//! Tests for the playlist controller

use super::*;
use crate::list::OrderedSequence;

fn song(title: &str) -> Song {
    Song::new(title, "artist", format!("file:///{title}.flac"))
}

fn titles<L: OrderedSequence, S: Lifo<Action>>(playlist: &Playlist<L, S>) -> Vec<String> {
    let mut out = Vec::new();
    playlist.for_each(|s| out.push(s.title.clone()));
    out
}

fn current_title<L: OrderedSequence, S: Lifo<Action>>(playlist: &Playlist<L, S>) -> Option<String> {
    playlist.current_song().map(|s| s.title.clone())
}

// ============================================================================
// Recording and size bookkeeping
// ============================================================================

#[test]
fn test_size_tracks_live_songs() {
    let mut playlist = Playlist::new();
    assert!(playlist.is_empty());

    playlist.add_song(song("A"));
    playlist.add_song(song("B"));
    playlist.add_song(song("C"));
    assert_eq!(playlist.len(), 3);

    playlist.remove_song("B");
    assert_eq!(playlist.len(), 2);
    assert!(!playlist.is_empty());

    playlist.remove_song("A");
    playlist.remove_song("C");
    assert_eq!(playlist.len(), 0);
    assert!(playlist.is_empty());
}

#[test]
fn test_rejected_song_is_a_noop() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));

    let current = playlist.add_song(Song::new("", "artist", "url"));
    assert_eq!(current.map(|s| s.title), Some("A".into()));
    assert_eq!(playlist.len(), 1);
    // Nothing was recorded for the rejected song
    assert_eq!(playlist.undo_depth(), 1);
}

#[test]
fn test_remove_absent_title_is_a_noop() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));

    assert_eq!(playlist.remove_song("missing"), None);
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.undo_depth(), 1);
    assert!(!playlist.can_redo());
}

#[test]
fn test_navigation_is_not_recorded() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));
    playlist.add_song(song("B"));
    let depth = playlist.undo_depth();

    playlist.play_next();
    playlist.play_previous();
    playlist.move_cursor_to(1);

    assert_eq!(playlist.undo_depth(), depth);
}

// ============================================================================
// Undo / redo round trips
// ============================================================================

#[test]
fn test_add_undo_redo_roundtrip() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));
    playlist.add_song(song("B"));
    // Pre-add snapshot
    let size_before = playlist.len();
    let cursor_before = current_title(&playlist);

    playlist.add_song(song("C"));
    let size_after = playlist.len();
    let titles_after = titles(&playlist);

    assert!(playlist.undo());
    assert_eq!(playlist.len(), size_before);
    assert_eq!(current_title(&playlist), cursor_before);
    assert!(playlist.can_redo());

    // add -> undo -> redo is identical to the original add
    assert!(playlist.redo());
    assert_eq!(playlist.len(), size_after);
    assert_eq!(titles(&playlist), titles_after);
    assert_eq!(current_title(&playlist), cursor_before);
}

#[test]
fn test_undo_exhausts_then_reports_nothing() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));

    assert!(playlist.undo());
    assert!(playlist.is_empty());
    assert_eq!(playlist.current_song(), None);

    assert!(!playlist.undo());
    assert!(!playlist.can_undo());
}

#[test]
fn test_redo_replays_in_original_order() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));
    playlist.add_song(song("B"));
    playlist.add_song(song("C"));

    assert!(playlist.undo());
    assert!(playlist.undo());
    assert!(playlist.undo());
    assert!(playlist.is_empty());

    assert!(playlist.redo());
    assert!(playlist.redo());
    assert!(playlist.redo());
    assert!(!playlist.redo());

    assert_eq!(titles(&playlist), ["A", "B", "C"]);
    assert_eq!(current_title(&playlist).as_deref(), Some("A"));
}

#[test]
fn test_new_action_clears_redo_log() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));
    playlist.add_song(song("B"));

    assert!(playlist.undo());
    assert!(playlist.can_redo());

    playlist.add_song(song("C"));
    assert!(!playlist.can_redo());
    assert!(!playlist.redo());
}

#[test]
fn test_undo_restores_recorded_cursor_for_removals() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));
    playlist.add_song(song("B"));
    playlist.add_song(song("C"));
    assert!(playlist.move_cursor_to(2));

    // Removing a non-cursor song leaves the cursor on C
    playlist.remove_song("B");
    assert_eq!(current_title(&playlist).as_deref(), Some("C"));

    // Undo reinserts B at its original index and puts the cursor back
    // where it was before the removal
    assert!(playlist.undo());
    assert_eq!(titles(&playlist), ["A", "B", "C"]);
    assert_eq!(current_title(&playlist).as_deref(), Some("C"));
}

#[test]
fn test_undo_remove_of_cursor_middle_node() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("A"));
    playlist.add_song(song("B"));
    playlist.add_song(song("C"));
    assert!(playlist.move_cursor_to(1));

    // Removing the cursor's own middle node moves the cursor to its
    // former next neighbor
    playlist.remove_song("B");
    assert_eq!(current_title(&playlist).as_deref(), Some("C"));

    assert!(playlist.undo());
    assert_eq!(titles(&playlist), ["A", "B", "C"]);
    assert_eq!(current_title(&playlist).as_deref(), Some("B"));
}

// ============================================================================
// Failure safety
// ============================================================================

/// Test double: a sequence whose removals run out, so undo/redo replay
/// can hit the "song no longer present" path
#[derive(Debug)]
struct FlakyList {
    inner: SongList,
    allowed_removes: usize,
}

impl FlakyList {
    fn new(allowed_removes: usize) -> Self {
        Self {
            inner: SongList::new(),
            allowed_removes,
        }
    }
}

impl OrderedSequence for FlakyList {
    fn insert(&mut self, song: Song, index: Option<usize>) -> &Song {
        self.inner.insert(song, index)
    }

    fn remove(&mut self, title: &str) -> Option<Song> {
        if self.allowed_removes == 0 {
            return None;
        }
        let removed = self.inner.remove(title);
        if removed.is_some() {
            self.allowed_removes -= 1;
        }
        removed
    }

    fn step_forward(&mut self) -> Option<&Song> {
        self.inner.step_forward()
    }

    fn step_backward(&mut self) -> Option<&Song> {
        self.inner.step_backward()
    }

    fn current(&self) -> Option<&Song> {
        self.inner.current()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn index_of(&self, title: &str) -> Option<usize> {
        self.inner.index_of(title)
    }

    fn cursor_index(&self) -> Option<usize> {
        self.inner.cursor_index()
    }

    fn move_cursor_to(&mut self, index: usize) -> bool {
        self.inner.move_cursor_to(index)
    }

    fn for_each_forward<F: FnMut(&Song)>(&self, f: F) {
        self.inner.for_each_forward(f);
    }

    fn for_each_backward<F: FnMut(&Song)>(&self, f: F) {
        self.inner.for_each_backward(f);
    }
}

#[test]
fn test_failed_undo_restores_the_action() {
    let mut playlist = Playlist::with_parts(FlakyList::new(0), VecStack::new(), VecStack::new());
    playlist.add_song(song("ghost"));
    assert_eq!(playlist.undo_depth(), 1);

    // Reversing the add needs a removal, which the sequence refuses
    assert!(!playlist.undo());
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.undo_depth(), 1);
    assert_eq!(playlist.redo_depth(), 0);

    // The action was not lost: the attempt can be repeated
    assert!(!playlist.undo());
    assert_eq!(playlist.undo_depth(), 1);
}

#[test]
fn test_failed_redo_restores_the_action() {
    let mut playlist = Playlist::with_parts(FlakyList::new(1), VecStack::new(), VecStack::new());
    playlist.add_song(song("X"));
    // Consumes the only allowed removal
    assert_eq!(playlist.remove_song("X").map(|s| s.title), Some("X".into()));

    // Undoing the removal is an insert, which still works
    assert!(playlist.undo());
    assert_eq!(playlist.len(), 1);

    // Replaying the removal is refused; the action stays on the redo log
    assert!(!playlist.redo());
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.redo_depth(), 1);
    assert!(playlist.can_redo());
}

// ============================================================================
// Seeding
// ============================================================================

#[test]
fn test_initialize_is_not_undoable() {
    let mut playlist = Playlist::new();
    playlist.initialize(vec![song("A"), song("B"), song("C")]);

    assert_eq!(playlist.len(), 3);
    assert!(!playlist.can_undo());
    assert!(!playlist.undo());
    assert_eq!(current_title(&playlist).as_deref(), Some("A"));
}

#[test]
fn test_initialize_clears_prior_history() {
    let mut playlist = Playlist::new();
    playlist.add_song(song("old"));
    assert!(playlist.undo());
    assert!(playlist.can_redo());

    playlist.initialize(vec![song("A")]);
    assert!(!playlist.can_undo());
    assert!(!playlist.can_redo());
}

#[test]
fn test_initialize_skips_invalid_entries() {
    let mut playlist = Playlist::new();
    playlist.initialize(vec![
        song("A"),
        Song::new("", "artist", "url"),
        song("B"),
        Song::new("C", "", "url"),
    ]);

    assert_eq!(titles(&playlist), ["A", "B"]);
    assert_eq!(playlist.len(), 2);
}

// ============================================================================
// Cursor passthrough
// ============================================================================

#[test]
fn test_move_cursor_clamps_into_bounds() {
    let mut playlist = Playlist::new();
    assert!(!playlist.move_cursor_to(0));

    playlist.add_song(song("A"));
    playlist.add_song(song("B"));

    // Out-of-range requests clamp to the last song instead of failing
    assert!(playlist.move_cursor_to(99));
    assert_eq!(current_title(&playlist).as_deref(), Some("B"));

    assert!(playlist.move_cursor_to(0));
    assert_eq!(current_title(&playlist).as_deref(), Some("A"));
}

#[test]
fn test_peek_and_depth_reporting() {
    let mut playlist = Playlist::new();
    assert_eq!(playlist.peek_undo(), None);
    assert_eq!(playlist.peek_redo(), None);

    playlist.add_song(song("A"));
    playlist.remove_song("A");
    assert_eq!(playlist.undo_depth(), 2);
    assert_eq!(playlist.peek_undo().as_deref(), Some("remove \"A\""));

    assert!(playlist.undo());
    assert_eq!(playlist.peek_undo().as_deref(), Some("add \"A\""));
    assert_eq!(playlist.peek_redo().as_deref(), Some("remove \"A\""));
    assert_eq!(playlist.redo_depth(), 1);
}

// ============================================================================
// End-to-end scenario
// ============================================================================

/// Walkthrough: empty playlist through add/add/remove/undo with the cursor
/// following the head-removal and restoration rules
#[test]
fn test_scenario_add_add_remove_undo() {
    let mut playlist = Playlist::new();

    playlist.add_song(Song::new("T1", "A1", "u1"));
    assert_eq!(playlist.len(), 1);
    let current = playlist.current_song().unwrap();
    assert_eq!((current.title.as_str(), current.artist.as_str()), ("T1", "A1"));
    assert_eq!(current.url, "u1");

    // Append does not move the cursor
    playlist.add_song(Song::new("T2", "A2", "u2"));
    assert_eq!(playlist.len(), 2);
    assert_eq!(current_title(&playlist).as_deref(), Some("T1"));

    // Removing the head moves the cursor to the new head
    playlist.remove_song("T1");
    assert_eq!(current_title(&playlist).as_deref(), Some("T2"));

    // Undo reinserts T1 at index 0 and restores the cursor to it
    assert!(playlist.undo());
    assert_eq!(titles(&playlist), ["T1", "T2"]);
    assert_eq!(current_title(&playlist).as_deref(), Some("T1"));
}
