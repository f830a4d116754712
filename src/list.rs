//! Ordered song list with a movable playback cursor
//!
//! A doubly linked chain stored in an index arena:
//! - `head`/`tail` delimit the chain, `current` marks the playing song
//! - O(1) head/tail insert and cursor steps, O(n) indexed access
//! - removal repairs the cursor so something sensible keeps playing
//!
//! Nodes live in `Vec` slots and link to each other by index, so there is
//! a single owner for the whole chain and back-links cost nothing to hold.
//! Freed slots are recycled through a free list.

use crate::song::Song;

/// Capability the playlist controller requires from its sequence
///
/// `SongList` is the default implementation; tests or embedders can
/// substitute their own as long as the cursor-repair contract holds.
pub trait OrderedSequence {
    /// Insert at `index` (clamped into `[0, len]`), appending when `None`;
    /// returns the stored song
    fn insert(&mut self, song: Song, index: Option<usize>) -> &Song;
    /// Remove the first song with this title, walking from the head
    fn remove(&mut self, title: &str) -> Option<Song>;
    /// Advance the cursor one song, staying put at the tail
    fn step_forward(&mut self) -> Option<&Song>;
    /// Move the cursor back one song, staying put at the head
    fn step_backward(&mut self) -> Option<&Song>;
    /// The song under the cursor
    fn current(&self) -> Option<&Song>;
    /// Number of songs in the list
    fn len(&self) -> usize;
    /// Whether the list holds no songs
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Index of the first song with this title
    fn index_of(&self, title: &str) -> Option<usize>;
    /// Index of the cursor, `None` when the list is empty
    fn cursor_index(&self) -> Option<usize>;
    /// Reposition the cursor; `false` (and no movement) when out of range
    fn move_cursor_to(&mut self, index: usize) -> bool;
    /// Visit every song in list order
    fn for_each_forward<F: FnMut(&Song)>(&self, f: F);
    /// Visit every song in reverse list order
    fn for_each_backward<F: FnMut(&Song)>(&self, f: F);
}

/// One chain link: a song plus its neighbors' arena indices
#[derive(Debug, Clone)]
struct Node {
    song: Song,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked song chain with head/tail/cursor bookkeeping
///
/// Invariants (hold between every pair of public calls):
/// - `len == 0` exactly when `head`, `tail` and `current` are all `None`
/// - the head has no `prev`, the tail has no `next`
/// - `current` always names a node reachable from `head`
#[derive(Debug, Clone, Default)]
pub struct SongList {
    /// Node arena; `None` slots are free and tracked in `free`
    slots: Vec<Option<Node>>,
    /// Recycled slot indices
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Cursor: the node whose song is considered playing
    current: Option<usize>,
    len: usize,
}

impl SongList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, idx: usize) -> &Node {
        self.slots[idx]
            .as_ref()
            .expect("linked slot is occupied")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.slots[idx]
            .as_mut()
            .expect("linked slot is occupied")
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node {
        let node = self.slots[idx]
            .take()
            .expect("released slot was occupied");
        self.free.push(idx);
        node
    }

    /// Arena index of the node at a chain position, walking from the head
    fn index_at(&self, position: usize) -> Option<usize> {
        let mut idx = self.head?;
        for _ in 0..position {
            idx = self.node(idx).next?;
        }
        Some(idx)
    }

    /// Insert a song, clamping `index` into `[0, len]`; `None` appends
    ///
    /// Inserting into an empty list makes the new node head, tail and
    /// cursor. Every other insert leaves the cursor where it was.
    pub fn insert(&mut self, song: Song, index: Option<usize>) -> &Song {
        let at = index.unwrap_or(self.len).min(self.len);

        let idx = if self.len == 0 {
            let idx = self.alloc(Node { song, prev: None, next: None });
            self.head = Some(idx);
            self.tail = Some(idx);
            self.current = Some(idx);
            idx
        } else if at == self.len {
            // Append at the tail
            let tail = self.tail.expect("non-empty list has a tail");
            let idx = self.alloc(Node { song, prev: Some(tail), next: None });
            self.node_mut(tail).next = Some(idx);
            self.tail = Some(idx);
            idx
        } else if at == 0 {
            // Rewire the head
            let head = self.head.expect("non-empty list has a head");
            let idx = self.alloc(Node { song, prev: None, next: Some(head) });
            self.node_mut(head).prev = Some(idx);
            self.head = Some(idx);
            idx
        } else {
            // Splice before the node currently at `at`
            let target = self
                .index_at(at)
                .expect("clamped index lies within the chain");
            let before = self.node(target).prev;
            let idx = self.alloc(Node { song, prev: before, next: Some(target) });
            if let Some(before) = before {
                self.node_mut(before).next = Some(idx);
            }
            self.node_mut(target).prev = Some(idx);
            idx
        };

        self.len += 1;
        &self.node(idx).song
    }

    /// Remove the first song titled `title`, repairing the cursor
    ///
    /// Cursor repair when the removed node is the cursor itself:
    /// - head removed: cursor follows the new head (possibly none)
    /// - tail removed: cursor falls back to the new tail
    /// - middle removed: cursor prefers the next neighbor over the previous
    ///
    /// The middle-removal preference determines which song plays after a
    /// deletion and is relied upon by undo replay.
    pub fn remove(&mut self, title: &str) -> Option<Song> {
        let mut idx = self.head;
        while let Some(i) = idx {
            if self.node(i).song.title == title {
                return Some(self.unlink(i));
            }
            idx = self.node(i).next;
        }
        None
    }

    fn unlink(&mut self, idx: usize) -> Song {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        // Repair the cursor before touching the links
        if self.current == Some(idx) {
            self.current = if self.head == Some(idx) {
                next
            } else if self.tail == Some(idx) {
                prev
            } else {
                next.or(prev)
            };
        }

        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
        self.release(idx).song
    }

    /// Advance the cursor; at the tail (or on an empty list) it stays put
    pub fn step_forward(&mut self) -> Option<&Song> {
        if let Some(cur) = self.current {
            if let Some(next) = self.node(cur).next {
                self.current = Some(next);
            }
        }
        self.current()
    }

    /// Move the cursor back; at the head (or on an empty list) it stays put
    pub fn step_backward(&mut self) -> Option<&Song> {
        if let Some(cur) = self.current {
            if let Some(prev) = self.node(cur).prev {
                self.current = Some(prev);
            }
        }
        self.current()
    }

    /// The song under the cursor
    pub fn current(&self) -> Option<&Song> {
        self.current.map(|idx| &self.node(idx).song)
    }

    /// Number of songs in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no songs
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Chain position of the first song titled `title`
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.iter().position(|song| song.title == title)
    }

    /// Chain position of the cursor, `None` when the list is empty
    pub fn cursor_index(&self) -> Option<usize> {
        let current = self.current?;
        let mut idx = self.head;
        let mut position = 0;
        while let Some(i) = idx {
            if i == current {
                return Some(position);
            }
            position += 1;
            idx = self.node(i).next;
        }
        unreachable!("cursor points at a node reachable from the head");
    }

    /// Move the cursor to `index`; out-of-range requests fail without
    /// moving it
    pub fn move_cursor_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let idx = self
            .index_at(index)
            .expect("in-range index lies within the chain");
        self.current = Some(idx);
        true
    }

    /// Lazy forward traversal in list order
    pub fn iter(&self) -> Iter<'_> {
        Iter { list: self, next: self.head }
    }

    /// Lazy backward traversal from the tail
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev { list: self, next: self.tail }
    }
}

impl OrderedSequence for SongList {
    fn insert(&mut self, song: Song, index: Option<usize>) -> &Song {
        SongList::insert(self, song, index)
    }

    fn remove(&mut self, title: &str) -> Option<Song> {
        SongList::remove(self, title)
    }

    fn step_forward(&mut self) -> Option<&Song> {
        SongList::step_forward(self)
    }

    fn step_backward(&mut self) -> Option<&Song> {
        SongList::step_backward(self)
    }

    fn current(&self) -> Option<&Song> {
        SongList::current(self)
    }

    fn len(&self) -> usize {
        SongList::len(self)
    }

    fn index_of(&self, title: &str) -> Option<usize> {
        SongList::index_of(self, title)
    }

    fn cursor_index(&self) -> Option<usize> {
        SongList::cursor_index(self)
    }

    fn move_cursor_to(&mut self, index: usize) -> bool {
        SongList::move_cursor_to(self, index)
    }

    fn for_each_forward<F: FnMut(&Song)>(&self, f: F) {
        self.iter().for_each(f);
    }

    fn for_each_backward<F: FnMut(&Song)>(&self, f: F) {
        self.iter_rev().for_each(f);
    }
}

/// Forward iterator over the chain
pub struct Iter<'a> {
    list: &'a SongList,
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.node(idx);
        self.next = node.next;
        Some(&node.song)
    }
}

/// Backward iterator over the chain
pub struct IterRev<'a> {
    list: &'a SongList,
    next: Option<usize>,
}

impl<'a> Iterator for IterRev<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.node(idx);
        self.next = node.prev;
        Some(&node.song)
    }
}
