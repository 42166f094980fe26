use std::fmt;
use std::iter::FusedIterator;

use crate::library::Track;

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) track: Track,
    pub(super) next: usize,
}

/// An ordered, cyclic sequence of tracks.
///
/// Nodes live in an arena of slots addressed by index. Every occupied slot
/// links to another occupied slot, and following `next` from `head` gets back
/// to `head` after exactly `len` steps. `tail` is the node whose `next` is
/// `head`; it is cached so appends and head removals need no scan.
///
/// `iter` and `cursor` borrow the playlist, so it cannot be edited while a
/// traversal is in progress.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    pub(super) slots: Vec<Option<Node>>,
    pub(super) free: Vec<usize>,
    pub(super) head: Option<usize>,
    pub(super) tail: Option<usize>,
    len: usize,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The track traversal starts from.
    pub fn head(&self) -> Option<&Track> {
        self.head.map(|idx| &self.node(idx).track)
    }

    fn node(&self, idx: usize) -> &Node {
        match &self.slots[idx] {
            Some(node) => node,
            None => unreachable!("playlist links to vacant slot {idx}"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        match &mut self.slots[idx] {
            Some(node) => node,
            None => unreachable!("playlist links to vacant slot {idx}"),
        }
    }

    /// Store `node` in a free slot (or a new one) and return its index.
    fn occupy(&mut self, node: Node) -> usize {
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

    /// Index the next `occupy` call will use.
    fn vacant_slot(&self) -> usize {
        self.free.last().copied().unwrap_or(self.slots.len())
    }

    /// Add `track` at the end of the cycle, just before head.
    ///
    /// Never fails; duplicate titles are allowed.
    pub fn append(&mut self, track: Track) {
        let idx = self.vacant_slot();
        // A lone node links to itself.
        let next = self.head.unwrap_or(idx);
        let placed = self.occupy(Node { track, next });
        debug_assert_eq!(placed, idx);

        match self.tail {
            Some(tail) => self.node_mut(tail).next = idx,
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Remove the first track titled `title`, walking from head.
    ///
    /// Returns the removed track, or `None` when nothing matched (the
    /// playlist is left untouched in that case). Removing the head moves
    /// head to the following track.
    pub fn remove(&mut self, title: &str) -> Option<Track> {
        let mut prev = self.tail?;
        let mut cur = self.head?;
        for _ in 0..self.len {
            let node = self.node(cur);
            if node.track.title == title {
                return Some(self.unlink(prev, cur));
            }
            prev = cur;
            cur = node.next;
        }
        None
    }

    fn unlink(&mut self, prev: usize, idx: usize) -> Track {
        let node = match self.slots[idx].take() {
            Some(node) => node,
            None => unreachable!("unlinking vacant slot {idx}"),
        };
        self.len -= 1;

        if self.len == 0 {
            self.slots.clear();
            self.free.clear();
            self.head = None;
            self.tail = None;
            return node.track;
        }

        self.free.push(idx);
        self.node_mut(prev).next = node.next;
        if self.head == Some(idx) {
            self.head = Some(node.next);
        }
        if self.tail == Some(idx) {
            self.tail = Some(prev);
        }
        node.track
    }

    /// Tracks in order, starting at head. Empty when the playlist is.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// A position on the cycle, starting at head. `None` when empty.
    pub fn cursor(&self) -> Option<Cursor<'_>> {
        self.head.map(|at| Cursor { playlist: self, at })
    }
}

impl fmt::Display for Playlist {
    /// One title per line, in playback order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for track in self {
            writeln!(f, "{}", track.title)?;
        }
        Ok(())
    }
}

impl Extend<Track> for Playlist {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        for track in iter {
            self.append(track);
        }
    }
}

impl FromIterator<Track> for Playlist {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        let mut playlist = Playlist::new();
        playlist.extend(iter);
        playlist
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// One pass over the playlist, head first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    playlist: &'a Playlist,
    next: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<&'a Track> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.playlist.node(self.next?);
        self.remaining -= 1;
        self.next = Some(node.next);
        Some(&node.track)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// A position on the cycle that wraps from the last track back to head.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    playlist: &'a Playlist,
    at: usize,
}

impl<'a> Cursor<'a> {
    pub fn track(&self) -> &'a Track {
        &self.playlist.node(self.at).track
    }

    /// Move to the next track; after the last one this is head again.
    pub fn advance(&mut self) {
        self.at = self.playlist.node(self.at).next;
    }

    pub fn is_at_head(&self) -> bool {
        self.playlist.head == Some(self.at)
    }
}
