//! One-record-at-a-time navigation over a batch result.

/// Cursor over `len` records. The index always stays in `[0, len - 1]`
/// (0 when empty); stepping past either end is a no-op, never a wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordViewer {
    index: usize,
    len: usize,
}

impl RecordViewer {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.len > 0 && self.index < self.len - 1
    }

    /// Step back; returns whether the index moved
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward; returns whether the index moved
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`, clamped to the valid range
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    /// 1-based position, e.g. "2 / 5"; `None` when empty
    pub fn position_label(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("{} / {}", self.index + 1, self.len))
    }
}
