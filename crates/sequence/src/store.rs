//! Sparse, progressively filled frame storage.

/// Decoded frames by index plus a parallel loaded bitset.
///
/// Sized once when the frame count is known. Slots only ever go from
/// unloaded to loaded.
#[derive(Debug)]
pub struct FrameStore<I> {
    frames: Vec<Option<I>>,
    loaded: Vec<bool>,
}

impl<I> FrameStore<I> {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: (0..frame_count).map(|_| None).collect(),
            loaded: vec![false; frame_count],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Store a decoded frame. Returns false when `index` is out of range or
    /// the slot was already filled.
    pub fn insert(&mut self, index: usize, image: I) -> bool {
        match self.frames.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(image);
                self.loaded[index] = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    pub fn get(&self, index: usize) -> Option<&I> {
        self.frames.get(index).and_then(Option::as_ref)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.iter().filter(|l| **l).count()
    }

    /// The frame to show for `target`: itself if loaded, else the nearest
    /// loaded frame below it, else the nearest above it.
    pub fn resolve(&self, target: usize) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        let target = target.min(last);

        if self.loaded[target] {
            return Some(target);
        }
        (0..target)
            .rev()
            .find(|&i| self.loaded[i])
            .or_else(|| (target + 1..=last).find(|&i| self.loaded[i]))
    }
}
