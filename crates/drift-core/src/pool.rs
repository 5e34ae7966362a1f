//! Fixed-capacity slot arena.
//!
//! Slots are allocated once when the pool is built and never move. Each slot
//! carries an `active` flag; the live count is kept alongside so that
//! population checks never scan.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entity pool exhausted ({capacity} slots in use)")]
pub struct PoolExhausted {
    pub capacity: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Slot<T> {
    active: bool,
    item: T,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntityPool<T, const N: usize> {
    slots: [Slot<T>; N],
    live: usize,
}

impl<T: Copy + Default, const N: usize> Default for EntityPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> EntityPool<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [Slot {
                active: false,
                item: T::default(),
            }; N],
            live: 0,
        }
    }

    /// Deactivate every slot and reset stored items to their default value.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
            slot.item = T::default();
        }
        self.live = 0;
    }
}

impl<T, const N: usize> EntityPool<T, N> {
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of active slots.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn is_full(&self) -> bool {
        self.live == N
    }

    /// First inactive slot in index order.
    pub fn find_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.active)
    }

    /// Store `item` in the first free slot and mark it active.
    pub fn acquire(&mut self, item: T) -> Result<usize, PoolExhausted> {
        let index = self
            .find_free()
            .ok_or(PoolExhausted { capacity: N })?;
        let slot = &mut self.slots[index];
        slot.item = item;
        slot.active = true;
        self.live += 1;
        Ok(index)
    }

    /// Mark a slot inactive. Returns `false` if it was already free or out
    /// of range, in which case nothing changes.
    pub fn release(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.active => {
                slot.active = false;
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.active)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots
            .get(index)
            .filter(|s| s.active)
            .map(|s| &s.item)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots
            .get_mut(index)
            .filter(|s| s.active)
            .map(|s| &mut s.item)
    }

    /// Active items with their slot index, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &s.item))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &mut s.item))
    }

    /// Mutable access to two distinct active slots at once.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        if a == b || !self.is_active(a) || !self.is_active(b) {
            return None;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi);
        let (lo_item, hi_item) = (&mut head[lo].item, &mut tail[0].item);
        if a < b {
            Some((lo_item, hi_item))
        } else {
            Some((hi_item, lo_item))
        }
    }
}
