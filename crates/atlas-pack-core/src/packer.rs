use crate::model::{PackItem, Placement};

/// A rectangle of unused page area. Engine working state only, never exposed.
/// `x2()`/`y2()` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FreeRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FreeRegion {
    pub(crate) fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
    fn x2(&self) -> u32 {
        self.x + self.width
    }
    fn y2(&self) -> u32 {
        self.y + self.height
    }
    fn intersects(&self, other: &FreeRegion) -> bool {
        !(self.x >= other.x2()
            || other.x >= self.x2()
            || self.y >= other.y2()
            || other.y >= self.y2())
    }
    /// Returns true if `other` is fully inside `self`.
    fn contains(&self, other: &FreeRegion) -> bool {
        other.x >= self.x && other.y >= self.y && other.x2() <= self.x2() && other.y2() <= self.y2()
    }
    fn fits(&self, w: u64, h: u64) -> bool {
        self.width as u64 >= w && self.height as u64 >= h
    }
}

/// Single-page placement engine: free-region bookkeeping plus the
/// best-short-side-fit scan. One instance per page under construction;
/// discarded when the page is sealed.
pub(crate) struct PagePacker {
    padding: u32,
    free: Vec<FreeRegion>,
}

impl PagePacker {
    pub(crate) fn new(page_size: u32, padding: u32) -> Self {
        Self {
            padding,
            free: vec![FreeRegion::new(0, 0, page_size, page_size)],
        }
    }

    /// Footprint reserved for an item: its dimensions plus trailing padding,
    /// widened to u64 so an extreme padding cannot overflow.
    fn footprint(&self, item: &PackItem) -> (u64, u64) {
        (
            item.width as u64 + self.padding as u64,
            item.height as u64 + self.padding as u64,
        )
    }

    /// Best short side fit over all free regions: minimize the smaller
    /// leftover dimension. Strict `<` keeps the first qualifying region on
    /// tied scores.
    fn find_region(&self, w: u64, h: u64) -> Option<usize> {
        let mut best_idx = None;
        let mut best_score = u64::MAX;
        for (i, fr) in self.free.iter().enumerate() {
            if !fr.fits(w, h) {
                continue;
            }
            let score = (fr.width as u64 - w).min(fr.height as u64 - h);
            if score < best_score {
                best_score = score;
                best_idx = Some(i);
            }
        }
        best_idx
    }

    /// Attempts to place `item`, returning its recorded footprint on success
    /// or `None` when no free region can hold the padded footprint. The
    /// placement keeps the item's original dimensions; padding is only
    /// consumed from the free list.
    pub(crate) fn insert(&mut self, item: &PackItem) -> Option<Placement> {
        let (w, h) = self.footprint(item);
        let idx = self.find_region(w, h)?;
        let fr = self.free[idx];
        // The footprint fits inside a region, so it narrows back to u32.
        let used = FreeRegion::new(fr.x, fr.y, w as u32, h as u32);
        self.split_around(&used);
        self.prune();
        Some(Placement {
            x: used.x,
            y: used.y,
            width: item.width,
            height: item.height,
            item_id: item.id,
        })
    }

    /// Replaces every free region intersecting `used` with its residuals:
    /// above/below slivers spanning the full region width plus left/right
    /// strips limited to the overlap band. The rebuilt list is swapped in
    /// whole; the scan never mutates the list it walks.
    fn split_around(&mut self, used: &FreeRegion) {
        let mut new_free: Vec<FreeRegion> = Vec::new();
        for fr in self.free.iter() {
            if !fr.intersects(used) {
                new_free.push(*fr);
                continue;
            }
            let ix1 = fr.x.max(used.x);
            let iy1 = fr.y.max(used.y);
            let ix2 = fr.x2().min(used.x2());
            let iy2 = fr.y2().min(used.y2());

            // above
            if iy1 > fr.y {
                new_free.push(FreeRegion::new(fr.x, fr.y, fr.width, iy1 - fr.y));
            }
            // below
            if iy2 < fr.y2() {
                new_free.push(FreeRegion::new(fr.x, iy2, fr.width, fr.y2() - iy2));
            }
            let band = iy2.saturating_sub(iy1);
            // left
            if ix1 > fr.x && band > 0 {
                new_free.push(FreeRegion::new(fr.x, iy1, ix1 - fr.x, band));
            }
            // right
            if ix2 < fr.x2() && band > 0 {
                new_free.push(FreeRegion::new(ix2, iy1, fr.x2() - ix2, band));
            }
        }
        self.free = new_free;
    }

    /// Drops any free region fully contained in another remaining region.
    fn prune(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let a = self.free[i];
            let mut remove_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                let b = self.free[j];
                if b.contains(&a) {
                    remove_i = true;
                    break;
                }
                if a.contains(&b) {
                    self.free.remove(j);
                    continue;
                }
                j += 1;
            }
            if remove_i {
                self.free.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
