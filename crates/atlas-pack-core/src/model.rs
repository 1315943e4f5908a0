use serde::{Deserialize, Serialize};

/// One rectangle to pack. `id` is an opaque caller-owned identifier, unique
/// within a run; dimensions are final (any target/scale decision happened
/// upstream).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackItem {
    pub id: u64,
    pub width: u32,
    pub height: u32,
}

impl PackItem {
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
    /// Item area in square units.
    pub fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }
}

/// Final footprint of one item on one page. `x,y` is top-left;
/// `width`/`height` are the item's original dimensions. Padding is spacing
/// consumed during placement, never part of the stored footprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub item_id: u64,
}

impl Placement {
    /// Placed area in square units.
    pub fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }
}

/// A single atlas page (logical record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtlasPage {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
    /// Placed area as a share of page area, in percent (0.0 to 100.0).
    pub efficiency_percent: f64,
}

impl AtlasPage {
    /// Page area in square units.
    pub fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }
    /// Sum of placement areas on this page.
    pub fn used_area(&self) -> u64 {
        self.placements.iter().map(|p| p.area()).sum()
    }
}

/// Result of one pack run: the sealed pages plus the items that landed on
/// none of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackOutput {
    pub pages: Vec<AtlasPage>,
    /// Ids of items wider or taller than the page, excluded before any
    /// placement attempt.
    pub oversized: Vec<u64>,
    /// Ids of items abandoned when a full pass placed nothing.
    pub dropped: Vec<u64>,
}

impl PackOutput {
    /// Computes packing statistics for this run.
    pub fn stats(&self) -> PackStats {
        let num_pages = self.pages.len();
        let mut num_placements = 0;
        let mut total_page_area = 0u64;
        let mut used_area = 0u64;

        for page in &self.pages {
            total_page_area += page.area();
            num_placements += page.placements.len();
            used_area += page.used_area();
        }

        let occupancy = if total_page_area > 0 {
            used_area as f64 / total_page_area as f64
        } else {
            0.0
        };

        PackStats {
            num_pages,
            num_placements,
            total_page_area,
            used_area,
            occupancy,
        }
    }
}

/// Statistics about packing efficiency across a whole run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Total number of pages produced.
    pub num_pages: usize,
    /// Total number of placements across all pages.
    pub num_placements: usize,
    /// Total area of all pages (sum of width * height for each page).
    pub total_page_area: u64,
    /// Total area covered by placements.
    pub used_area: u64,
    /// Occupancy ratio: used_area / total_page_area (0.0 to 1.0).
    /// Higher is better (less wasted space).
    pub occupancy: f64,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Pages: {}, Placements: {}, Occupancy: {:.2}%, Total Area: {} px², Used Area: {} px²",
            self.num_pages,
            self.num_placements,
            self.occupancy * 100.0,
            self.total_page_area,
            self.used_area,
        )
    }

    /// Returns wasted space in square units.
    pub fn wasted_area(&self) -> u64 {
        self.total_page_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.total_page_area > 0 {
            (self.wasted_area() as f64 / self.total_page_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
