use crate::error::{PackError, Result};
use crate::model::{AtlasPage, PackItem, PackOutput, Placement};
use crate::packer::PagePacker;
use std::collections::HashSet;
use tracing::instrument;

#[instrument(skip_all)]
/// Packs `items` onto as many square pages of side `page_size` as needed and
/// returns the page layouts plus the ids that landed nowhere.
///
/// Notes:
/// - Items are placed in descending-height order; the sort is stable, so
///   equal heights keep input order and results are deterministic.
/// - `padding` is trailing spacing consumed during placement; recorded
///   placements keep the item's original dimensions.
/// - Items wider or taller than the page are excluded up front and reported
///   in [`PackOutput::oversized`]; they are not an error.
/// - A pass that places nothing while items remain stops the run and reports
///   the leftovers in [`PackOutput::dropped`]; partial results are still
///   returned.
pub fn pack(items: &[PackItem], page_size: u32, padding: u32) -> Result<PackOutput> {
    validate(items, page_size)?;

    // Exclusion is decided on raw dimensions; padding only matters once
    // placement starts.
    let mut oversized: Vec<u64> = Vec::new();
    let mut eligible: Vec<PackItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.width > page_size || item.height > page_size {
            oversized.push(item.id);
        } else {
            eligible.push(*item);
        }
    }

    // Sorted once; carry-over preserves relative order, so every page pass
    // sees the same descending-height order.
    eligible.sort_by(|a, b| b.height.cmp(&a.height));

    let mut pages: Vec<AtlasPage> = Vec::new();
    let mut remaining: Vec<usize> = (0..eligible.len()).collect();

    while !remaining.is_empty() {
        let mut packer = PagePacker::new(page_size, padding);
        let mut placements: Vec<Placement> = Vec::new();
        let mut remove_set: HashSet<usize> = HashSet::new();

        // One attempt per item per page; failures carry over to the next
        // page in unchanged order.
        for &idx in &remaining {
            if let Some(p) = packer.insert(&eligible[idx]) {
                placements.push(p);
                remove_set.insert(idx);
            }
        }

        if placements.is_empty() {
            // A full pass placed nothing, so no later page (always starting
            // empty) could do better. Stop and report the leftovers.
            let dropped: Vec<u64> = remaining.iter().map(|&i| eligible[i].id).collect();
            return Ok(PackOutput {
                pages,
                oversized,
                dropped,
            });
        }

        remaining.retain(|i| !remove_set.contains(i));
        pages.push(seal_page(pages.len(), page_size, placements));
    }

    Ok(PackOutput {
        pages,
        oversized,
        dropped: Vec::new(),
    })
}

fn validate(items: &[PackItem], page_size: u32) -> Result<()> {
    if page_size == 0 {
        return Err(PackError::InvalidPageSize(page_size));
    }
    for item in items {
        if item.width == 0 || item.height == 0 {
            return Err(PackError::InvalidItem {
                id: item.id,
                width: item.width,
                height: item.height,
            });
        }
    }
    Ok(())
}

/// Seals a finished page. Efficiency is computed once from the final
/// placement list, never incrementally.
fn seal_page(index: usize, page_size: u32, placements: Vec<Placement>) -> AtlasPage {
    let page_area = (page_size as u64) * (page_size as u64);
    let used: u64 = placements.iter().map(|p| p.area()).sum();
    let efficiency_percent = if page_area > 0 {
        (used as f64 / page_area as f64) * 100.0
    } else {
        0.0
    };
    AtlasPage {
        index,
        width: page_size,
        height: page_size,
        placements,
        efficiency_percent,
    }
}
