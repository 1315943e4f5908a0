use atlas_pack_core::{PackError, PackItem, pack};
use rand::{Rng, SeedableRng};
use std::time::Instant;

fn run(n: usize, page_size: u32, padding: u32, seed: u64) -> Result<(), PackError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let items: Vec<PackItem> = (0..n)
        .map(|i| {
            let w = rng.gen_range(4..=96);
            let h = rng.gen_range(4..=96);
            PackItem::new(i as u64, w, h)
        })
        .collect();

    let start = Instant::now();
    let out = pack(&items, page_size, padding)?;
    let elapsed = start.elapsed();

    let stats = out.stats();
    println!(
        "n={} pages={} occ={:.2}% oversized={} dropped={} time={}ms",
        n,
        stats.num_pages,
        stats.occupancy * 100.0,
        out.oversized.len(),
        out.dropped.len(),
        elapsed.as_millis()
    );
    for page in &out.pages {
        println!(
            "  page {}: {} placements, {:.2}% efficient",
            page.index,
            page.placements.len(),
            page.efficiency_percent
        );
    }
    Ok(())
}

fn main() -> Result<(), PackError> {
    println!("N=500");
    run(500, 1024, 2, 1337)?;
    println!("\nN=2000");
    run(2000, 1024, 2, 4242)?;
    Ok(())
}
