//! deck — walk-through of the rust_gravnav navigation engine.
//!
//! Loads an optional JSON `NavConfig` (first argument), builds a small
//! two-level deck, and prints level statistics, a few routes, and the jump
//! arcs available from the start.  Set `RUST_LOG=debug` to see per-search
//! summaries.

mod level;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use gn_nav::{
    Goal, Gravity, MoveKind, NavConfig, NavEngine, ReachCache, describe_outcome,
};

use level::{START, build_deck};

// ── Routes ────────────────────────────────────────────────────────────────────

const ROUTES: [(&str, Goal); 4] = [
    ("across the mezzanine gap", Goal { x: 18, y: 6, gravity: Some(Gravity::Down) }),
    ("up to the catwalk",        Goal { x: 11, y: 4, gravity: None }),
    ("down to the doorway",      Goal { x: 17, y: 9, gravity: None }),
    ("onto the ceiling",         Goal { x: 3,  y: 1, gravity: Some(Gravity::Up) }),
];

fn load_config(path: &Path) -> Result<NavConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: NavConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None       => NavConfig::default(),
    };
    info!("{} jump variants, {} max steps", config.jumps.len(), config.max_jump_steps);

    println!("=== deck — rust_gravnav ===");
    println!();

    // 1. Grid and engine.
    let grid   = build_deck()?;
    let engine = NavEngine::new(config)?;
    println!("Deck: {}x{} cells, start {START}", grid.width(), grid.height());

    // 2. Level statistics.
    let t0    = Instant::now();
    let stats = engine.navigation_stats(&grid)?;
    println!("Stats computed in {:.3} s", t0.elapsed().as_secs_f64());
    println!("  open cells        : {}", stats.open_cells);
    println!("  standable cells   : {}", stats.standable_cells);
    println!(
        "  states            : {} (down {}, up {}, left {}, right {})",
        stats.total_states,
        stats.by_gravity.down,
        stats.by_gravity.up,
        stats.by_gravity.left,
        stats.by_gravity.right
    );
    println!("  reachable         : {:.1}%", stats.reachable_fraction * 100.0);
    println!(
        "  sampled starts    : {} (mean {:.1}%, {} isolated)",
        stats.sampled_starts,
        stats.mean_sample_fraction * 100.0,
        stats.isolated_states
    );
    println!();

    // 3. Routes.
    for (label, goal) in &ROUTES {
        let path = engine.find_path(&grid, START, goal)?;
        let cost = path.as_ref().map_or_else(|| "-".to_string(), |p| p.total_cost().to_string());
        println!("Route {label} -> ({}, {})  [cost {cost}]", goal.x, goal.y);
        for line in describe_outcome(path.as_ref()).lines() {
            println!("    {line}");
        }
    }
    println!();

    // 4. Jump arcs from the start.
    let arcs = engine.jump_trajectories(&grid, START)?;
    println!("{:<8} {:<6} {:<22} {:<6}", "Variant", "Side", "Landing", "Steps");
    println!("{}", "-".repeat(44));
    for m in &arcs {
        if let MoveKind::Jump(launch) = m.kind {
            println!(
                "{:<8} {:<6} {:<22} {:<6}",
                launch.spec,
                launch.direction,
                m.to.to_string(),
                m.trajectory.len() - 1
            );
        }
    }
    println!();

    // 5. Closest reachable spot to a point inside the hull, and a cached
    //    exploration reused across queries.
    let closest = engine.closest_reachable(&grid, START, 19, 0)?;
    if let (Some(cell), Some(d)) = (&closest.cell, closest.distance) {
        println!("Closest reachable to (19, 0): {} at distance {d:.2}, cost {}", cell.state, cell.cost);
    }

    let mut cache = ReachCache::new();
    for _ in 0..3 {
        engine.reachable_cached(&mut cache, &grid, START)?;
    }
    info!("reach cache: {} hits, {} misses", cache.hits(), cache.misses());

    Ok(())
}
