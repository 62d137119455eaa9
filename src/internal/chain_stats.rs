#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use plotters::prelude::*;
use rand::Rng;

// Number of buckets in the simulated table
const TABLE_SIZE: usize = 100_000;
// Load factors from 0.1 to 0.95 with 10 steps
const NUM_LOAD_FACTORS: usize = 10;
// Key space for random key generation
const KEY_SPACE: usize = 1_000_000_000;

/// Simple modular hash, enough for uniformly random integer keys.
fn hash_function(key: usize, size: usize) -> usize {
    key % size
}

/// Statistics gathered from one chained table at a given load factor.
#[derive(Debug, Clone, Copy)]
struct ChainStats {
    avg_chain_length: f64,
    max_chain_length: usize,
    occupied_fraction: f64,
}

/// Builds a chained table of `TABLE_SIZE` buckets from `keys` and measures
/// its chain-length distribution.
fn measure_chaining(keys: &[usize]) -> ChainStats {
    let mut table: Vec<Vec<usize>> = vec![Vec::new(); TABLE_SIZE];

    for &key in keys {
        let index = hash_function(key, TABLE_SIZE);
        table[index].push(key);
    }

    let occupied: Vec<&Vec<usize>> = table.iter().filter(|chain| !chain.is_empty()).collect();
    let occupied_count = occupied.len();
    let total_entries: usize = occupied.iter().map(|chain| chain.len()).sum();
    let max_chain_length = occupied.iter().map(|chain| chain.len()).max().unwrap_or(0);

    let avg_chain_length = if occupied_count == 0 {
        0.0
    } else {
        total_entries as f64 / occupied_count as f64
    };

    ChainStats {
        avg_chain_length,
        max_chain_length,
        occupied_fraction: occupied_count as f64 / TABLE_SIZE as f64,
    }
}

/// Expected fraction of occupied buckets under uniform hashing: 1 - e^(-lf).
fn expected_occupancy(load_factor: f64) -> f64 {
    1.0 - (-load_factor).exp()
}

/// Expected chain length among occupied buckets: lf / (1 - e^(-lf)).
fn expected_chain_length(load_factor: f64) -> f64 {
    let occupancy = expected_occupancy(load_factor);
    if occupancy == 0.0 {
        0.0
    } else {
        load_factor / occupancy
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 0.95
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Generate random keys once so every load factor sees the same prefix
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap_or(&0);
    let keys: Vec<usize> = (0..max_keys_needed).map(|_| rng.random_range(1..KEY_SPACE)).collect();

    let mut results: Vec<ChainStats> = Vec::with_capacity(num_keys.len());
    for (&load, &n_keys) in load_factors.iter().zip(num_keys.iter()) {
        let stats = measure_chaining(&keys[..n_keys]);
        println!(
            "lf = {:.2}: avg chain = {:.3} (expected {:.3}), max chain = {}, occupancy = {:.3} (expected {:.3})",
            load,
            stats.avg_chain_length,
            expected_chain_length(load),
            stats.max_chain_length,
            stats.occupied_fraction,
            expected_occupancy(load)
        );
        results.push(stats);
    }

    let font_family = "sans-serif";
    let line_width = 2;
    let text_size = 16;
    let title_size = 30;
    let measured_style = ShapeStyle::from(&RGBColor(220, 50, 50)).stroke_width(line_width);
    let expected_style = ShapeStyle::from(&RGBColor(50, 90, 220)).stroke_width(line_width);
    let max_style = ShapeStyle::from(&RGBColor(50, 180, 50)).stroke_width(line_width);

    // Plot 1: chain lengths against load factor
    let root = BitMapBackend::new("chain_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_chain =
        results.iter().map(|stats| stats.max_chain_length).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length Under Separate Chaining", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0f64, 0.0..max_chain)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Chain Length (entries)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            load_factors.iter().zip(results.iter()).map(|(&lf, s)| (lf, s.avg_chain_length)),
            measured_style,
        ))?
        .label("Average (measured)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], measured_style));

    chart
        .draw_series(LineSeries::new(
            load_factors.iter().map(|&lf| (lf, expected_chain_length(lf))),
            expected_style,
        ))?
        .label("Average (theoretical)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], expected_style));

    chart
        .draw_series(LineSeries::new(
            load_factors
                .iter()
                .zip(results.iter())
                .map(|(&lf, s)| (lf, s.max_chain_length as f64)),
            max_style,
        ))?
        .label("Longest chain")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], max_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((font_family, text_size))
        .draw()?;

    root.present()?;
    println!("Saved chain_length.png");

    // Plot 2: bucket occupancy against load factor
    let root = BitMapBackend::new("bucket_occupancy.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bucket Occupancy Under Separate Chaining", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0f64, 0.0..1.0f64)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Fraction of Occupied Buckets")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            load_factors.iter().zip(results.iter()).map(|(&lf, s)| (lf, s.occupied_fraction)),
            measured_style,
        ))?
        .label("Measured")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], measured_style));

    chart
        .draw_series(LineSeries::new(
            load_factors.iter().map(|&lf| (lf, expected_occupancy(lf))),
            expected_style,
        ))?
        .label("Theoretical (1 - e^-lf)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], expected_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((font_family, text_size))
        .draw()?;

    root.present()?;
    println!("Saved bucket_occupancy.png");

    Ok(())
}
