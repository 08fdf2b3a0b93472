#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::pedantic)]

use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};
use strmap::{
    ChainingMap, HashFunction, OpenAddressingMap, StringMap, hash_function_1, hash_function_2,
    std_hash,
};

// Number of random keys inserted into every map
const KEY_COUNT: usize = 5_000;
// Samples taken per run, evenly spaced over the inserts
const CHECKPOINTS: usize = 40;
const INITIAL_CAPACITY: usize = 11;

// Hash functions to compare
const HASHES: [(&str, HashFunction); 3] = [
    ("hash_function_1", hash_function_1),
    ("hash_function_2", hash_function_2),
    ("std_hash", std_hash),
];

struct Profile {
    name: String,
    loads: Vec<f64>,
    empty_ratios: Vec<f64>,
    capacities: Vec<usize>,
    missing: usize,
    empty_after_removal: usize,
}

// Alphanumeric keys of 4 to 11 characters
fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(4..12);
            (&mut rng).sample_iter(Alphanumeric).take(len).map(char::from).collect()
        })
        .collect()
}

fn profile(name: String, mut map: Box<dyn StringMap<usize>>, keys: &[String]) -> Profile {
    let step = (keys.len() / CHECKPOINTS).max(1);
    let mut loads = Vec::with_capacity(CHECKPOINTS);
    let mut empty_ratios = Vec::with_capacity(CHECKPOINTS);
    let mut capacities = Vec::with_capacity(CHECKPOINTS);

    for (i, key) in keys.iter().enumerate() {
        map.put(key.clone(), i);
        if (i + 1) % step == 0 {
            loads.push(map.table_load());
            empty_ratios.push(map.empty_buckets() as f64 / map.capacity() as f64);
            capacities.push(map.capacity());
        }
    }

    let missing = keys.iter().filter(|key| !map.contains_key(key)).count();

    // Tombstones count as empty for open addressing; chains only when they run dry
    for key in keys.iter().step_by(2) {
        map.remove(key);
    }
    let empty_after_removal = map.empty_buckets();

    Profile { name, loads, empty_ratios, capacities, missing, empty_after_removal }
}

fn draw_chart(
    path: &str,
    title: &str,
    y_desc: &str,
    profiles: &[Profile],
    series: impl Fn(&Profile) -> &[f64],
    step: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),
        RGBColor(50, 90, 220),
        RGBColor(50, 180, 50),
        RGBColor(180, 50, 180),
        RGBColor(230, 140, 20),
        RGBColor(20, 160, 170),
    ];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = profiles.iter().map(|p| series(p).len()).max().unwrap_or(1);
    let y_max = profiles
        .iter()
        .flat_map(|p| series(p).iter())
        .fold(0.0, |max: f64, &y| max.max(y)) *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| ((x + 1) * step).to_string())
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (index, profile) in profiles.iter().enumerate() {
        let color = &colors[index % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);
        let points: Vec<(usize, f64)> = series(profile).iter().copied().enumerate().collect();

        chart
            .draw_series(LineSeries::new(points.clone(), line_style))?
            .label(profile.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(points.into_iter().map(|point| Circle::new(point, 3, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let keys = random_keys(KEY_COUNT);
    let step = (KEY_COUNT / CHECKPOINTS).max(1);
    println!("Inserting {KEY_COUNT} random keys, sampling every {step} inserts");

    let mut profiles = Vec::new();
    for (hash_name, hash_function) in HASHES {
        let open: Box<dyn StringMap<usize>> =
            Box::new(OpenAddressingMap::new(INITIAL_CAPACITY, hash_function));
        profiles.push(profile(format!("open addressing / {hash_name}"), open, &keys));

        let chained: Box<dyn StringMap<usize>> =
            Box::new(ChainingMap::new(INITIAL_CAPACITY, hash_function));
        profiles.push(profile(format!("chaining / {hash_name}"), chained, &keys));
    }

    for profile in &profiles {
        let final_load = profile.loads.last().copied().unwrap_or(0.0);
        let final_capacity = profile.capacities.last().copied().unwrap_or(0);
        let resizes = profile.capacities.windows(2).filter(|w| w[0] != w[1]).count();
        println!(
            "  {}: capacity = {}, load = {:.2}, resizes seen = {}, missing = {}, empty after removing half = {}",
            profile.name,
            final_capacity,
            final_load,
            resizes,
            profile.missing,
            profile.empty_after_removal
        );
    }

    draw_chart(
        "table_load.png",
        "Load Factor While Inserting",
        "Load Factor",
        &profiles,
        |p| p.loads.as_slice(),
        step,
    )?;
    draw_chart(
        "empty_buckets.png",
        "Empty Bucket Ratio While Inserting",
        "Empty Buckets / Capacity",
        &profiles,
        |p| p.empty_ratios.as_slice(),
        step,
    )?;

    println!("Generated plot images: table_load.png, empty_buckets.png");

    Ok(())
}
