//! Sequence-Analysis Examples
//!
//! This example demonstrates the three sequence-analysis components:
//! - Wave rearrangement and its predicate
//! - First-occurrence value index
//! - Reorder-span detection over prioritized tasks

use bisearch::prelude::*;

fn main() -> Result<(), BisearchError> {
    println!("{}", "=".repeat(70));
    println!("bisearch Sequence-Analysis Examples");
    println!("{}", "=".repeat(70));
    println!();

    example_1_wave_transform()?;
    example_2_value_index();
    example_3_reorder_span();

    Ok(())
}

/// Example 1: Wave Transform
/// In-place rearrangement into the alternating low/high pattern.
fn example_1_wave_transform() -> Result<(), BisearchError> {
    println!("Example 1: Wave Transform");
    println!("{}", "-".repeat(70));

    let mut data = vec![6.0, 2.0, 3.0, 8.0, 11.0, 2.0];
    println!("  Input:  {data:?}");
    transform_to_wave(&mut data)?;
    println!("  Output: {data:?} (wave: {})", is_wave_pattern(&data));

    let mut constant = vec![7.0, 7.0, 7.0];
    match transform_to_wave(&mut constant) {
        Ok(()) => unreachable!("constant data cannot alternate"),
        Err(e) => println!("  Constant input: {e}"),
    }
    println!();

    Ok(())
}

/// Example 2: Value Index
/// First-occurrence lookups over unsorted data.
fn example_2_value_index() {
    println!("Example 2: Value Index");
    println!("{}", "-".repeat(70));

    let mut index = ValueIndex::new(vec![7, 3, 1, 3, 5]);
    println!("  Data: {:?}", index.data());
    for probe in [3, 7, 6] {
        match index.get(&probe) {
            Some(position) => println!("  {probe} first occurs at {position}"),
            None => println!("  {probe} is absent"),
        }
    }

    index.replace_data(vec![6, 6, 1]);
    println!("  After replacement, 6 first occurs at {:?}", index.get(&6));
    println!();
}

/// Example 3: Reorder Span
/// Minimal subrange whose reordering restores monotonic priorities.
fn example_3_reorder_span() {
    println!("Example 3: Reorder Span");
    println!("{}", "-".repeat(70));

    let tasks = vec![
        Task::new("ingest", 1),
        Task::new("parse", 2),
        Task::new("index", 4),
        Task::new("rank", 3),
        Task::new("serve", 5),
    ];
    for task in &tasks {
        println!("  {task}");
    }

    match reorder_span(&tasks) {
        Some((start, end)) => println!("  Reorder tasks {start}..={end} to restore order"),
        None => println!("  Already ordered"),
    }
    println!();
}
