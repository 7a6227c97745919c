//! Answer-Search Examples
//!
//! This example demonstrates the three binary-search-on-answer components:
//! - Integer square root
//! - K-th smallest entry of an implicit multiplication table
//! - Maximum feasible piece size

use bisearch::prelude::*;

fn main() -> Result<(), BisearchError> {
    println!("{}", "=".repeat(70));
    println!("bisearch Answer-Search Examples");
    println!("{}", "=".repeat(70));
    println!();

    example_1_integer_square_root();
    example_2_table_ranks()?;
    example_3_piece_sizes()?;

    Ok(())
}

/// Example 1: Integer Square Root
/// Floor square roots without floating-point arithmetic.
fn example_1_integer_square_root() {
    println!("Example 1: Integer Square Root");
    println!("{}", "-".repeat(70));

    for x in [0u64, 8, 16, 1_000_000, u64::MAX] {
        println!("  int_sqrt({x}) = {}", int_sqrt(x));
    }
    println!();
}

/// Example 2: Multiplication Table Ranks
/// Rank queries without materializing the table.
fn example_2_table_ranks() -> Result<(), BisearchError> {
    println!("Example 2: Multiplication Table Ranks");
    println!("{}", "-".repeat(70));

    let table = MultiplicationTable::new(5, 3)?;
    println!("  Table: 5x3, {} entries", table.size());
    println!("  Entry at (4, 2): {}", table.value_at(4, 2)?);

    for k in [1, 8, 11, table.size()] {
        println!("  {k}-th smallest entry: {}", table.kth_smallest(k)?);
    }
    println!();

    Ok(())
}

/// Example 3: Piece Sizes
/// Largest piece size that still covers the head count.
fn example_3_piece_sizes() -> Result<(), BisearchError> {
    println!("Example 3: Piece Sizes");
    println!("{}", "-".repeat(70));

    let optimizer = PieceSizeOptimizer::from_text("10 10 10")?;
    println!(
        "  Lengths {:?}, total {}",
        optimizer.lengths(),
        optimizer.total_length()
    );

    for friends in [1u64, 3, 10, 31] {
        println!(
            "  Max piece size for {friends} friend(s): {}",
            optimizer.max_piece_size(friends)
        );
    }
    println!();

    Ok(())
}
