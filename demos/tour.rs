//! A quick tour of the container: builds trees of a few element types,
//! prints every traversal and shape query, deletes a value, and shows the
//! sequence facade refusing positional access.
//!
//! Run with `cargo run --example tour`.

use std::fmt::Display;

use ordered_tree::seq::TreeSequence;
use ordered_tree::tree::OrderedTree;

fn join<E: Display>(values: &[&E]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn show_tree<E: Display>(tree: &OrderedTree<E>) {
    println!("In-Order Traversal (Sorted): {}", join(&tree.in_order()));
    println!("Pre-Order Traversal: {}", join(&tree.pre_order()));
    println!("Post-Order Traversal: {}", join(&tree.post_order()));
    println!("Level-Order Traversal: {}", join(&tree.level_order()));
    if let (Some(min), Some(max)) = (tree.min(), tree.max()) {
        println!("Min Value: {min}");
        println!("Max Value: {max}");
    }
    println!("Tree Height: {}", tree.height());
    println!("Is Balanced: {}", tree.is_balanced());
}

fn main() {
    println!("=== Integer values ===");
    let mut ints = OrderedTree::new();
    ints.extend([50, 30, 70, 20, 40, 60, 80]);
    show_tree(&ints);
    ints.delete(&30);
    println!(
        "After removing 30 (In-Order Traversal): {}",
        join(&ints.in_order())
    );
    println!();

    println!("=== String values ===");
    let mut words = OrderedTree::new();
    words.extend(["banana", "apple", "cherry", "date", "fig", "grape"]);
    show_tree(&words);
    words.delete(&"apple");
    println!(
        "After removing 'apple' (In-Order Traversal): {}",
        join(&words.in_order())
    );
    println!();

    println!("=== Character values ===");
    let mut chars = OrderedTree::new();
    chars.extend(['m', 'c', 't', 'a', 'f', 'p', 'z']);
    show_tree(&chars);
    chars.delete(&'c');
    println!(
        "After removing 'c' (In-Order Traversal): {}",
        join(&chars.in_order())
    );
    println!();

    println!("=== Sequence facade ===");
    let mut seq = TreeSequence::from(ints);
    println!("Contents: {}", join(&seq.to_vec()));
    println!("Contains 40: {}", seq.contains(&40));
    seq.add_all([10, 90]);
    println!("After adding 10 and 90: {}", join(&seq.to_vec()));
    if let Err(err) = seq.get(0) {
        println!("get(0): {err}");
    }
    if let Err(err) = seq.remove_at(2) {
        println!("remove_at(2): {err}");
    }
}
