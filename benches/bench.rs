use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use persistent_bst::tree::Tree;

/// Zero-padded keys so the lexicographic key order matches the numeric
/// order.
fn key(n: usize) -> String {
    format!("{:05}", n)
}

/// Keys for a tree with `num_levels` full levels, ordered so that
/// inserting them one by one builds a balanced tree. The tree never
/// rebalances itself, so inserting `0..n` in order would build an `n`-deep
/// spine instead.
fn balanced_keys(num_levels: u32) -> Vec<String> {
    fn push_midpoints(lo: usize, hi: usize, keys: &mut Vec<String>) {
        if lo >= hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        keys.push(key(mid));
        push_midpoints(lo, mid, keys);
        push_midpoints(mid + 1, hi, keys);
    }

    let num_nodes = 2usize.pow(num_levels) - 1;
    let mut keys = Vec::with_capacity(num_nodes);
    push_midpoints(0, num_nodes, &mut keys);
    keys
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various sizes of trees before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<String>, usize)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let keys = balanced_keys(num_levels);
        let largest_element_in_tree = keys.len() - 1;
        let tree = keys.into_iter().fold(Tree::new(), |tree, k| tree.insert(k));

        let id = BenchmarkId::from_parameter(largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter(|| f(black_box(&tree), black_box(largest_element_in_tree)))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _hit = black_box(tree.contains(&key(i)));
    });
    bench_helper(c, "contains-miss", |tree, i| {
        let _hit = black_box(tree.contains(&key(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        let _bigger = black_box(tree.insert(key(i + 1)));
    });
    bench_helper(c, "insert-duplicate", |tree, i| {
        let _same = black_box(tree.insert(key(i)));
    });

    bench_helper(c, "size", |tree, _| {
        let _count = black_box(tree.size());
    });
    bench_helper(c, "render", |tree, _| {
        let _rendered = black_box(tree.to_string());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
