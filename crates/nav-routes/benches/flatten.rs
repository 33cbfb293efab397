//! Benchmarks for route flattening and neighbor lookup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nav_routes::{RouteNode, RouteResolver};

/// Create a route tree with specified depth and breadth.
fn create_route_tree(depth: usize, breadth: usize) -> Vec<RouteNode> {
    fn create_level(current_depth: usize, max_depth: usize, breadth: usize) -> Vec<RouteNode> {
        if current_depth > max_depth {
            return Vec::new();
        }

        (0..breadth)
            .map(|i| {
                let node = if i % 2 == 0 {
                    RouteNode::new(format!("Section {i}"), format!("/section-{i}"))
                } else {
                    RouteNode::group(format!("Group {i}"), format!("/group-{i}"))
                };
                node.with_items(create_level(current_depth + 1, max_depth, breadth))
            })
            .collect()
    }

    create_level(0, depth, breadth)
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for (depth, breadth) in [(2, 5), (3, 4), (4, 3)] {
        let resolver = RouteResolver::new(create_route_tree(depth, breadth));

        group.bench_with_input(
            BenchmarkId::new("tree", format!("d{depth}_b{breadth}")),
            &resolver,
            |b, resolver| b.iter(|| resolver.flatten()),
        );
    }

    group.finish();
}

fn bench_resolve_prev_next(c: &mut Criterion) {
    let resolver = RouteResolver::new(create_route_tree(3, 4));

    let mut group = c.benchmark_group("prev_next");

    group.bench_function("hit", |b| {
        b.iter(|| resolver.resolve_prev_next("/en/section-0/group-1/section-2"))
    });

    group.bench_function("miss", |b| {
        b.iter(|| resolver.resolve_prev_next("/en/nonexistent"))
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_resolve_prev_next);
criterion_main!(benches);
