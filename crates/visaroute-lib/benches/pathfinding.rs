use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use visaroute_lib::{
    build_graph, plan_route, Criterion as RouteCriterion, Graph, RouteRecord, RouteRequest,
    VisaPolicy,
};

const GRID: usize = 40;

/// Square grid where every third flight needs a visa.
static GRID_GRAPH: Lazy<Graph> = Lazy::new(|| {
    let mut records = Vec::new();
    for row in 0..GRID {
        for col in 0..GRID {
            let here = format!("R{row}C{col}");
            let cost = ((row * 7 + col * 13) % 50 + 10) as f64;
            if col + 1 < GRID {
                let visa = (row + col) % 3 == 0;
                records.push(RouteRecord::new(&here, format!("R{row}C{}", col + 1), cost, visa));
            }
            if row + 1 < GRID {
                records.push(RouteRecord::new(&here, format!("R{}C{col}", row + 1), cost, false));
            }
        }
    }
    build_graph(&records).expect("grid builds")
});

fn request(has_visa: bool, criterion: RouteCriterion) -> RouteRequest {
    RouteRequest::new("R0C0", format!("R{}C{}", GRID - 1, GRID - 1), has_visa, criterion)
}

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRID_GRAPH;

    c.bench_function("cheapest_grid_with_visa", |b| {
        let request = request(true, RouteCriterion::Cost);
        b.iter(|| {
            let plan = plan_route(graph, &request, VisaPolicy::EdgeGated).expect("route exists");
            black_box(plan.total_cost())
        });
    });

    c.bench_function("cheapest_grid_without_visa", |b| {
        let request = request(false, RouteCriterion::Cost);
        b.iter(|| {
            let plan = plan_route(graph, &request, VisaPolicy::EdgeGated).expect("route exists");
            black_box(plan.total_cost())
        });
    });

    c.bench_function("fewest_hops_grid", |b| {
        let request = request(false, RouteCriterion::Hops);
        b.iter(|| {
            let plan = plan_route(graph, &request, VisaPolicy::EdgeGated).expect("route exists");
            black_box(plan.hop_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
