use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use n2_overlay::config::LegendConfig;
use n2_overlay::layout::legend::compose_layout;
use n2_overlay::layout::{draw_connector, route};
use n2_overlay::surface::Surface;
use n2_overlay::theme::{SolverStyleTable, Theme};
use n2_overlay::{CellSize, ConnectorSpec, GridPoint};
use std::hint::black_box;

fn connector_fan(count: usize) -> Vec<ConnectorSpec> {
    (0..count)
        .map(|i| ConnectorSpec {
            start: GridPoint {
                row: (i % 40) as i32,
                col: (i % 7) as i32,
            },
            end: GridPoint {
                row: ((i * 3) % 40) as i32,
                col: ((i * 5) % 40) as i32,
            },
            color: "#30B0AD".to_string(),
            stroke_width: 2.0,
            marker_size: None,
        })
        .collect()
}

fn bench_route(c: &mut Criterion) {
    let cell = CellSize {
        width: 20.0,
        height: 20.0,
    };
    let mut group = c.benchmark_group("route");
    for count in [16usize, 256, 2048] {
        let specs = connector_fan(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &specs, |b, specs| {
            b.iter(|| {
                for spec in specs {
                    black_box(route(spec, cell));
                }
            })
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let cell = CellSize {
        width: 20.0,
        height: 20.0,
    };
    let specs = connector_fan(256);
    c.bench_function("draw_256", |b| {
        b.iter(|| {
            let mut surface = Surface::new(800.0, 800.0);
            for spec in &specs {
                let path = route(spec, cell);
                draw_connector(&path, spec, &mut surface);
            }
            black_box(surface.to_svg())
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let theme = Theme::classic();
    let solvers = SolverStyleTable::builtin();
    let cfg = LegendConfig::default();
    c.bench_function("compose_layout", |b| {
        b.iter(|| black_box(compose_layout(&theme, &solvers, false, &cfg)))
    });
}

criterion_group!(benches, bench_route, bench_draw, bench_compose);
criterion_main!(benches);
