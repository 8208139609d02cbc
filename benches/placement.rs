use criterion::{Criterion, black_box, criterion_group, criterion_main};

use board_mvp::logging::{LogEvent, LogSink, Logger, LoggingResult};
use board_mvp::{GridLayout, LayoutEngine, PlacementConfig, Point, Size};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn contended_placements(c: &mut Criterion) {
    // Every widget asks for the same point, forcing the radial search on
    // all but the first placement.
    c.bench_function("contended_placements", |b| {
        b.iter(|| {
            let mut engine =
                LayoutEngine::new(PlacementConfig::default()).with_logger(Logger::new(NullSink));
            let preferred = Point::new(500.0, 500.0);
            let size = Size::new(200.0, 150.0);
            for i in 0..32 {
                engine
                    .place(format!("w{i}"), black_box(preferred), size, None)
                    .expect("free slot");
            }
        });
    });
}

fn grid_seeded_placements(c: &mut Criterion) {
    // Grid preferreds mostly land clear of each other, so this measures
    // the fast path plus the occasional displacement.
    c.bench_function("grid_seeded_placements", |b| {
        let grid = GridLayout::new(Point::new(0.0, 0.0), 8).with_spacing(220.0, 170.0);
        b.iter(|| {
            let mut engine = LayoutEngine::default();
            for (i, preferred) in grid.positions(64).into_iter().enumerate() {
                engine
                    .place(
                        format!("w{i}"),
                        black_box(preferred),
                        Size::new(200.0, 150.0),
                        None,
                    )
                    .expect("free slot");
            }
        });
    });
}

criterion_group!(benches, contended_placements, grid_seeded_placements);
criterion_main!(benches);
