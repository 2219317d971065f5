//! Performance benchmarks for to-do list rendering
//!
//! Tests frame render time for different list sizes.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use todos_tui::app::App;
use todos_tui::store::Intent;
use todos_tui::ui;

/// Build an app with `items` todos, every third one done.
fn build_app(items: usize) -> App {
    let mut app = App::new();
    for i in 0..items {
        app.store.dispatch(Intent::AddTodo {
            title: format!("item number {i}"),
        });
        if i % 3 == 0 {
            let id = app.todos().last().unwrap().id;
            app.store.dispatch(Intent::ToggleTodo { id });
        }
    }
    app
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for size in [10, 100, 1000].iter() {
        let app = build_app(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_items", size)),
            &app,
            |b, app| {
                let backend = TestBackend::new(80, 24);
                let mut terminal = Terminal::new(backend).unwrap();
                b.iter(|| {
                    terminal
                        .draw(|frame| ui::render(frame, black_box(app)))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
