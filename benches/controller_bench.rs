use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;
use turntable::*;

const FRAME: Duration = Duration::from_micros(16_667);

struct SinkNode;

impl RotationTarget for SinkNode {
    fn apply_orientation(&mut self, orientation: Orientation) {
        black_box(orientation.to_quat());
    }

    fn is_selected(&self) -> bool {
        true
    }
}

fn running_controller() -> DragRotationController<SinkNode> {
    let mut controller = DragRotationController::from_config(SinkNode, &SceneConfig::default());
    controller.on_resume();
    controller
}

fn bench_idle_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("idle_frames");
    for &frames in &[60usize, 600, 6000] {
        group.bench_with_input(BenchmarkId::new("advance", frames), &frames, |b, &frames| {
            b.iter(|| {
                let mut controller = running_controller();
                for _ in 0..frames {
                    controller.advance(black_box(FRAME));
                }
                controller.orientation()
            })
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    c.bench_function("drag_cycle_100_moves", |b| {
        let mut controller = running_controller();
        let mut gestures = DragGestureRecognizer::new();
        b.iter(|| {
            gestures.dispatch(&mut controller, GestureEvent::Started);
            for _ in 0..100 {
                gestures.dispatch(
                    &mut controller,
                    GestureEvent::Continued {
                        delta_x: black_box(1.5),
                    },
                );
            }
            gestures.dispatch(&mut controller, GestureEvent::Finished);
        })
    });
}

criterion_group!(benches, bench_idle_frames, bench_drag);
criterion_main!(benches);
