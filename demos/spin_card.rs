use std::sync::Arc;
use std::thread;
use std::time::Duration;
use turntable::*;

fn main() {
    let host = HeadlessHost::new();
    let recorder = host.recorder();
    let mut view = CardView::new(host, Arc::new(HeadlessLoader::new()), SceneConfig::default());
    view.on_attached();

    let frame = Duration::from_millis(16);
    for i in 0..240 {
        // The light probe shows up a little after start.
        if i == 10 {
            view.host().set_light_probe_ready(true);
        }
        if i == 120 {
            view.handle_gesture(GestureEvent::Started);
        }
        if (121..150).contains(&i) {
            view.handle_gesture(GestureEvent::Continued { delta_x: 4.0 });
        }
        if i == 150 {
            view.handle_gesture(GestureEvent::Finished);
        }

        view.update(frame);
        thread::sleep(frame);
    }

    let record = recorder.snapshot();
    println!(
        "Probe samples: {}, placements: {}, orientation writes: {}",
        record.probe_samples,
        record.placements.len(),
        record.orientations.len()
    );
    if let Some(controller) = view.controller() {
        println!(
            "Final yaw: {:.2}° ({:?})",
            controller.orientation().degrees(),
            controller.mode()
        );
    }
}
