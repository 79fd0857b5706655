use columnist::ui::core::EventHandler;
use std::time::Duration;

#[test]
fn test_should_render_after_frame_interval() {
    let mut handler = EventHandler::new();
    handler.mark_rendered();
    assert!(handler.time_since_last_render() < Duration::from_secs(1));

    std::thread::sleep(Duration::from_millis(20));
    assert!(handler.should_render());
}
