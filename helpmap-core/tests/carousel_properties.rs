use helpmap_core::carousel::AUTO_ADVANCE_INTERVAL;
use helpmap_core::{CarouselController, Playback, VirtualScheduler};

const TEN_SECONDS: u64 = 10_000;

fn mount(slides: usize) -> CarouselController<VirtualScheduler> {
    CarouselController::mount(slides, VirtualScheduler::new())
}

fn assert_single_active_indicator(c: &CarouselController<VirtualScheduler>) {
    let active: Vec<usize> = c
        .indicators()
        .iter()
        .enumerate()
        .filter_map(|(idx, on)| on.then_some(idx))
        .collect();
    assert_eq!(active, vec![c.index()]);
}

#[test]
fn full_cycle_returns_to_zero_exactly_once() {
    for slides in 3..=14 {
        let mut c = mount(slides);
        let mut zeros = 0;
        for _ in 0..slides - 2 {
            c.next();
            assert_single_active_indicator(&c);
            if c.index() == 0 {
                zeros += 1;
            }
        }
        assert_eq!(zeros, 1, "slide count {slides}");
        assert_eq!(c.index(), 0);
    }
}

#[test]
fn wraparound_is_symmetric() {
    for slides in 3..=12 {
        let mut c = mount(slides);
        c.previous();
        assert_eq!(c.index(), slides - 3);
        c.next();
        assert_eq!(c.index(), 0);

        for start in slides - 3..slides {
            c.go_to(start);
            c.next();
            assert_eq!(c.index(), 0, "slides {slides}, start {start}");
        }
    }
}

#[test]
fn go_to_sets_index_and_single_indicator() {
    let mut c = mount(7);
    for k in 0..7 {
        c.go_to(k);
        assert_eq!(c.index(), k);
        assert_single_active_indicator(&c);
    }
}

#[test]
fn nine_slide_walkthrough() {
    let mut c = mount(9);
    assert_eq!(c.transform(), "translateX(0%)");
    for expected in 1..=4 {
        c.next();
        assert_eq!(c.index(), expected);
    }
    assert!((c.offset_percent() + 133.32).abs() < 1e-9);
    assert_eq!(c.transform(), "translateX(-133.32%)");
    c.next();
    c.next();
    assert_eq!(c.index(), 6);
    c.next();
    assert_eq!(c.index(), 0);
}

#[test]
fn ten_slides_wrap_from_seven() {
    let mut c = mount(10);
    c.go_to(7);
    c.next();
    assert_eq!(c.index(), 0);
    c.previous();
    assert_eq!(c.index(), 7);
}

#[test]
fn autoplay_advances_every_ten_seconds() {
    assert_eq!(AUTO_ADVANCE_INTERVAL.as_millis(), 10_000);
    let mut c = mount(9);
    assert_eq!(c.advance_time(TEN_SECONDS - 1), 0);
    assert_eq!(c.advance_time(1), 1);
    assert_eq!(c.index(), 1);
    assert_eq!(c.advance_time(3 * TEN_SECONDS), 3);
    assert_eq!(c.index(), 4);
}

#[test]
fn manual_actions_leave_exactly_one_timer() {
    let mut c = mount(9);
    assert_eq!(c.scheduler().active_count(), 1);
    c.press_next();
    assert_eq!(c.scheduler().active_count(), 1);
    c.press_previous();
    assert_eq!(c.scheduler().active_count(), 1);
    c.go_to(5);
    assert_eq!(c.scheduler().active_count(), 1);
    assert_eq!(c.scheduler().started_total(), 4);
    assert_eq!(c.scheduler().cancelled_total(), 3);
}

#[test]
fn manual_action_restarts_the_cadence() {
    let mut c = mount(9);
    c.advance_time(7_000);
    c.press_next();
    assert_eq!(c.index(), 1);
    // The old interval would have fired at 10s; the new one fires at 17s.
    assert_eq!(c.advance_time(9_999), 0);
    assert_eq!(c.advance_time(1), 1);
    assert_eq!(c.index(), 2);
}

#[test]
fn hover_pauses_until_leave() {
    let mut c = mount(9);
    c.advance_time(4_000);
    c.pointer_enter();
    assert_eq!(c.playback(), Playback::Paused);
    assert_eq!(c.scheduler().active_count(), 0);
    assert_eq!(c.advance_time(60_000), 0);
    assert_eq!(c.index(), 0);

    c.pointer_leave();
    assert_eq!(c.playback(), Playback::Playing);
    assert_eq!(c.scheduler().active_count(), 1);
    assert_eq!(c.advance_time(TEN_SECONDS - 1), 0);
    assert_eq!(c.advance_time(1), 1);
    assert_eq!(c.index(), 1);
}

#[test]
fn manual_navigation_while_hovered_resumes_playing() {
    let mut c = mount(9);
    c.pointer_enter();
    c.press_next();
    assert_eq!(c.playback(), Playback::Playing);
    assert_eq!(c.scheduler().active_count(), 1);
}

#[test]
fn repeated_leave_never_stacks_timers() {
    let mut c = mount(9);
    c.pointer_leave();
    c.pointer_leave();
    c.start();
    assert_eq!(c.scheduler().active_count(), 1);
}

#[test]
fn stop_and_start_lifecycle() {
    let mut c = mount(6);
    c.stop();
    assert_eq!(c.scheduler().active_count(), 0);
    assert_eq!(c.advance_time(50_000), 0);
    c.press_next();
    assert_eq!(c.index(), 1);
    c.stop();
    c.start();
    assert_eq!(c.advance_time(TEN_SECONDS), 1);
    assert_eq!(c.index(), 2);
}
