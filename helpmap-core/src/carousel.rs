//! News carousel state machine.
//!
//! Shows a fixed slide set three at a time, highlights one indicator per
//! slide and advances on a repeating timer. Pointer hover pauses the timer;
//! any manual navigation restarts it.

use std::time::Duration;

use crate::schedule::{Scheduler, VirtualScheduler};

/// Slides visible at once.
pub const VISIBLE_SLIDES: usize = 3;
/// Horizontal share of the track taken by one slide, in percent.
pub const SLIDE_STEP_PERCENT: f64 = 33.33;
/// Autoplay cadence.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(10);

/// Fixed carousel tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub visible_slides: usize,
    pub step_percent: f64,
    pub interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_slides: VISIBLE_SLIDES,
            step_percent: SLIDE_STEP_PERCENT,
            interval: AUTO_ADVANCE_INTERVAL,
        }
    }
}

/// Autoplay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

/// Render snapshot of a carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub index: usize,
    pub transform: String,
    pub indicators: Vec<bool>,
    pub playback: Playback,
}

impl CarouselView {
    /// View of a carousel that has not been mounted yet.
    #[must_use]
    pub fn resting(slide_count: usize) -> Self {
        let mut indicators = vec![false; slide_count];
        if let Some(first) = indicators.first_mut() {
            *first = true;
        }
        Self {
            index: 0,
            transform: translate_x(0.0),
            indicators,
            playback: Playback::Paused,
        }
    }
}

/// Owns slide position, indicator highlighting and the autoplay timer.
#[derive(Debug)]
pub struct CarouselController<S: Scheduler> {
    config: CarouselConfig,
    slide_count: usize,
    index: usize,
    offset_percent: f64,
    transform: String,
    indicators: Vec<bool>,
    playback: Playback,
    timer: Option<S::Handle>,
    scheduler: S,
}

impl<S: Scheduler> CarouselController<S> {
    /// Mount with the default configuration.
    #[must_use]
    pub fn mount(slide_count: usize, scheduler: S) -> Self {
        Self::mount_with_config(CarouselConfig::default(), slide_count, scheduler)
    }

    /// Build indicators, apply the initial transform and start autoplay.
    ///
    /// An empty slide set mounts as a no-op: no indicators, no timer.
    #[must_use]
    pub fn mount_with_config(config: CarouselConfig, slide_count: usize, scheduler: S) -> Self {
        let mut carousel = Self {
            config,
            slide_count,
            index: 0,
            offset_percent: 0.0,
            transform: translate_x(0.0),
            indicators: vec![false; slide_count],
            playback: Playback::Paused,
            timer: None,
            scheduler,
        };
        carousel.apply_transform();
        carousel.start_auto_advance();
        carousel
    }

    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn playback(&self) -> Playback {
        self.playback
    }

    #[must_use]
    pub const fn offset_percent(&self) -> f64 {
        self.offset_percent
    }

    /// CSS transform for the track, e.g. `translateX(-133.32%)`.
    #[must_use]
    pub fn transform(&self) -> &str {
        &self.transform
    }

    #[must_use]
    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    #[must_use]
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|active| *active)
    }

    #[must_use]
    pub const fn timer(&self) -> Option<S::Handle> {
        self.timer
    }

    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Index of the last group that wraps forward.
    ///
    /// When the slide count is not a multiple of the window the final group
    /// overlaps earlier slides; that is kept as is.
    #[must_use]
    pub const fn last_group_start(&self) -> usize {
        self.slide_count.saturating_sub(self.config.visible_slides)
    }

    #[must_use]
    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.index,
            transform: self.transform.clone(),
            indicators: self.indicators.clone(),
            playback: self.playback,
        }
    }

    /// Advance one slide, wrapping to the start from the last group.
    pub fn next(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.index = if self.index >= self.last_group_start() {
            0
        } else {
            self.index + 1
        };
        self.apply_transform();
    }

    /// Step back one slide, jumping to the last group from the start.
    pub fn previous(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.index = if self.index == 0 {
            self.last_group_start()
        } else {
            self.index - 1
        };
        self.apply_transform();
    }

    /// Jump straight to `index` (indicator click) and restart autoplay.
    ///
    /// Out-of-range indices clamp to the last slide.
    pub fn go_to(&mut self, index: usize) {
        if self.slide_count == 0 {
            return;
        }
        self.index = index.min(self.slide_count - 1);
        self.apply_transform();
        self.reset_auto_advance();
    }

    /// Next-button press: advance and restart autoplay.
    pub fn press_next(&mut self) {
        self.next();
        self.reset_auto_advance();
    }

    /// Previous-button press: step back and restart autoplay.
    pub fn press_previous(&mut self) {
        self.previous();
        self.reset_auto_advance();
    }

    /// Recompute the track offset and the active indicator.
    pub fn apply_transform(&mut self) {
        #[allow(clippy::cast_precision_loss)]
        let offset = 0.0 - self.index as f64 * self.config.step_percent;
        self.offset_percent = offset;
        self.transform = translate_x(offset);
        for (idx, active) in self.indicators.iter_mut().enumerate() {
            *active = idx == self.index;
        }
        log::debug!(
            "carousel moved to slide {} ({})",
            self.index,
            self.transform
        );
    }

    /// Book the autoplay interval if none is active.
    pub fn start_auto_advance(&mut self) {
        if self.slide_count == 0 || self.timer.is_some() {
            return;
        }
        self.timer = self.scheduler.start_interval(self.config.interval);
        if self.timer.is_some() {
            self.playback = Playback::Playing;
        } else {
            log::warn!("carousel autoplay could not be scheduled");
        }
    }

    /// Cancel the autoplay interval, if any.
    pub fn clear_auto_advance(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        self.playback = Playback::Paused;
    }

    /// Cancel then rebook autoplay so the cadence restarts now.
    pub fn reset_auto_advance(&mut self) {
        self.clear_auto_advance();
        self.start_auto_advance();
    }

    /// Pointer entered the carousel: pause without restarting.
    pub fn pointer_enter(&mut self) {
        self.clear_auto_advance();
    }

    /// Pointer left the carousel: resume on a fresh cadence.
    pub fn pointer_leave(&mut self) {
        self.reset_auto_advance();
    }

    /// Resume autoplay from a stopped or paused state.
    pub fn start(&mut self) {
        self.reset_auto_advance();
    }

    /// Stop autoplay. Navigation still works.
    pub fn stop(&mut self) {
        self.clear_auto_advance();
    }

    /// Deliver a fired interval. Stale handles are ignored.
    ///
    /// Returns whether the carousel advanced.
    pub fn tick(&mut self, handle: S::Handle) -> bool {
        if self.timer == Some(handle) {
            self.next();
            true
        } else {
            false
        }
    }
}

impl CarouselController<VirtualScheduler> {
    /// Run the virtual clock forward, delivering each autoplay fire.
    ///
    /// Returns the number of automatic advances.
    pub fn advance_time(&mut self, ms: u64) -> usize {
        let deadline = self.scheduler.now_ms() + ms;
        let mut advanced = 0;
        while let Some(id) = self.scheduler.pop_due(deadline) {
            if self.tick(id) {
                advanced += 1;
            }
        }
        self.scheduler.settle_at(deadline);
        advanced
    }
}

impl<S: Scheduler> Drop for CarouselController<S> {
    fn drop(&mut self) {
        self.clear_auto_advance();
    }
}

fn translate_x(offset_percent: f64) -> String {
    let fixed = format!("{offset_percent:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    format!("translateX({trimmed}%)")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::schedule::TimerId;

    fn carousel(slides: usize) -> CarouselController<VirtualScheduler> {
        CarouselController::mount(slides, VirtualScheduler::new())
    }

    #[test]
    fn mount_starts_at_zero_with_one_timer() {
        let c = carousel(9);
        assert_eq!(c.index(), 0);
        assert_eq!(c.transform(), "translateX(0%)");
        assert_eq!(c.active_indicator(), Some(0));
        assert_eq!(c.indicators().len(), 9);
        assert_eq!(c.scheduler().active_count(), 1);
        assert_eq!(c.playback(), Playback::Playing);
    }

    #[test]
    fn empty_mount_is_inert() {
        let mut c = carousel(0);
        assert!(c.indicators().is_empty());
        assert_eq!(c.scheduler().active_count(), 0);
        c.press_next();
        c.press_previous();
        c.go_to(3);
        c.pointer_leave();
        assert_eq!(c.index(), 0);
        assert_eq!(c.scheduler().active_count(), 0);
        assert_eq!(c.active_indicator(), None);
    }

    #[test]
    fn translate_formatting_trims_zeros() {
        assert_eq!(translate_x(0.0), "translateX(0%)");
        assert_eq!(translate_x(-0.0), "translateX(0%)");
        assert_eq!(translate_x(-33.33), "translateX(-33.33%)");
        assert_eq!(translate_x(-200.0), "translateX(-200%)");
        assert_eq!(translate_x(-66.6), "translateX(-66.6%)");
    }

    #[test]
    fn small_sets_never_leave_index_zero_through_buttons() {
        let mut c = carousel(2);
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 0);
        c.go_to(1);
        assert_eq!(c.index(), 1);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let mut c = carousel(5);
        c.go_to(42);
        assert_eq!(c.index(), 4);
        assert_eq!(c.active_indicator(), Some(4));
    }

    type Cancelled = Rc<RefCell<Vec<TimerId>>>;

    /// Scheduler whose cancel log outlives the controller that owns it.
    #[derive(Debug)]
    struct CancelLog {
        inner: VirtualScheduler,
        cancelled: Cancelled,
    }

    impl Scheduler for CancelLog {
        type Handle = TimerId;

        fn start_interval(&mut self, period: Duration) -> Option<Self::Handle> {
            self.inner.start_interval(period)
        }

        fn cancel(&mut self, handle: Self::Handle) {
            self.cancelled.borrow_mut().push(handle);
            self.inner.cancel(handle);
        }
    }

    #[test]
    fn dropping_the_controller_cancels_autoplay() {
        let cancelled = Cancelled::default();
        let scheduler = CancelLog {
            inner: VirtualScheduler::new(),
            cancelled: Rc::clone(&cancelled),
        };
        let c = CarouselController::mount(9, scheduler);
        let timer = c.timer().unwrap();
        assert!(cancelled.borrow().is_empty());
        drop(c);
        assert_eq!(*cancelled.borrow(), vec![timer]);
    }

    #[test]
    fn dropping_a_stopped_controller_cancels_nothing_more() {
        let cancelled = Cancelled::default();
        let scheduler = CancelLog {
            inner: VirtualScheduler::new(),
            cancelled: Rc::clone(&cancelled),
        };
        let mut c = CarouselController::mount(4, scheduler);
        c.stop();
        assert_eq!(cancelled.borrow().len(), 1);
        drop(c);
        assert_eq!(cancelled.borrow().len(), 1);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut c = carousel(6);
        let old = c.timer().unwrap();
        c.press_next();
        assert!(!c.tick(old));
        assert_eq!(c.index(), 1);
    }
}
