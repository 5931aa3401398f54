//! Behaviour checks run against the core crate with a virtual clock.

use std::time::{Duration, Instant};

use anyhow::{Result, ensure};
use helpmap_core::session::{ROLE_KEY, USER_ID_KEY, USERNAME_KEY};
use helpmap_core::{
    CarouselController, CounterAnimation, MemoryStore, Playback, ThemeMode, ToastKind, ToastQueue,
    UserRole, UserSession, VirtualScheduler,
};

use crate::reports::ScenarioResult;

const TEN_SECONDS: u64 = 10_000;

/// One named check. Carousel checks run once per slide count; the others
/// ignore it and run once.
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub per_slide_count: bool,
    pub check: fn(usize) -> Result<()>,
}

pub static CATALOG: [Scenario; 8] = [
    Scenario {
        name: "carousel-cycle",
        description: "Next/previous wrap and a full cycle returns to the start once",
        per_slide_count: true,
        check: carousel_cycle,
    },
    Scenario {
        name: "carousel-autoplay",
        description: "Autoplay advances every 10 s with exactly one timer",
        per_slide_count: true,
        check: carousel_autoplay,
    },
    Scenario {
        name: "carousel-manual",
        description: "Manual navigation restarts the cadence and never stacks timers",
        per_slide_count: true,
        check: carousel_manual,
    },
    Scenario {
        name: "carousel-hover",
        description: "Hover pauses autoplay; leaving resumes on a fresh cadence",
        per_slide_count: true,
        check: carousel_hover,
    },
    Scenario {
        name: "counter",
        description: "Stat counters land exactly on their targets after 200 frames",
        per_slide_count: false,
        check: counter,
    },
    Scenario {
        name: "theme",
        description: "Theme toggles persist under the `mode` key",
        per_slide_count: false,
        check: theme,
    },
    Scenario {
        name: "session",
        description: "Sessions round-trip through storage and pick the hero CTA",
        per_slide_count: false,
        check: session,
    },
    Scenario {
        name: "toasts",
        description: "Toasts queue with ids, styles and dismissal",
        per_slide_count: false,
        check: toasts,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.name, s.description))
}

pub fn get_scenario(name: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|s| s.name == name)
}

/// Resolve `--scenarios`; `all` expands to the whole catalog.
pub fn expand_scenarios(names: &[String]) -> Vec<String> {
    if names.iter().any(|n| n == "all") {
        CATALOG.iter().map(|s| s.name.to_string()).collect()
    } else {
        names.to_vec()
    }
}

pub fn run_scenario(scenario: &Scenario, slide_counts: &[usize], verbose: bool) -> ScenarioResult {
    let inputs: Vec<usize> = if scenario.per_slide_count {
        slide_counts.to_vec()
    } else {
        vec![0]
    };
    let mut failures = Vec::new();
    let mut performance_data = Vec::with_capacity(inputs.len());
    for slides in &inputs {
        let started = Instant::now();
        let outcome = (scenario.check)(*slides);
        performance_data.push(started.elapsed());
        match outcome {
            Ok(()) => {
                if verbose {
                    log::info!("{} passed ({slides} slides)", scenario.name);
                }
            }
            Err(err) => {
                let failure = if scenario.per_slide_count {
                    format!("{slides} slides: {err:#}")
                } else {
                    format!("{err:#}")
                };
                log::warn!("{} failed: {failure}", scenario.name);
                failures.push(failure);
            }
        }
    }
    let total: Duration = performance_data.iter().sum();
    let runs = u32::try_from(performance_data.len().max(1)).unwrap_or(u32::MAX);
    ScenarioResult {
        scenario_name: scenario.name.to_string(),
        passed: failures.is_empty(),
        iterations_run: inputs.len(),
        successful_iterations: inputs.len() - failures.len(),
        failures,
        average_duration: total / runs,
        performance_data,
    }
}

fn mount(slides: usize) -> CarouselController<VirtualScheduler> {
    CarouselController::mount(slides, VirtualScheduler::new())
}

fn check_indicators(c: &CarouselController<VirtualScheduler>) -> Result<()> {
    let active = c.indicators().iter().filter(|on| **on).count();
    if c.slide_count() == 0 {
        ensure!(active == 0, "empty carousel has {active} active indicators");
    } else {
        ensure!(active == 1, "{active} active indicators");
        ensure!(
            c.active_indicator() == Some(c.index()),
            "indicator {:?} does not match index {}",
            c.active_indicator(),
            c.index()
        );
    }
    Ok(())
}

fn carousel_cycle(slides: usize) -> Result<()> {
    let mut c = mount(slides);
    check_indicators(&c)?;
    if slides < 3 {
        c.next();
        ensure!(c.index() == 0, "small carousel left index 0");
        return Ok(());
    }
    let mut zeros = 0;
    for _ in 0..slides - 2 {
        c.next();
        check_indicators(&c)?;
        if c.index() == 0 {
            zeros += 1;
        }
    }
    ensure!(zeros == 1, "returned to 0 {zeros} times in one cycle");
    c.previous();
    ensure!(
        c.index() == slides - 3,
        "previous from 0 went to {} instead of {}",
        c.index(),
        slides - 3
    );
    c.next();
    ensure!(c.index() == 0, "next from the last group went to {}", c.index());
    Ok(())
}

fn carousel_autoplay(slides: usize) -> Result<()> {
    let mut c = mount(slides);
    if slides == 0 {
        ensure!(c.scheduler().active_count() == 0, "empty carousel booked a timer");
        return Ok(());
    }
    ensure!(
        c.scheduler().active_count() == 1,
        "mount booked {} timers",
        c.scheduler().active_count()
    );
    let mut expected = mount(slides);
    for step in 1..=slides * 2 {
        ensure!(c.advance_time(TEN_SECONDS - 1) == 0, "advanced early at step {step}");
        ensure!(c.advance_time(1) == 1, "missed the 10 s tick at step {step}");
        expected.next();
        ensure!(
            c.index() == expected.index(),
            "autoplay at {} while next() gives {}",
            c.index(),
            expected.index()
        );
        check_indicators(&c)?;
    }
    ensure!(c.scheduler().active_count() == 1, "autoplay stacked timers");
    Ok(())
}

fn carousel_manual(slides: usize) -> Result<()> {
    if slides == 0 {
        return Ok(());
    }
    let mut c = mount(slides);
    c.advance_time(TEN_SECONDS / 2);
    c.press_next();
    ensure!(
        c.scheduler().active_count() == 1,
        "press_next left {} timers",
        c.scheduler().active_count()
    );
    let after_press = c.index();
    ensure!(
        c.advance_time(TEN_SECONDS / 2) == 0,
        "old cadence survived a manual press"
    );
    ensure!(c.index() == after_press, "index moved without a tick");
    ensure!(c.advance_time(TEN_SECONDS / 2) == 1, "new cadence did not fire");

    c.press_previous();
    c.go_to(slides - 1);
    ensure!(c.index() == slides - 1, "go_to landed on {}", c.index());
    check_indicators(&c)?;
    ensure!(c.scheduler().active_count() == 1, "manual actions stacked timers");
    ensure!(c.playback() == Playback::Playing, "manual navigation paused autoplay");
    Ok(())
}

fn carousel_hover(slides: usize) -> Result<()> {
    if slides == 0 {
        return Ok(());
    }
    let mut c = mount(slides);
    c.pointer_enter();
    ensure!(c.playback() == Playback::Paused, "hover did not pause");
    ensure!(c.advance_time(TEN_SECONDS * 5) == 0, "advanced while hovered");
    c.pointer_leave();
    c.pointer_leave();
    ensure!(c.scheduler().active_count() == 1, "repeated leave stacked timers");
    ensure!(c.advance_time(TEN_SECONDS - 1) == 0, "resumed early");
    ensure!(c.advance_time(1) == 1, "did not resume 10 s after leaving");
    Ok(())
}

fn counter(_: usize) -> Result<()> {
    for target in [0_u64, 1, 18, 97, 1250, 3400] {
        let frames: Vec<u64> = CounterAnimation::new(target).collect();
        ensure!(
            frames.last() == Some(&target),
            "counter for {target} ended at {:?}",
            frames.last()
        );
        ensure!(
            frames.windows(2).all(|pair| pair[0] <= pair[1]),
            "counter for {target} went backwards"
        );
        ensure!(frames.len() <= 201, "counter for {target} ran {} frames", frames.len());
    }
    Ok(())
}

fn theme(_: usize) -> Result<()> {
    let mut store = MemoryStore::new();
    ensure!(ThemeMode::load(&store) == ThemeMode::Light, "fresh store is not light");
    ensure!(ThemeMode::toggle_in(&mut store) == ThemeMode::Dark, "first toggle did not go dark");
    ensure!(ThemeMode::load(&store) == ThemeMode::Dark, "dark mode was not persisted");
    ensure!(ThemeMode::toggle_in(&mut store) == ThemeMode::Light, "second toggle did not go light");
    let store = MemoryStore::with_entries([("mode", "sepia")]);
    ensure!(ThemeMode::load(&store) == ThemeMode::Light, "unknown mode did not fall back to light");
    Ok(())
}

fn session(_: usize) -> Result<()> {
    let mut store = MemoryStore::new();
    ensure!(UserSession::load(&store).is_none(), "empty store has a session");
    ensure!(
        UserSession::call_to_action(None).href == "/register",
        "logged-out CTA does not register"
    );
    let user = UserSession {
        username: "dana".to_string(),
        role: Some(UserRole::Volunteer),
        user_id: Some(7),
    };
    user.save(&mut store);
    let loaded = UserSession::load(&store);
    ensure!(loaded.as_ref() == Some(&user), "session did not round-trip: {loaded:?}");
    ensure!(user.profile_label() == "dana (Volunteer)", "label was {}", user.profile_label());
    ensure!(
        UserSession::call_to_action(loaded.as_ref()).href == "/profile",
        "logged-in CTA does not open the profile"
    );
    UserSession::clear(&mut store);
    for key in [USERNAME_KEY, ROLE_KEY, USER_ID_KEY] {
        ensure!(helpmap_core::KeyValueStore::get(&store, key).is_none(), "{key} survived logout");
    }
    Ok(())
}

fn toasts(_: usize) -> Result<()> {
    let mut queue = ToastQueue::new();
    let first = queue.push("Saved", ToastKind::Success);
    let second = queue.push("Careful", ToastKind::parse("warning"));
    ensure!(first != second, "toast ids collide");
    ensure!(queue.toasts().len() == 2, "queue holds {} toasts", queue.toasts().len());
    ensure!(
        ToastKind::parse("shout") == ToastKind::Info,
        "unknown kinds do not fall back to info"
    );
    ensure!(ToastKind::Warning.foreground() == "#1a1a1a", "warning text colour");
    ensure!(queue.dismiss(first), "dismiss missed a live toast");
    ensure!(!queue.dismiss(first), "dismissed the same toast twice");
    ensure!(queue.dismiss(second) && queue.is_empty(), "queue not emptied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<&str> = CATALOG.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn all_expands_to_catalog() {
        let expanded = expand_scenarios(&["all".to_string()]);
        assert_eq!(expanded.len(), CATALOG.len());
        assert_eq!(expand_scenarios(&["theme".to_string()]), vec!["theme"]);
    }

    #[test]
    fn every_scenario_passes_on_common_slide_counts() {
        for scenario in &CATALOG {
            let result = run_scenario(scenario, &[0, 1, 2, 3, 4, 7, 9, 10], false);
            assert!(result.passed, "{}: {:?}", result.scenario_name, result.failures);
        }
    }

    #[test]
    fn failing_check_is_reported_per_slide_count() {
        fn always_fails(slides: usize) -> Result<()> {
            anyhow::bail!("boom at {slides}")
        }
        let scenario = Scenario {
            name: "broken",
            description: "",
            per_slide_count: true,
            check: always_fails,
        };
        let result = run_scenario(&scenario, &[3, 9], false);
        assert!(!result.passed);
        assert_eq!(result.iterations_run, 2);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures[1], "9 slides: boom at 9");
    }
}
