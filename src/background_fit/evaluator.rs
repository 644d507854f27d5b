use std::cell::Cell;
use std::rc::Rc;

use futures::future::{join_all, FutureExt, LocalBoxFuture};
use log::{debug, info};

use super::cache::{ImageSizeLoader, NaturalSizeCache};
use super::size_rule::{effective_layer, BackgroundSize};
use super::url::resolve_image_url;
use super::RegionSnapshot;
use crate::config::FitConfig;

/// Receives the page-wide "background images disabled" state.
#[cfg_attr(test, mockall::automock)]
pub trait FitFlagSink {
    fn apply(&self, backgrounds_disabled: bool);
}

/// Sequence number handed to a pass when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum PassOutcome {
    Applied {
        backgrounds_disabled: bool,
        clipped: Vec<String>,
    },
    /// A newer pass was started (or the evaluator was cancelled) before this
    /// one finished, so its result was dropped.
    Superseded,
}

/// Owns the natural-size cache and the flag. Passes may overlap while they
/// wait for images; only the most recently started pass may write the flag.
pub struct BackgroundFitEvaluator<L, S> {
    cache: NaturalSizeCache<L>,
    sink: S,
    tolerance: f64,
    latest: Cell<u64>,
    disabled: Cell<bool>,
}

impl<L: ImageSizeLoader, S: FitFlagSink> BackgroundFitEvaluator<L, S> {
    pub fn new(loader: L, sink: S, config: &FitConfig) -> Self {
        Self {
            cache: NaturalSizeCache::new(loader),
            sink,
            tolerance: config.clip_tolerance_px,
            latest: Cell::new(0),
            disabled: Cell::new(false),
        }
    }

    /// Current value of the flag as last applied.
    pub fn backgrounds_disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn begin_pass(&self) -> PassTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        PassTicket(next)
    }

    /// Invalidates every pass still in flight.
    pub fn cancel(&self) {
        self.begin_pass();
    }

    pub async fn run_pass(&self, ticket: PassTicket, regions: Vec<RegionSnapshot>) -> PassOutcome {
        let verdicts = join_all(regions.iter().map(|region| self.is_clipped(region))).await;

        if ticket.0 != self.latest.get() {
            debug!("Fit pass {} superseded by pass {}", ticket.0, self.latest.get());
            return PassOutcome::Superseded;
        }

        let clipped: Vec<String> = regions
            .iter()
            .zip(verdicts)
            .filter(|(_, clipped)| *clipped)
            .map(|(region, _)| region.label.clone())
            .collect();
        let backgrounds_disabled = !clipped.is_empty();

        if backgrounds_disabled != self.disabled.get() {
            info!(
                "Background images {} (clipped sections: {:?})",
                if backgrounds_disabled { "disabled" } else { "enabled" },
                clipped
            );
        }
        debug!(
            "Fit pass {} checked {} sections, {} images cached",
            ticket.0,
            regions.len(),
            self.cache.len()
        );

        self.disabled.set(backgrounds_disabled);
        self.sink.apply(backgrounds_disabled);

        PassOutcome::Applied {
            backgrounds_disabled,
            clipped,
        }
    }

    /// Sections without a usable image, or whose image failed to load, fit.
    async fn is_clipped(&self, region: &RegionSnapshot) -> bool {
        let Some(url) = region.background_declaration.as_deref().and_then(resolve_image_url) else {
            return false;
        };
        let Some(natural) = self.cache.natural_size(&url).await else {
            return false;
        };
        let Some(layer) = effective_layer(&region.background_size) else {
            return false;
        };

        let rendered = BackgroundSize::parse(layer).rendered_height(region.bounds, natural);
        let clipped = rendered + self.tolerance < region.bounds.height;
        debug!(
            "Section {}: image {} renders {:.1}px tall in {:.1}px (size {}, position {})",
            region.label, url, rendered, region.bounds.height, layer, region.background_position
        );
        clipped
    }
}

impl<L: ImageSizeLoader + 'static, S: FitFlagSink + 'static> BackgroundFitEvaluator<L, S> {
    /// Takes the pass ticket now, at the call, and returns the work to await
    /// or spawn. A `cancel` or newer pass issued before the returned future is
    /// first polled still wins.
    pub fn start_pass(self: &Rc<Self>, regions: Vec<RegionSnapshot>) -> LocalBoxFuture<'static, PassOutcome> {
        let ticket = self.begin_pass();
        let evaluator = self.clone();
        async move { evaluator.run_pass(ticket, regions).await }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background_fit::cache::tests::TableLoader;
    use crate::background_fit::RegionBox;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn section(label: &str, url: &str, size: &str, width: f64, height: f64) -> RegionSnapshot {
        RegionSnapshot {
            label: label.to_string(),
            bounds: RegionBox { width, height },
            background_declaration: Some(format!("url(\"{}\")", url)),
            background_size: size.to_string(),
            background_position: "center top".to_string(),
        }
    }

    /// Sink that keeps every value it was given.
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<bool>>>);

    impl FitFlagSink for Recorder {
        fn apply(&self, backgrounds_disabled: bool) {
            self.0.borrow_mut().push(backgrounds_disabled);
        }
    }

    #[test]
    fn half_width_image_disables_backgrounds() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let mut sink = MockFitFlagSink::new();
        sink.expect_apply().with(eq(true)).times(1).return_const(());
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, sink, &FitConfig::default()));

        let outcome = block_on(evaluator.start_pass(vec![section("track", "/short.png", "50% auto", 800.0, 300.0)]));

        assert_eq!(
            outcome,
            PassOutcome::Applied {
                backgrounds_disabled: true,
                clipped: vec!["track".to_string()]
            }
        );
        assert!(evaluator.backgrounds_disabled());
    }

    #[test]
    fn tall_enough_images_keep_backgrounds() {
        let loader = TableLoader::with(&[("/wind.png", 1600.0, 800.0), ("/solar-farm.png", 1600.0, 1200.0)]);
        let mut sink = MockFitFlagSink::new();
        sink.expect_apply().with(eq(false)).times(1).return_const(());
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, sink, &FitConfig::default()));

        let outcome = block_on(evaluator.start_pass(vec![
            section("track", "/wind.png", "100% auto", 800.0, 300.0),
            section("contact", "/solar-farm.png", "100% auto", 800.0, 300.0),
        ]));

        assert_eq!(
            outcome,
            PassOutcome::Applied {
                backgrounds_disabled: false,
                clipped: vec![]
            }
        );
    }

    #[test]
    fn cover_sections_never_clip() {
        let loader = TableLoader::with(&[("/wide.png", 3000.0, 200.0)]);
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, Recorder::default(), &FitConfig::default()));

        for (width, height) in [(320.0, 2000.0), (1920.0, 400.0), (800.0, 800.0)] {
            let outcome = block_on(evaluator.start_pass(vec![section("hero", "/wide.png", "cover", width, height)]));
            assert!(matches!(outcome, PassOutcome::Applied { backgrounds_disabled: false, .. }));
        }
    }

    #[test]
    fn contain_clips_when_ratios_differ() {
        let loader = TableLoader::with(&[("/wide.png", 1600.0, 400.0)]);
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, Recorder::default(), &FitConfig::default()));

        let outcome = block_on(evaluator.start_pass(vec![section("hero", "/wide.png", "contain", 800.0, 600.0)]));
        assert!(matches!(outcome, PassOutcome::Applied { backgrounds_disabled: true, .. }));

        let outcome = block_on(evaluator.start_pass(vec![section("hero", "/wide.png", "contain", 800.0, 200.0)]));
        assert!(matches!(outcome, PassOutcome::Applied { backgrounds_disabled: false, .. }));
    }

    #[test]
    fn tolerance_absorbs_subpixel_shortfall() {
        let loader = TableLoader::with(&[("/a.png", 1000.0, 500.0)]);
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader.clone(), Recorder::default(), &FitConfig::default()));
        // renders 400px tall in a 400.6px section
        let outcome = block_on(evaluator.start_pass(vec![section("a", "/a.png", "100% auto", 800.0, 400.6)]));
        assert!(matches!(outcome, PassOutcome::Applied { backgrounds_disabled: false, .. }));

        let strict = FitConfig {
            clip_tolerance_px: 0.0,
            ..FitConfig::default()
        };
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, Recorder::default(), &strict));
        let outcome = block_on(evaluator.start_pass(vec![section("a", "/a.png", "100% auto", 800.0, 400.6)]));
        assert!(matches!(outcome, PassOutcome::Applied { backgrounds_disabled: true, .. }));
    }

    #[test]
    fn missing_or_failed_images_fit() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let recorder = Recorder::default();
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, recorder.clone(), &FitConfig::default()));

        let mut no_url = section("about", "", "50% auto", 800.0, 300.0);
        no_url.background_declaration = None;
        let broken = section("broken", "/404.png", "50% auto", 800.0, 300.0);
        let blank_size = section("blank", "/short.png", " , ", 800.0, 300.0);

        let outcome = block_on(evaluator.start_pass(vec![no_url, broken, blank_size]));
        assert!(matches!(outcome, PassOutcome::Applied { backgrounds_disabled: false, .. }));
        assert_eq!(*recorder.0.borrow(), vec![false]);
    }

    #[test]
    fn only_last_size_layer_counts() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, Recorder::default(), &FitConfig::default()));

        let outcome = block_on(evaluator.start_pass(vec![section("track", "/short.png", "cover, 50% auto", 800.0, 300.0)]));
        assert!(matches!(outcome, PassOutcome::Applied { backgrounds_disabled: true, .. }));
    }

    #[test]
    fn repeated_passes_agree() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let recorder = Recorder::default();
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader.clone(), recorder.clone(), &FitConfig::default()));
        let regions = vec![section("track", "/short.png", "50% auto", 800.0, 300.0)];

        let first = block_on(evaluator.start_pass(regions.clone()));
        let second = block_on(evaluator.start_pass(regions));

        assert_eq!(first, second);
        assert_eq!(*recorder.0.borrow(), vec![true, true]);
        assert_eq!(loader.calls.get(), 1);
    }

    #[test]
    fn stale_pass_does_not_overwrite_newer_result() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let recorder = Recorder::default();
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, recorder.clone(), &FitConfig::default()));

        let narrow = vec![section("track", "/short.png", "50% auto", 800.0, 300.0)];
        let wide = vec![section("track", "/short.png", "50% auto", 1600.0, 300.0)];

        let stale = evaluator.begin_pass();
        let fresh = evaluator.begin_pass();

        assert_eq!(
            block_on(evaluator.run_pass(fresh, wide)),
            PassOutcome::Applied {
                backgrounds_disabled: false,
                clipped: vec![]
            }
        );
        assert_eq!(block_on(evaluator.run_pass(stale, narrow)), PassOutcome::Superseded);
        assert!(!evaluator.backgrounds_disabled());
        assert_eq!(*recorder.0.borrow(), vec![false]);
    }

    #[test]
    fn cancel_discards_in_flight_pass() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let recorder = Recorder::default();
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, recorder.clone(), &FitConfig::default()));

        let ticket = evaluator.begin_pass();
        evaluator.cancel();
        let outcome = block_on(evaluator.run_pass(ticket, vec![section("track", "/short.png", "50% auto", 800.0, 300.0)]));

        assert_eq!(outcome, PassOutcome::Superseded);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn pass_spawned_before_teardown_never_applies() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let recorder = Recorder::default();
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, recorder.clone(), &FitConfig::default()));

        let mut pool = LocalPool::new();
        let pass = evaluator.start_pass(vec![section("track", "/short.png", "50% auto", 800.0, 300.0)]);
        let outcome = Rc::new(RefCell::new(None));
        let slot = outcome.clone();
        pool.spawner()
            .spawn_local(async move {
                *slot.borrow_mut() = Some(pass.await);
            })
            .unwrap();

        evaluator.cancel();
        pool.run();

        assert_eq!(*outcome.borrow(), Some(PassOutcome::Superseded));
        assert!(recorder.0.borrow().is_empty());
        assert!(!evaluator.backgrounds_disabled());
    }

    #[test]
    fn later_started_pass_wins_regardless_of_poll_order() {
        let loader = TableLoader::with(&[("/short.png", 1000.0, 500.0)]);
        let recorder = Recorder::default();
        let evaluator = Rc::new(BackgroundFitEvaluator::new(loader, recorder.clone(), &FitConfig::default()));

        let narrow = evaluator.start_pass(vec![section("track", "/short.png", "50% auto", 800.0, 300.0)]);
        let wide = evaluator.start_pass(vec![section("track", "/short.png", "50% auto", 1600.0, 300.0)]);

        // The newer pass is polled first; the older one finishes last.
        assert!(matches!(block_on(wide), PassOutcome::Applied { backgrounds_disabled: false, .. }));
        assert_eq!(block_on(narrow), PassOutcome::Superseded);
        assert_eq!(*recorder.0.borrow(), vec![false]);
    }
}
