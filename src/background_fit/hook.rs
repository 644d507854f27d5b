use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::dom::{window, DocumentClassFlag, DomRegionSource, HtmlImageLoader, WindowFrameSource};
use super::cache::ImageSizeLoader;
use super::evaluator::{BackgroundFitEvaluator, FitFlagSink, PassOutcome};
use super::scheduler::{FrameScheduler, FrameSource};
use super::RegionSnapshot;
use crate::config::FitConfig;
use crate::error::DomError;

type PageEvaluator = BackgroundFitEvaluator<HtmlImageLoader, DocumentClassFlag>;

/// The pass ticket is taken here, synchronously, so teardown or a newer pass
/// always outranks this one no matter when the returned future is polled.
fn launch_pass<L, S>(evaluator: &Rc<BackgroundFitEvaluator<L, S>>, snapshot: Vec<RegionSnapshot>) -> LocalBoxFuture<'static, ()>
where
    L: ImageSizeLoader + 'static,
    S: FitFlagSink + 'static,
{
    let was_disabled = evaluator.backgrounds_disabled();
    let pass = evaluator.start_pass(snapshot);
    async move {
        if let PassOutcome::Applied { backgrounds_disabled, clipped } = pass.await {
            if backgrounds_disabled != was_disabled {
                debug!("Background flag flipped to {} by {:?}", backgrounds_disabled, clipped);
            }
        }
    }
    .boxed_local()
}

fn start_pass(evaluator: &Rc<PageEvaluator>, regions: &DomRegionSource) {
    match regions.snapshot() {
        Ok(snapshot) => spawn_local(launch_pass(evaluator, snapshot)),
        Err(e) => warn!("Skipping background fit pass: {}", e),
    }
}

/// Resize handler body: defer `refit` to the next frame, replacing any refit
/// still waiting for this one.
fn refit_on_resize<F: FrameSource>(scheduler: &FrameScheduler<F>, refit: &Rc<dyn Fn()>) {
    if scheduler.is_pending() {
        debug!("Resize within the same frame; replacing pending fit pass");
    }
    let refit = refit.clone();
    scheduler.schedule(move || refit());
}

/// Runs the background-fit pass once the page is mounted and again, at most
/// once per frame, whenever the window is resized.
#[hook]
pub fn use_background_fit(config: FitConfig) {
    use_effect_with_deps(
        move |config| {
            let wired = wire(config);
            let teardown: Box<dyn FnOnce()> = match wired {
                Ok(Some(teardown)) => teardown,
                Ok(None) => {
                    info!("No photo sections with images; background fit not needed");
                    Box::new(|| ())
                }
                Err(e) => {
                    warn!("Background fit disabled: {}", e);
                    Box::new(|| ())
                }
            };
            move || teardown()
        },
        config,
    );
}

fn wire(config: &FitConfig) -> Result<Option<Box<dyn FnOnce()>>, DomError> {
    let regions = Rc::new(DomRegionSource::new(config)?);
    if !regions.has_sections()? {
        return Ok(None);
    }

    let window = window()?;
    let evaluator = Rc::new(BackgroundFitEvaluator::new(
        HtmlImageLoader,
        DocumentClassFlag::new(config)?,
        config,
    ));
    let scheduler = Rc::new(FrameScheduler::new(WindowFrameSource::new(window.clone())));

    start_pass(&evaluator, &regions);

    let refit: Rc<dyn Fn()> = {
        let evaluator = evaluator.clone();
        Rc::new(move || start_pass(&evaluator, &regions))
    };
    let on_resize = {
        let scheduler = scheduler.clone();
        Closure::<dyn Fn()>::new(move || refit_on_resize(&scheduler, &refit))
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    let teardown: Box<dyn FnOnce()> = Box::new(move || {
        evaluator.cancel();
        scheduler.cancel();
        if let Err(e) = window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
            warn!("Failed to remove resize listener: {}", DomError::from(e));
        }
    });
    Ok(Some(teardown))
}
