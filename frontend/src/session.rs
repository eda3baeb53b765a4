use std::rc::Rc;

use log::{debug, error, info, warn};

use crate::context::{ListenerId, PageContext, ScrollHandler};
use crate::head::PageMeta;
use crate::opacity::HeaderOpacity;
use crate::reveal::AnimationEngine;

/// Resources held while the page is mounted. Dropping the session removes the
/// scroll listener and stops the animation engine.
pub struct PageSession {
    ctx: Rc<dyn PageContext>,
    listener: Option<ListenerId>,
    engine: Box<dyn AnimationEngine>,
}

impl Drop for PageSession {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.ctx.remove_scroll_listener(id);
        }
        self.engine.stop();
        debug!("Page session released");
    }
}

/// Reads the scroll offset and reports the new header opacity. Failures are
/// logged and leave the previous opacity in place.
pub fn sync_opacity(ctx: &dyn PageContext, on_opacity: &dyn Fn(HeaderOpacity)) {
    match ctx.scroll_y().and_then(HeaderOpacity::from_scroll_y) {
        Ok(opacity) => on_opacity(opacity),
        Err(e) => error!("Error calculating scroll opacity: {}", e),
    }
}

/// One-time page activation: publishes the document metadata, starts the
/// entrance animations and subscribes the header opacity to scroll events.
///
/// Returns `None` without a browser context; the page then stays unmounted.
pub fn activate(
    ctx: Option<Rc<dyn PageContext>>,
    meta: &PageMeta,
    mut engine: Box<dyn AnimationEngine>,
    on_opacity: Rc<dyn Fn(HeaderOpacity)>,
) -> Option<PageSession> {
    let Some(ctx) = ctx else {
        warn!("Window object is not available, skipping scroll listener");
        return None;
    };

    if let Err(e) = ctx.apply_metadata(meta) {
        warn!("Failed to publish page metadata: {}", e);
    }

    match engine.start() {
        Ok(count) => info!("Entrance animations watching {} elements", count),
        Err(e) => warn!("Entrance animations unavailable: {}", e),
    }

    let handler = {
        let ctx = Rc::downgrade(&ctx);
        let on_opacity = on_opacity.clone();
        ScrollHandler::new(move || {
            if let Some(ctx) = ctx.upgrade() {
                sync_opacity(ctx.as_ref(), on_opacity.as_ref());
            }
        })
    };
    let listener = match ctx.add_scroll_listener(handler) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Failed to register scroll listener: {}", e);
            None
        }
    };

    sync_opacity(ctx.as_ref(), on_opacity.as_ref());

    Some(PageSession {
        ctx,
        listener,
        engine,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, SiteConfig};
    use crate::context::testing::FakeContext;
    use crate::context::MockPageContext;
    use crate::error::PageError;
    use crate::reveal::MockAnimationEngine;
    use crate::test_support::capture_logs;
    use log::Level;
    use std::cell::{Cell, RefCell};

    fn meta() -> PageMeta {
        PageMeta::from_config(&SiteConfig::default(), config::get_site_url())
    }

    fn idle_engine() -> Box<dyn AnimationEngine> {
        let mut engine = MockAnimationEngine::new();
        engine.expect_start().returning(|| Ok(0));
        engine.expect_stop().return_const(());
        Box::new(engine)
    }

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, Rc<dyn Fn(HeaderOpacity)>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink: Rc<dyn Fn(HeaderOpacity)> = {
            let seen = seen.clone();
            Rc::new(move |opacity: HeaderOpacity| seen.borrow_mut().push(opacity.value()))
        };
        (seen, sink)
    }

    #[test]
    fn without_window_nothing_is_registered() {
        let mut engine = MockAnimationEngine::new();
        engine.expect_start().times(0);
        engine.expect_stop().return_const(());
        let (seen, sink) = recorder();

        let (session, logged) = capture_logs(|| activate(None, &meta(), Box::new(engine), sink));

        assert!(session.is_none());
        assert!(seen.borrow().is_empty());
        assert_eq!(
            logged,
            vec![(
                Level::Warn,
                "Window object is not available, skipping scroll listener".to_string()
            )]
        );
    }

    #[test]
    fn scroll_events_drive_the_opacity() {
        let ctx = Rc::new(FakeContext::with_elements(&[]));
        let (seen, sink) = recorder();

        let _session = activate(Some(ctx.clone()), &meta(), idle_engine(), sink).unwrap();
        assert_eq!(ctx.listener_count(), 1);

        ctx.scroll_to(Some(100.0));
        ctx.scroll_to(Some(400.0));
        assert_eq!(*seen.borrow(), vec![0.0, 0.5, 0.8]);
    }

    #[test]
    fn initial_offset_is_applied_on_activation() {
        let ctx = Rc::new(FakeContext::with_elements(&[]));
        ctx.scroll_y.set(Some(50.0));
        let (seen, sink) = recorder();

        let _session = activate(Some(ctx.clone()), &meta(), idle_engine(), sink).unwrap();
        assert_eq!(*seen.borrow(), vec![0.25]);
    }

    #[test]
    fn failed_scroll_reads_keep_the_previous_opacity() {
        let ctx = Rc::new(FakeContext::with_elements(&[]));
        let (seen, sink) = recorder();
        let _session = activate(Some(ctx.clone()), &meta(), idle_engine(), sink).unwrap();

        ctx.scroll_to(Some(60.0));
        let ((), logged) = capture_logs(|| {
            ctx.scroll_to(None);
            ctx.scroll_to(Some(f64::NAN));
        });

        assert_eq!(*seen.borrow(), vec![0.0, 0.3]);
        assert_eq!(logged.len(), 2);
        assert!(logged.iter().all(|(level, _)| *level == Level::Error));
    }

    #[test]
    fn teardown_detaches_the_listener_and_stops_the_engine() {
        let ctx = Rc::new(FakeContext::with_elements(&[]));
        let (seen, sink) = recorder();
        let stopped = Rc::new(Cell::new(0));
        let mut engine = MockAnimationEngine::new();
        engine.expect_start().times(1).returning(|| Ok(3));
        {
            let stopped = stopped.clone();
            engine
                .expect_stop()
                .returning_st(move || stopped.set(stopped.get() + 1));
        }

        let session = activate(Some(ctx.clone()), &meta(), Box::new(engine), sink).unwrap();
        ctx.scroll_to(Some(20.0));
        drop(session);

        assert_eq!(ctx.listener_count(), 0);
        assert_eq!(stopped.get(), 1);
        ctx.scroll_to(Some(300.0));
        assert_eq!(*seen.borrow(), vec![0.0, 0.1]);
    }

    #[test]
    fn engine_failure_does_not_block_activation() {
        let ctx = Rc::new(FakeContext::with_elements(&[]));
        let (seen, sink) = recorder();
        let mut engine = MockAnimationEngine::new();
        engine
            .expect_start()
            .returning(|| Err(PageError::MissingDocument));
        engine.expect_stop().return_const(());

        let session = activate(Some(ctx.clone()), &meta(), Box::new(engine), sink);
        assert!(session.is_some());
        ctx.scroll_to(Some(200.0));
        assert_eq!(seen.borrow().last(), Some(&0.8));
    }

    #[test]
    fn metadata_is_published_once_with_the_site_url() {
        let ctx = Rc::new(FakeContext::with_elements(&[]));
        let (_, sink) = recorder();

        let _session = activate(Some(ctx.clone()), &meta(), idle_engine(), sink).unwrap();

        let applied = ctx.applied_meta.borrow();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].og_url, config::get_site_url());
        assert_eq!(applied[0].title, "Senstech");
    }

    #[test]
    fn metadata_failure_does_not_block_activation() {
        let ctx = Rc::new(FakeContext::with_elements(&[]));
        ctx.fail_metadata.set(true);
        let (seen, sink) = recorder();

        let (session, logged) =
            capture_logs(|| activate(Some(ctx.clone()), &meta(), idle_engine(), sink));

        assert!(session.is_some());
        assert!(ctx.applied_meta.borrow().is_empty());
        assert_eq!(ctx.listener_count(), 1);
        assert_eq!(*seen.borrow(), vec![0.0]);
        assert!(logged
            .iter()
            .any(|(level, line)| *level == Level::Warn && line.contains("metadata")));
    }

    #[test]
    fn mocked_context_sees_metadata_before_the_listener() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = MockPageContext::new();
        {
            let order = order.clone();
            ctx.expect_apply_metadata()
                .times(1)
                .returning_st(move |_| {
                    order.borrow_mut().push("metadata");
                    Ok(())
                });
        }
        {
            let order = order.clone();
            ctx.expect_add_scroll_listener()
                .times(1)
                .returning_st(move |_| {
                    order.borrow_mut().push("listener");
                    Ok(7)
                });
        }
        ctx.expect_scroll_y().returning(|| Ok(0.0));
        ctx.expect_remove_scroll_listener()
            .withf(|id| *id == 7)
            .times(1)
            .return_const(());
        let (_, sink) = recorder();

        let session = activate(Some(Rc::new(ctx)), &meta(), idle_engine(), sink);
        drop(session);

        assert_eq!(*order.borrow(), vec!["metadata", "listener"]);
    }
}
