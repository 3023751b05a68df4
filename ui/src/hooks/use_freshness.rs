use std::cell::RefCell;
use std::rc::Rc;

use api::chain::BlockNumber;
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::compat;
use crate::freshness::FreshnessWindow;
use crate::freshness::FRESHNESS_WINDOW;

/// Returns a signal that is `true` for [`FRESHNESS_WINDOW`] after each new
/// block number.
///
/// The closing timer is a task spawned in the calling component. A newer
/// block cancels it before spawning a replacement, and it is cancelled when
/// the component unmounts, so the flag is never written after teardown.
pub fn use_freshness(block_number: Signal<Option<BlockNumber>>) -> Signal<bool> {
    let mut fresh = use_signal(|| false);
    let window = use_hook(|| Rc::new(RefCell::new(FreshnessWindow::<Task>::new())));

    // only re-run the effect when the value actually changes.
    let latest = use_memo(move || block_number());

    let effect_window = window.clone();
    use_effect(move || {
        let block = latest();
        let expiring = effect_window.clone();

        let opened = effect_window.borrow_mut().observe(block.as_ref(), || {
            spawn(async move {
                compat::sleep(FRESHNESS_WINDOW).await;
                expiring.borrow_mut().expire();
                fresh.set(false);
            })
        });

        if opened {
            dioxus_logger::tracing::debug!("new block {:?}, opening freshness window", block);
            fresh.set(true);
        }
    });

    use_drop(move || window.borrow_mut().teardown());

    fresh
}
