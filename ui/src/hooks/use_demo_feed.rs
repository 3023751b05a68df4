use api::prefs::demo_feed::DemoFeed;
use dioxus::prelude::*;

use crate::chain_status::ChainStatus;
use crate::compat::interval::Interval;

/// Publishes synthetic blocks into `status` for as long as the calling
/// component is mounted.
///
/// Does nothing when `feed` is `None`, which is the normal case: the host
/// application writes real chain data into the status signals instead.
pub fn use_demo_feed(status: ChainStatus, feed: Option<DemoFeed>) {
    use_hook(move || {
        let Some(feed) = feed else {
            return;
        };
        let ChainStatus {
            mut block_number,
            mut gas_price,
            ..
        } = status;

        dioxus_logger::tracing::info!(
            "demo feed: starting at block {} with gas price {} wei, every {:?}",
            feed.start_block,
            feed.gas_price,
            feed.block_interval()
        );

        spawn(async move {
            block_number.set(Some(feed.start_block.clone()));
            gas_price.set(Some(feed.gas_price.clone()));
            let mut interval = Interval::new(feed.block_interval());
            loop {
                interval.tick().await;
                let next = match &*block_number.peek() {
                    Some(block) => block.next(),
                    None => feed.start_block.clone(),
                };
                block_number.set(Some(next));
            }
        });
    });
}
