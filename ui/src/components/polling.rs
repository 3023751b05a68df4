//! The bottom-right status bar showing gas price and latest block.

use api::explorer::GAS_TRACKER_URL;
use dioxus::prelude::*;

use crate::chain_status::use_chain_status;
use crate::components::connectivity_warning::ChainConnectivityWarning;
use crate::components::pico::ExternalLink;
use crate::components::pico::Row;
use crate::components::pico::Tooltip;
use crate::hooks::use_freshness::use_freshness;
use crate::i18n::use_translator;
use crate::readout::number_opacity;
use crate::readout::StatusReadout;
use crate::readout::SHOW_CONNECTIVITY_WARNING;

const POLLING_CSS: &str = r#"
    .polling {
        --polling-green: #27AE60;
        --polling-yellow: #F3B71E;
        position: fixed;
        display: flex;
        align-items: center;
        right: 0;
        bottom: 0;
        padding: 1rem;
        transition: 250ms ease color;
        z-index: 200;
    }
    @media (max-width: 960px) {
        .polling { display: none; }
    }
    .polling a.external-link {
        color: inherit;
        text-decoration: none;
    }

    /* --- BLOCK NUMBER --- */
    .polling-number {
        transition: opacity 0.25s ease;
        opacity: var(--polling-opacity, 0.5);
    }
    .polling-number:hover {
        opacity: 1;
    }

    /* --- DOTS --- */
    .polling-dot {
        width: 8px;
        height: 8px;
        min-height: 8px;
        min-width: 8px;
        border-radius: 50%;
        position: relative;
        transition: 250ms ease background-color;
    }
    .polling-gas-dot {
        background-color: var(--polling-green);
        border-radius: 50%;
        height: 4px;
        min-height: 4px;
        min-width: 4px;
        position: relative;
        transition: 250ms ease background-color;
        width: 4px;
    }

    /* --- SPINNER (shown while fresh) --- */
    @keyframes polling-rotate360 {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    .polling-spinner {
        animation: polling-rotate360 1s cubic-bezier(0.83, 0, 0.17, 1) infinite;
        transform: translateZ(0);
        border-top: 1px solid transparent;
        border-right: 1px solid transparent;
        border-bottom: 1px solid transparent;
        border-left: 2px solid;
        background: transparent;
        width: 14px;
        height: 14px;
        border-radius: 50%;
        position: relative;
        transition: 250ms ease border-color;
        left: -3px;
        top: -3px;
    }
"#;

/// Shows the current gas price and block number, pulsing on every new block.
///
/// Reads the [`ChainStatus`](crate::chain_status::ChainStatus) context. Missing
/// values are simply left out: no gas readout without a gas price, a blank
/// block number and an empty link without a block or chain id.
#[component]
pub fn PollingIndicator() -> Element {
    let status = use_chain_status();
    let t = use_translator();
    let mut is_hover = use_signal(|| false);
    let is_fresh = use_freshness(status.block_number);

    let chain_id = (status.chain_id)();
    let block_number = (status.block_number)();
    let gas_price = (status.gas_price)();
    let readout = StatusReadout::new(chain_id, block_number.as_ref(), gas_price.as_ref());

    let tone_color = readout.tone.color();
    let opacity = number_opacity(is_fresh(), is_hover());

    let show_gas = readout.gas_gwei.is_some();
    let gas_text = readout
        .gas_gwei
        .as_ref()
        .map(|gwei| format!("{} {}", gwei, t.tr("gwei")))
        .unwrap_or_default();
    let gas_tip = t
        .tr("The current fast gas amount for sending a transaction on L1. Gas fees are paid in Ethereum's native currency Ether (ETH) and denominated in gwei.")
        .into_owned();
    let block_tip = t
        .tr("The most recent block number on this network. Prices update on every block.")
        .into_owned();
    let block_text = format!("{}\u{2002}", readout.block_label);

    rsx! {
        style { "{POLLING_CSS}" }
        Row {
            div {
                class: "polling",
                style: "color: {tone_color};",
                onmouseenter: move |_| is_hover.set(true),
                onmouseleave: move |_| is_hover.set(false),

                ExternalLink {
                    href: GAS_TRACKER_URL.to_string(),
                    if show_gas {
                        Row {
                            style: "margin-right: 8px;".to_string(),
                            small {
                                class: "polling-gas",
                                style: "margin-right: 8px;",
                                Tooltip {
                                    text: gas_tip,
                                    "{gas_text}"
                                }
                            }
                            div { class: "polling-gas-dot" }
                        }
                    }
                }

                small {
                    class: "polling-number",
                    style: "--polling-opacity: {opacity};",
                    ExternalLink {
                        href: readout.explorer_href.clone(),
                        Tooltip {
                            text: block_tip,
                            "{block_text}"
                        }
                    }
                }

                div {
                    class: "polling-dot",
                    style: "background-color: {tone_color};",
                    if is_fresh() {
                        div {
                            class: "polling-spinner",
                            style: "border-left-color: {tone_color};",
                        }
                    }
                }
            }
            if SHOW_CONNECTIVITY_WARNING {
                ChainConnectivityWarning {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::chain::BlockNumber;
    use api::chain::ChainId;
    use api::gas_price::GasPrice;
    use dioxus::core::VirtualDom;

    use super::*;
    use crate::chain_status::use_chain_status_provider;
    use crate::chain_status::ChainStatus;
    use crate::test_util::advance;
    use crate::test_util::settle;
    use crate::test_util::Handle;

    #[derive(Clone, Copy)]
    struct Bar {
        status: ChainStatus,
        mounted: Signal<bool>,
    }

    #[component]
    fn Host(handle: Handle<Bar>) -> Element {
        let status = use_chain_status_provider(Some(ChainId::MAINNET));
        let mounted = use_signal(|| true);
        handle.put(Bar { status, mounted });

        rsx! {
            if mounted() {
                PollingIndicator {}
            }
        }
    }

    async fn mount() -> (VirtualDom, Bar) {
        let handle = Handle::default();
        let mut dom = VirtualDom::new_with_props(Host, HostProps { handle: handle.clone() });
        dom.rebuild_in_place();
        settle(&mut dom).await;
        (dom, handle.get())
    }

    async fn publish_block(dom: &mut VirtualDom, bar: Bar, block: Option<u64>) {
        let mut block_number = bar.status.block_number;
        dom.in_runtime(|| block_number.set(block.map(BlockNumber::from)));
        settle(dom).await;
    }

    fn html(dom: &VirtualDom) -> String {
        dioxus::ssr::render(dom)
    }

    fn spinning(dom: &VirtualDom) -> bool {
        html(dom).contains(r#"class="polling-spinner""#)
    }

    #[tokio::test(start_paused = true)]
    async fn gas_readout_is_left_out_without_a_gas_price() {
        let (mut dom, bar) = mount().await;
        publish_block(&mut dom, bar, Some(5)).await;
        assert!(!html(&dom).contains(r#"class="polling-gas""#));

        let mut gas_price = bar.status.gas_price;
        dom.in_runtime(|| gas_price.set(Some(GasPrice::from(42_999_999_999u64))));
        settle(&mut dom).await;
        let html = html(&dom);
        assert!(html.contains(r#"class="polling-gas""#));
        assert!(html.contains("42 gwei"));
    }

    #[tokio::test(start_paused = true)]
    async fn spinner_shows_only_while_block_is_fresh() {
        let (mut dom, bar) = mount().await;
        assert!(!spinning(&dom));

        publish_block(&mut dom, bar, Some(17_034_812)).await;
        let html = html(&dom);
        assert!(html.contains("17034812"));
        assert!(html.contains("https://etherscan.io/block/17034812"));
        assert!(spinning(&dom));

        advance(&mut dom, 900).await;
        assert!(spinning(&dom));
        advance(&mut dom, 100).await;
        assert!(!spinning(&dom));

        // same block again is not news.
        publish_block(&mut dom, bar, Some(17_034_812)).await;
        assert!(!spinning(&dom));
    }

    #[tokio::test(start_paused = true)]
    async fn newer_block_restarts_the_spinner() {
        let (mut dom, bar) = mount().await;
        publish_block(&mut dom, bar, Some(5)).await;
        advance(&mut dom, 600).await;
        publish_block(&mut dom, bar, Some(6)).await;

        // the first window would have closed here.
        advance(&mut dom, 600).await;
        assert!(spinning(&dom));
        advance(&mut dom, 400).await;
        assert!(!spinning(&dom));
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_while_fresh_is_quiet() {
        let (mut dom, bar) = mount().await;
        publish_block(&mut dom, bar, Some(5)).await;
        assert!(spinning(&dom));

        let mut mounted = bar.mounted;
        dom.in_runtime(|| mounted.set(false));
        settle(&mut dom).await;
        assert!(!html(&dom).contains("polling-number"));

        advance(&mut dom, 2000).await;
        publish_block(&mut dom, bar, Some(6)).await;
        assert!(!html(&dom).contains("polling-number"));
    }

    #[tokio::test(start_paused = true)]
    async fn connectivity_warning_never_renders() {
        let (mut dom, bar) = mount().await;
        assert!(!html(&dom).contains("chain-connectivity-warning"));

        publish_block(&mut dom, bar, Some(5)).await;
        let mut gas_price = bar.status.gas_price;
        dom.in_runtime(|| gas_price.set(Some(GasPrice::from_gwei(30))));
        settle(&mut dom).await;
        assert!(!html(&dom).contains("chain-connectivity-warning"));

        advance(&mut dom, 5000).await;
        assert!(!html(&dom).contains("chain-connectivity-warning"));
    }
}
