use dioxus::prelude::*;

use crate::i18n::use_translator;

/// A banner telling the user that chain data may be stale.
///
/// Not mounted anywhere yet, see `readout::SHOW_CONNECTIVITY_WARNING`.
#[component]
pub fn ChainConnectivityWarning() -> Element {
    let t = use_translator();
    let title = t.tr("Network Warning");
    let body = t.tr(
        "You may have lost your network connection, or the network may be down. Information shown here may be out of date.",
    );

    rsx! {
        div {
            class: "chain-connectivity-warning",
            role: "alert",
            strong { "{title}" }
            p { "{body}" }
        }
    }
}
