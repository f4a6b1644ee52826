//! Device compatibility verdicts.

use giglens_core::format;
use giglens_core::types::DeviceCompatibility;
use leptos::prelude::*;

/// Check/cross per device, plus the issue list when anything failed.
#[component]
pub fn DevicePanel(devices: DeviceCompatibility) -> impl IntoView {
    let issues = devices.issues.clone();
    view! {
        <section class="panel">
            <h2 class="panel-title">"Device Compatibility"</h2>
            <div class="device-grid">
                {devices.devices().into_iter().map(|(label, supported)| view! {
                    <div class="device-tile">
                        <div class=if supported { "device-mark ok" } else { "device-mark bad" }>
                            {format::device_mark(supported)}
                        </div>
                        <div class="device-label">{label}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
            {(!issues.is_empty()).then(|| view! {
                <div class="device-issues">
                    <h3>"Issues to Address:"</h3>
                    <ul>
                        {issues.into_iter().map(|issue| view! {
                            <li>"\u{26a0} "{issue}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
        </section>
    }
}
