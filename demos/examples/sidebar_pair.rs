// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Left and right sidebars sharing a window.
//!
//! This example loads two panel configurations from JSON, mounts them in a
//! [`PanelSet`], and walks through a desktop session, the Ctrl+B shortcut,
//! and a resize into the mobile overlay layout.
//!
//! Run:
//! - `cargo run -p overlook_demos --example sidebar_pair`

use overlook_panel::controller::PanelController;
use overlook_panel::set::PanelSet;
use overlook_panel::shortcut::{KeyEvent, KeyOutcome, Modifiers};
use overlook_panel::types::{PanelConfig, PanelMode, RenderMode, Side};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"[
    { "side": "left" },
    { "side": "right", "max_width": 320.0, "always_visible": true }
]"#;

fn report(panels: &PanelSet, viewport_width: f64) {
    for panel in panels.iter() {
        let layout = panel.layout(viewport_width);
        println!(
            "  {:?}: mode={:?} render={:?} width={} docked={} backdrop={}",
            panel.side(),
            panel.mode(),
            layout.render_mode,
            layout.width,
            layout.docked_width,
            layout.backdrop,
        );
    }
    let insets = panels.content_insets(viewport_width);
    println!("  content insets: left={} right={}", insets.left, insets.right);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configs: Vec<PanelConfig> = serde_json::from_str(CONFIG).unwrap();
    let mut panels = PanelSet::new();
    for config in configs {
        panels.mount(PanelController::new(config).unwrap());
    }

    let mut width = 1440.0;
    panels.on_resize(width);
    println!("desktop @ {width}:");
    report(&panels, width);
    assert_eq!(panels.content_insets(width).left, 280.0);
    assert_eq!(panels.content_insets(width).right, 320.0);

    // Ctrl+B collapses the left panel to its icon rail; the pinned right panel ignores it.
    let outcome = panels.handle_key(&KeyEvent::new('b', Modifiers::CTRL));
    assert_eq!(outcome, KeyOutcome::Handled);
    println!("after Ctrl+B:");
    report(&panels, width);
    assert_eq!(panels.panel(Side::Left).mode(), PanelMode::CollapsedIcons);
    assert_eq!(panels.panel(Side::Right).mode(), PanelMode::AlwaysVisible);

    // Shrinking below the breakpoint turns panels into overlays without changing open state.
    width = 390.0;
    panels.on_resize(width);
    println!("mobile @ {width}:");
    report(&panels, width);
    assert_eq!(panels.panel(Side::Left).render_mode(), RenderMode::Overlay);
    assert!(!panels.panel(Side::Left).is_open());

    // Reopen on mobile, then dismiss via the backdrop.
    panels.panel_mut(Side::Left).open();
    assert!(panels.panel(Side::Left).has_backdrop());
    assert!(panels.panel_mut(Side::Left).backdrop_click());
    println!("after backdrop click:");
    report(&panels, width);

    let json = serde_json::to_string(panels.panel(Side::Right).config()).unwrap();
    println!("right panel config: {json}");
}
