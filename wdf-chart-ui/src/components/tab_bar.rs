//! Tab triggers for the data dashboard.

use dioxus::prelude::*;
use wdf_content::layout::TabButton;

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    pub tabs: Vec<TabButton>,
    /// Called with the key of the clicked tab
    pub on_select: EventHandler<&'static str>,
}

/// A row of buttons, one per tab, with the active one highlighted.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div {
            role: "tablist",
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 4px; max-width: 896px; margin: 0 auto 32px auto; padding: 4px; background: #f1f5f9; border-radius: 8px;",
            for tab in props.tabs.iter() {
                {
                    let key = tab.key;
                    let on_select = props.on_select;
                    let class = if tab.active { "wdf-button active" } else { "wdf-button" };
                    rsx! {
                        button {
                            key: "{key}",
                            role: "tab",
                            class: "{class}",
                            style: "justify-content: center; border: none;",
                            onclick: move |_| on_select.call(key),
                            span { "{tab.icon.glyph()}" }
                            span { "{tab.label}" }
                        }
                    }
                }
            }
        }
    }
}
