//! Centered page header with icon, title and intro paragraph.

use crate::components::IconBadge;
use crate::theme::{AQUA_BRIGHT, OCEAN_DEEP};
use dioxus::prelude::*;
use wdf_content::models::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub icon: Icon,
    pub title: String,
    pub intro: String,
    #[props(default = OCEAN_DEEP.to_string())]
    pub from: String,
    #[props(default = AQUA_BRIGHT.to_string())]
    pub to: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 64px;",
            div {
                style: "margin-bottom: 24px;",
                IconBadge {
                    icon: props.icon,
                    from: props.from.clone(),
                    to: props.to.clone(),
                    size: 56,
                }
            }
            h1 {
                style: "font-size: 44px; font-weight: 700; margin-bottom: 24px;",
                "{props.title}"
            }
            p {
                style: "font-size: 20px; color: #64748b; max-width: 896px; margin: 0 auto; line-height: 1.6;",
                "{props.intro}"
            }
        }
    }
}
