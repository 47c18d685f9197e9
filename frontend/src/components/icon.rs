use yew::prelude::*;

/// The fixed set of line icons used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Map,
    Database,
    Activity,
    ChevronRight,
    CloudSun,
    Layout,
    Smartphone,
    FileText,
}

impl Icon {
    pub fn label(self) -> &'static str {
        match self {
            Icon::Map => "Map",
            Icon::Database => "Database",
            Icon::Activity => "Activity",
            Icon::ChevronRight => "ChevronRight",
            Icon::CloudSun => "CloudSun",
            Icon::Layout => "Layout",
            Icon::Smartphone => "Smartphone",
            Icon::FileText => "FileText",
        }
    }

    fn shapes(self) -> Html {
        match self {
            Icon::Map => html! {
                <>
                    <polygon points="3 6 9 3 15 6 21 3 21 18 15 21 9 18 3 21" />
                    <line x1="9" x2="9" y1="3" y2="18" />
                    <line x1="15" x2="15" y1="6" y2="21" />
                </>
            },
            Icon::Database => html! {
                <>
                    <ellipse cx="12" cy="5" rx="9" ry="3" />
                    <path d="M3 5V19A9 3 0 0 0 21 19V5" />
                    <path d="M3 12A9 3 0 0 0 21 12" />
                </>
            },
            Icon::Activity => html! {
                <polyline points="22 12 18 12 15 21 9 3 6 12 2 12" />
            },
            Icon::ChevronRight => html! {
                <path d="m9 18 6-6-6-6" />
            },
            Icon::CloudSun => html! {
                <>
                    <path d="M12 2v2" />
                    <path d="m4.93 4.93 1.41 1.41" />
                    <path d="M20 12h2" />
                    <path d="m19.07 4.93-1.41 1.41" />
                    <path d="M15.947 12.65a4 4 0 0 0-5.925-4.128" />
                    <path d="M13 22H7a5 5 0 1 1 4.9-6H13a3 3 0 0 1 0 6Z" />
                </>
            },
            Icon::Layout => html! {
                <>
                    <rect width="18" height="18" x="3" y="3" rx="2" ry="2" />
                    <line x1="3" x2="21" y1="9" y2="9" />
                    <line x1="9" x2="9" y1="21" y2="9" />
                </>
            },
            Icon::Smartphone => html! {
                <>
                    <rect width="14" height="20" x="5" y="2" rx="2" ry="2" />
                    <path d="M12 18h.01" />
                </>
            },
            Icon::FileText => html! {
                <>
                    <path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z" />
                    <polyline points="14 2 14 8 20 8" />
                    <line x1="16" x2="8" y1="13" y2="13" />
                    <line x1="16" x2="8" y1="17" y2="17" />
                    <line x1="10" x2="8" y1="9" y2="9" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconSvgProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconSvgProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            data-icon={props.icon.label()}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.icon.shapes() }
        </svg>
    }
}
