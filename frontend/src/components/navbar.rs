use yew::prelude::*;

use crate::content::NAV_LINKS;
use crate::hooks::use_scroll_state;
use crate::scroll::ScrollState;

/// Style modifier for the fixed navbar: transparent at the top of the page,
/// frosted with a shadow once scrolled.
pub fn nav_modifier(state: ScrollState) -> &'static str {
    match state {
        ScrollState::AtTop => "site-nav--top",
        ScrollState::Scrolled => "site-nav--scrolled",
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let state = use_scroll_state();

    html! {
        <nav
            class={classes!("site-nav", nav_modifier(state))}
            data-scrolled={state.is_scrolled().to_string()}
        >
            <div class="site-nav__inner">
                <span class="site-nav__brand vitis-3d-subtle">{"VITIs"}</span>
                <div class="site-nav__links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="site-nav__link">{link.label}</a>
                    }) }
                </div>
                <button type="button" class="site-nav__badge">
                    {"Academic Project"}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_tracks_state() {
        assert_eq!(nav_modifier(ScrollState::AtTop), "site-nav--top");
        assert_eq!(nav_modifier(ScrollState::Scrolled), "site-nav--scrolled");
    }

    #[test]
    fn modifier_from_offsets() {
        assert_eq!(nav_modifier(ScrollState::from_offset(0.0)), "site-nav--top");
        assert_eq!(nav_modifier(ScrollState::from_offset(20.0)), "site-nav--top");
        assert_eq!(nav_modifier(ScrollState::from_offset(21.0)), "site-nav--scrolled");
    }
}
