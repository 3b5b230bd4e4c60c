//! Navigation behavior: scroll-spy on the main nav and collapsing the
//! responsive menu after a link is followed on narrow viewports.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::page::{Page, Target};

/// Activate scroll-spy if the main navigation landmark exists.
///
/// Returns whether scroll-spy was started.
pub fn activate_scroll_spy<P: Page + ?Sized>(page: &P, offset: u32) -> bool {
    if !page.exists(Target::MainNav) {
        log::debug!("nav-auth: no {} on page, scroll-spy skipped", Target::MainNav.selector());
        return false;
    }
    page.activate_scroll_spy(offset);
    true
}

/// Handle a click on a responsive nav link.
///
/// Clicks the navbar toggler once when it is displayed, which is only the
/// case below the responsive breakpoint. Returns whether the menu was
/// collapsed.
pub fn collapse_responsive_menu<P: Page + ?Sized>(page: &P) -> bool {
    if !page.exists(Target::NavbarToggler) || !page.is_displayed(Target::NavbarToggler) {
        return false;
    }
    page.click(Target::NavbarToggler);
    true
}
