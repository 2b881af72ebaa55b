use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}

/// localStorage key holding the visitor's language choice.
pub const LANG_STORAGE_KEY: &str = "preferredLang";

pub const LOGO_DARK: &str = "logo-dark.svg";
pub const LOGO_LIGHT: &str = "logo-light.svg";

// Element ids the scroll dock binds to.
pub const STICKY_CTA_ID: &str = "sticky-cta";
pub const FOOTER_ID: &str = "site-footer";
pub const CTA_SECTION_ID: &str = "cta";

/// Class toggled on the footer while it is pinned to the viewport bottom.
pub const FOOTER_FIXED_CLASS: &str = "fixed";

/// Scroll offset after which the header switches to its compact style.
pub const HEADER_SCROLLED_OFFSET: f64 = 50.0;

/// Height of the fixed header, subtracted from smooth-scroll targets.
pub const HEADER_OFFSET: f64 = 80.0;

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const STICKY_CTA_THRESHOLD: f64 = 0.1;
pub const STICKY_CTA_ROOT_MARGIN: &str = "0px";

/// Polyfill loaded when the browser lacks native image lazy loading.
pub const LAZYSIZES_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/lazysizes/5.3.2/lazysizes.min.js";

/// Where the enrollment form posts to.
pub const ENROLL_ACTION: &str = "/register";

pub const CONTACT_MAILTO: &str = "mailto:hello@vibecoding.example";
pub const COMMUNITY_URL: &str = "https://community.vibecoding.example";
