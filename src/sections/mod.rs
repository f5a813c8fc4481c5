// Landing page sections

/// Product name used across the site (single source of truth).
pub const BRAND: &str = "FINBUZZ.AI";

/// Copyright line shared by the footer and the usage guide's footer bar.
pub const COPYRIGHT: &str =
    "© 2025 FinBuzz.AI. All rights reserved. | Empowering your financial journey.";

mod about;
mod banner;
mod features;
mod footer;
mod hero;
mod how_it_works;
pub mod icons;
mod nav;

pub use about::About;
pub use banner::ConsoleBanner;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Navigation;
